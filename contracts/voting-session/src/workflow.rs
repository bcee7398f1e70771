use crate::{error::ContractError, events::SessionEvent, proposals, state::*, tally};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, Storage};
use std::fmt;

pub const MIN_PROPOSALS: u64 = 2;

#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord)]
pub enum WorkflowStatus {
    RegisteringVoters,
    ProposalsRegistrationStarted,
    ProposalsRegistrationEnded,
    VotingSessionStarted,
    VotingSessionEnded,
    VotesTallied,
}

impl WorkflowStatus {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<WorkflowStatus> {
        use WorkflowStatus::*;
        match self {
            RegisteringVoters => Some(ProposalsRegistrationStarted),
            ProposalsRegistrationStarted => Some(ProposalsRegistrationEnded),
            ProposalsRegistrationEnded => Some(VotingSessionStarted),
            VotingSessionStarted => Some(VotingSessionEnded),
            VotingSessionEnded => Some(VotesTallied),
            VotesTallied => None,
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use WorkflowStatus::*;
        let name = match self {
            RegisteringVoters => "registering_voters",
            ProposalsRegistrationStarted => "proposals_registration_started",
            ProposalsRegistrationEnded => "proposals_registration_ended",
            VotingSessionStarted => "voting_session_started",
            VotingSessionEnded => "voting_session_ended",
            VotesTallied => "votes_tallied",
        };
        f.write_str(name)
    }
}

pub fn ensure_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(storage)?;
    if config.admin != *sender {
        return Err(ContractError::Unauthorized());
    }
    Ok(())
}

pub fn ensure_phase(storage: &dyn Storage, expected: WorkflowStatus) -> Result<(), ContractError> {
    let current = PHASE.load(storage)?;
    if current != expected {
        return Err(ContractError::InvalidPhase { expected, current });
    }
    Ok(())
}

fn authorize_transition(
    storage: &dyn Storage,
    sender: &Addr,
    from: WorkflowStatus,
) -> Result<(), ContractError> {
    ensure_admin(storage, sender)?;
    ensure_phase(storage, from)
}

fn advance(
    storage: &mut dyn Storage,
    from: WorkflowStatus,
    announcement: SessionEvent,
) -> Result<Vec<SessionEvent>, ContractError> {
    let to = from
        .next()
        .ok_or_else(|| StdError::generic_err(format!("No phase follows {}", from)))?;
    PHASE.save(storage, &to)?;
    Ok(vec![
        announcement,
        SessionEvent::WorkflowStatusChange {
            previous_status: from,
            new_status: to,
        },
    ])
}

pub fn start_proposals_registration(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Vec<SessionEvent>, ContractError> {
    authorize_transition(storage, sender, WorkflowStatus::RegisteringVoters)?;
    advance(
        storage,
        WorkflowStatus::RegisteringVoters,
        SessionEvent::ProposalsRegistrationStarted {},
    )
}

pub fn end_proposals_registration(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Vec<SessionEvent>, ContractError> {
    authorize_transition(storage, sender, WorkflowStatus::ProposalsRegistrationStarted)?;
    let count = proposals::count(storage)?;
    if count < MIN_PROPOSALS {
        return Err(ContractError::InsufficientProposals(count));
    }
    advance(
        storage,
        WorkflowStatus::ProposalsRegistrationStarted,
        SessionEvent::ProposalsRegistrationEnded {},
    )
}

pub fn start_voting_session(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Vec<SessionEvent>, ContractError> {
    authorize_transition(storage, sender, WorkflowStatus::ProposalsRegistrationEnded)?;
    advance(
        storage,
        WorkflowStatus::ProposalsRegistrationEnded,
        SessionEvent::VotingSessionStarted {},
    )
}

pub fn end_voting_session(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Vec<SessionEvent>, ContractError> {
    authorize_transition(storage, sender, WorkflowStatus::VotingSessionStarted)?;
    advance(
        storage,
        WorkflowStatus::VotingSessionStarted,
        SessionEvent::VotingSessionEnded {},
    )
}

pub fn tally_votes(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Vec<SessionEvent>, ContractError> {
    authorize_transition(storage, sender, WorkflowStatus::VotingSessionEnded)?;
    let winning_proposal_id = tally::winning_proposal(proposals::vote_counts(storage)?);
    WINNING_PROPOSAL.save(storage, &winning_proposal_id)?;
    advance(
        storage,
        WorkflowStatus::VotingSessionEnded,
        SessionEvent::VotesTallied {
            winning_proposal_id,
        },
    )
}
