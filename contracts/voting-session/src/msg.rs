use crate::events::LoggedEvent;
use crate::state::{Proposal, Voter};
use crate::workflow::WorkflowStatus;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: Option<String>,
    pub max_observers: Option<u32>,
}

#[cw_serde]
pub enum ExecuteMsg {
    RegisterVoter { address: String },
    SubmitProposal { description: String },
    StartProposalsRegistration {},
    EndProposalsRegistration {},
    StartVotingSession {},
    Vote { proposal_id: u64 },
    EndVotingSession {},
    TallyVotes {},
    Subscribe {},
    Unsubscribe {},
    RemoveObserver { address: String },
}

#[cw_serde]
pub struct PhaseResponse {
    pub phase: WorkflowStatus,
}

#[cw_serde]
pub struct SessionResponse {
    pub admin: Addr,
    pub phase: WorkflowStatus,
    pub voter_count: u64,
    pub proposal_count: u64,
    pub winning_proposal_id: u64,
    pub event_count: u64,
}

#[cw_serde]
pub struct VotersResponse {
    pub voters: Vec<Voter>,
}

pub type VoterResponse = Voter;

#[cw_serde]
pub struct IsRegisteredResponse {
    pub registered: bool,
}

#[cw_serde]
pub struct ProposalResponse {
    pub proposal_id: u64,
    pub description: String,
    pub vote_count: u64,
    pub registrar: Addr,
}

impl ProposalResponse {
    pub fn new(proposal_id: u64, proposal: Proposal) -> Self {
        ProposalResponse {
            proposal_id,
            description: proposal.description,
            vote_count: proposal.vote_count,
            registrar: proposal.registrar,
        }
    }
}

#[cw_serde]
pub struct ProposalsResponse {
    pub proposals: Vec<ProposalResponse>,
}

#[cw_serde]
pub struct ProposalCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct WinningProposalResponse {
    pub winning_proposal_id: u64,
    /// Set once votes are tallied.
    pub proposal: Option<ProposalResponse>,
}

#[cw_serde]
pub struct EventsResponse {
    pub events: Vec<LoggedEvent>,
}

#[cw_serde]
pub struct ObserversResponse {
    pub observers: Vec<Addr>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PhaseResponse)]
    Phase {},
    #[returns(SessionResponse)]
    Session {},
    /// `start_after` is the registration position of the last voter seen.
    #[returns(VotersResponse)]
    Voters {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(VoterResponse)]
    Voter { address: String },
    #[returns(IsRegisteredResponse)]
    IsRegistered { address: String },
    #[returns(ProposalResponse)]
    Proposal { proposal_id: u64 },
    #[returns(ProposalsResponse)]
    Proposals {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ProposalCountResponse)]
    ProposalCount {},
    #[returns(WinningProposalResponse)]
    WinningProposal {},
    #[returns(EventsResponse)]
    Events {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ObserversResponse)]
    Observers {},
}

pub const DEFAULT_MAX_OBSERVERS: u32 = 10;
pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;

pub const OBSERVER_DELIVERY_REPLY_ID: u64 = 1;
