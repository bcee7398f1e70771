use crate::{error::ContractError, events::SessionEvent, state::*};
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

pub fn submit(
    storage: &mut dyn Storage,
    registrar: Addr,
    description: String,
) -> Result<SessionEvent, ContractError> {
    if description.is_empty() {
        return Err(ContractError::EmptyProposal());
    }
    if let Some(existing) = PROPOSAL_DESCRIPTIONS.may_load(storage, &description)? {
        return Err(ContractError::DuplicateProposal(existing));
    }

    let proposal_id = PROPOSAL_COUNT.load(storage)?;
    PROPOSAL_DESCRIPTIONS.save(storage, &description, &proposal_id)?;
    PROPOSALS.save(
        storage,
        proposal_id,
        &Proposal {
            description,
            vote_count: 0,
            registrar,
        },
    )?;
    PROPOSAL_COUNT.save(storage, &(proposal_id + 1))?;
    Ok(SessionEvent::ProposalRegistered { proposal_id })
}

pub fn load(storage: &dyn Storage, proposal_id: u64) -> Result<Proposal, ContractError> {
    PROPOSALS
        .may_load(storage, proposal_id)?
        .ok_or(ContractError::ProposalNotFound(proposal_id))
}

pub fn count(storage: &dyn Storage) -> StdResult<u64> {
    PROPOSAL_COUNT.load(storage)
}

pub fn add_vote(storage: &mut dyn Storage, proposal_id: u64) -> Result<(), ContractError> {
    let mut proposal = load(storage, proposal_id)?;
    proposal.vote_count = proposal
        .vote_count
        .checked_add(1)
        .ok_or(ContractError::Overflow())?;
    PROPOSALS.save(storage, proposal_id, &proposal)?;
    Ok(())
}

/// Vote counts in proposal id order.
pub fn vote_counts(storage: &dyn Storage) -> StdResult<Vec<u64>> {
    PROPOSALS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, proposal)| proposal.vote_count))
        .collect()
}

pub fn list(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<(u64, Proposal)>> {
    PROPOSALS
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect()
}
