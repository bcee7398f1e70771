use crate::{error::ContractError, events::SessionEvent, state::*};
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

pub fn is_registered(storage: &dyn Storage, address: &Addr) -> bool {
    VOTERS.has(storage, address)
}

pub fn register(storage: &mut dyn Storage, address: Addr) -> Result<SessionEvent, ContractError> {
    if is_registered(storage, &address) {
        return Err(ContractError::AlreadyRegistered());
    }
    let position = VOTER_COUNT.load(storage)?;
    VOTERS.save(
        storage,
        &address,
        &Voter {
            address: address.clone(),
            is_registered: true,
            has_voted: false,
            voted_proposal_id: None,
        },
    )?;
    VOTER_ORDER.save(storage, position, &address)?;
    VOTER_COUNT.save(storage, &(position + 1))?;
    Ok(SessionEvent::VoterRegistered { voter: address })
}

pub fn ensure_not_voted(storage: &dyn Storage, address: &Addr) -> Result<(), ContractError> {
    let voter = VOTERS.load(storage, address)?;
    if voter.has_voted {
        return Err(ContractError::AlreadyVoted(
            voter.voted_proposal_id.unwrap_or_default(),
        ));
    }
    Ok(())
}

pub fn record_vote(
    storage: &mut dyn Storage,
    address: &Addr,
    proposal_id: u64,
) -> Result<(), ContractError> {
    VOTERS.update(storage, address, |voter| -> Result<Voter, ContractError> {
        match voter {
            Some(mut data) => {
                data.has_voted = true;
                data.voted_proposal_id = Some(proposal_id);
                Ok(data)
            }
            None => Err(ContractError::Unauthorized()),
        }
    })?;
    Ok(())
}

/// Voters in registration order, starting after position `start_after`.
pub fn list(storage: &dyn Storage, start_after: Option<u64>, limit: usize) -> StdResult<Vec<Voter>> {
    VOTER_ORDER
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (_, address) = item?;
            VOTERS.load(storage, &address)
        })
        .collect()
}

pub fn count(storage: &dyn Storage) -> StdResult<u64> {
    VOTER_COUNT.load(storage)
}
