use crate::{
    error::ContractError, interface::observer_interface, msg::OBSERVER_DELIVERY_REPLY_ID,
    state::*, workflow::WorkflowStatus,
};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    wasm_execute, Addr, Empty, Event, Order, Response, StdResult, Storage, SubMsg,
};
use cw_storage_plus::Bound;

#[cw_serde]
pub enum SessionEvent {
    VoterRegistered {
        voter: Addr,
    },
    WorkflowStatusChange {
        previous_status: WorkflowStatus,
        new_status: WorkflowStatus,
    },
    ProposalRegistered {
        proposal_id: u64,
    },
    Voted {
        voter: Addr,
        proposal_id: u64,
    },
    ProposalsRegistrationStarted {},
    ProposalsRegistrationEnded {},
    VotingSessionStarted {},
    VotingSessionEnded {},
    VotesTallied {
        winning_proposal_id: u64,
    },
}

impl SessionEvent {
    pub fn kind(&self) -> &'static str {
        use SessionEvent::*;
        match self {
            VoterRegistered { .. } => "voter-registered",
            WorkflowStatusChange { .. } => "workflow-status-change",
            ProposalRegistered { .. } => "proposal-registered",
            Voted { .. } => "voted",
            ProposalsRegistrationStarted {} => "proposals-registration-started",
            ProposalsRegistrationEnded {} => "proposals-registration-ended",
            VotingSessionStarted {} => "voting-session-started",
            VotingSessionEnded {} => "voting-session-ended",
            VotesTallied { .. } => "votes-tallied",
        }
    }

    pub fn to_event(&self, seq: u64) -> Event {
        use SessionEvent::*;
        let event = Event::new(self.kind()).add_attribute("seq", seq.to_string());
        match self {
            VoterRegistered { voter } => event.add_attribute("address", voter.to_string()),
            WorkflowStatusChange {
                previous_status,
                new_status,
            } => event
                .add_attribute("previous_status", previous_status.as_u8().to_string())
                .add_attribute("new_status", new_status.as_u8().to_string()),
            ProposalRegistered { proposal_id } => {
                event.add_attribute("proposal_id", proposal_id.to_string())
            }
            Voted { voter, proposal_id } => event
                .add_attribute("voter", voter.to_string())
                .add_attribute("proposal_id", proposal_id.to_string()),
            VotesTallied {
                winning_proposal_id,
            } => event.add_attribute("winning_proposal_id", winning_proposal_id.to_string()),
            ProposalsRegistrationStarted {}
            | ProposalsRegistrationEnded {}
            | VotingSessionStarted {}
            | VotingSessionEnded {} => event,
        }
    }
}

#[cw_serde]
pub struct LoggedEvent {
    pub seq: u64,
    pub event: SessionEvent,
}

pub fn publish(storage: &mut dyn Storage, events: Vec<SessionEvent>) -> StdResult<Response> {
    let observers = OBSERVERS
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;
    let mut seq = EVENT_COUNT.load(storage)?;
    let mut resp = Response::new();

    for event in events {
        EVENT_LOG.save(storage, seq, &event)?;
        resp = resp.add_event(event.to_event(seq));
        for observer in observers.iter() {
            let msg = wasm_execute(
                observer.to_string(),
                &observer_interface::ExecuteMsg::OnSessionEvent {
                    seq,
                    event: event.clone(),
                },
                vec![],
            )?;
            resp = resp.add_submessage(SubMsg::reply_on_error(msg, OBSERVER_DELIVERY_REPLY_ID));
        }
        seq += 1;
    }

    EVENT_COUNT.save(storage, &seq)?;
    Ok(resp)
}

pub fn subscribe(storage: &mut dyn Storage, observer: &Addr) -> Result<(), ContractError> {
    if OBSERVERS.has(storage, observer) {
        return Err(ContractError::AlreadySubscribed());
    }
    let max_observers = CONFIG.load(storage)?.max_observers;
    let count = OBSERVER_COUNT.load(storage)?;
    if count >= max_observers {
        return Err(ContractError::TooManyObservers(max_observers));
    }
    OBSERVERS.save(storage, observer, &Empty {})?;
    OBSERVER_COUNT.save(storage, &(count + 1))?;
    Ok(())
}

pub fn unsubscribe(storage: &mut dyn Storage, observer: &Addr) -> Result<(), ContractError> {
    if !OBSERVERS.has(storage, observer) {
        return Err(ContractError::NotSubscribed());
    }
    OBSERVERS.remove(storage, observer);
    OBSERVER_COUNT.update(storage, |count| -> StdResult<u32> {
        Ok(count.saturating_sub(1))
    })?;
    Ok(())
}

pub fn observers(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    OBSERVERS
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

pub fn range(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<LoggedEvent>> {
    EVENT_LOG
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(seq, event)| LoggedEvent { seq, event }))
        .collect()
}

pub fn count(storage: &dyn Storage) -> StdResult<u64> {
    EVENT_COUNT.load(storage)
}
