use crate::{error::ContractError, events, msg::*, proposals, registry, state::*, workflow};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response, StdError,
    StdResult, SubMsgResult,
};

#[cfg_attr(not(feature = "library"), cosmwasm_std::entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
            max_observers: msg.max_observers.unwrap_or(DEFAULT_MAX_OBSERVERS),
        },
    )?;
    PHASE.save(deps.storage, &workflow::WorkflowStatus::RegisteringVoters)?;
    WINNING_PROPOSAL.save(deps.storage, &0)?;
    VOTER_COUNT.save(deps.storage, &0)?;
    PROPOSAL_COUNT.save(deps.storage, &0)?;
    EVENT_COUNT.save(deps.storage, &0)?;
    OBSERVER_COUNT.save(deps.storage, &0)?;
    Ok(Response::new().add_event(Event::new("session-instantiated").add_attribute("admin", admin)))
}

#[cfg_attr(not(feature = "library"), cosmwasm_std::entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    cw_utils::nonpayable(&info)?;
    use ExecuteMsg::*;
    match msg {
        RegisterVoter { address } => execute::register_voter(deps, info, address),
        SubmitProposal { description } => execute::submit_proposal(deps, info, description),
        StartProposalsRegistration {} => execute::transition(
            deps,
            info,
            workflow::start_proposals_registration,
        ),
        EndProposalsRegistration {} => {
            execute::transition(deps, info, workflow::end_proposals_registration)
        }
        StartVotingSession {} => execute::transition(deps, info, workflow::start_voting_session),
        Vote { proposal_id } => execute::vote(deps, info, proposal_id),
        EndVotingSession {} => execute::transition(deps, info, workflow::end_voting_session),
        TallyVotes {} => execute::transition(deps, info, workflow::tally_votes),
        Subscribe {} => execute::subscribe(deps, info),
        Unsubscribe {} => execute::unsubscribe(deps, info),
        RemoveObserver { address } => execute::remove_observer(deps, info, address),
    }
}

mod execute {
    use super::*;
    use crate::events::SessionEvent;
    use crate::workflow::WorkflowStatus;
    use cosmwasm_std::{Addr, Storage};

    pub fn register_voter(
        deps: DepsMut,
        info: MessageInfo,
        address: String,
    ) -> Result<Response, ContractError> {
        workflow::ensure_admin(deps.storage, &info.sender)?;
        workflow::ensure_phase(deps.storage, WorkflowStatus::RegisteringVoters)?;
        let voter = deps.api.addr_validate(&address)?;
        let event = registry::register(deps.storage, voter)?;
        Ok(events::publish(deps.storage, vec![event])?)
    }

    pub fn submit_proposal(
        deps: DepsMut,
        info: MessageInfo,
        description: String,
    ) -> Result<Response, ContractError> {
        if !registry::is_registered(deps.storage, &info.sender) {
            return Err(ContractError::Unauthorized());
        }
        workflow::ensure_phase(deps.storage, WorkflowStatus::ProposalsRegistrationStarted)?;
        let event = proposals::submit(deps.storage, info.sender, description)?;
        Ok(events::publish(deps.storage, vec![event])?)
    }

    pub fn transition(
        deps: DepsMut,
        info: MessageInfo,
        edge: fn(&mut dyn Storage, &Addr) -> Result<Vec<SessionEvent>, ContractError>,
    ) -> Result<Response, ContractError> {
        let emitted = edge(deps.storage, &info.sender)?;
        Ok(events::publish(deps.storage, emitted)?)
    }

    pub fn vote(
        deps: DepsMut,
        info: MessageInfo,
        proposal_id: u64,
    ) -> Result<Response, ContractError> {
        if !registry::is_registered(deps.storage, &info.sender) {
            return Err(ContractError::Unauthorized());
        }
        workflow::ensure_phase(deps.storage, WorkflowStatus::VotingSessionStarted)?;
        registry::ensure_not_voted(deps.storage, &info.sender)?;
        proposals::add_vote(deps.storage, proposal_id)?;
        registry::record_vote(deps.storage, &info.sender, proposal_id)?;
        Ok(events::publish(
            deps.storage,
            vec![SessionEvent::Voted {
                voter: info.sender,
                proposal_id,
            }],
        )?)
    }

    pub fn subscribe(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
        if deps
            .querier
            .query_wasm_contract_info(info.sender.to_string())
            .is_err()
        {
            return Err(ContractError::NotAContract());
        }
        events::subscribe(deps.storage, &info.sender)?;
        Ok(Response::new()
            .add_event(Event::new("observer-subscribed").add_attribute("observer", info.sender)))
    }

    pub fn unsubscribe(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
        events::unsubscribe(deps.storage, &info.sender)?;
        Ok(Response::new()
            .add_event(Event::new("observer-unsubscribed").add_attribute("observer", info.sender)))
    }

    pub fn remove_observer(
        deps: DepsMut,
        info: MessageInfo,
        address: String,
    ) -> Result<Response, ContractError> {
        workflow::ensure_admin(deps.storage, &info.sender)?;
        let observer = deps.api.addr_validate(&address)?;
        events::unsubscribe(deps.storage, &observer)?;
        Ok(Response::new().add_event(
            Event::new("observer-removed")
                .add_attribute("observer", observer)
                .add_attribute("by", info.sender),
        ))
    }
}

#[cfg_attr(not(feature = "library"), cosmwasm_std::entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Phase {} => to_json_binary(&PhaseResponse {
            phase: PHASE.load(deps.storage)?,
        }),
        QueryMsg::Session {} => to_json_binary(&query::session(deps)?),
        QueryMsg::Voters { start_after, limit } => to_json_binary(&VotersResponse {
            voters: registry::list(deps.storage, start_after, query::page_limit(limit))?,
        }),
        QueryMsg::Voter { address } => to_json_binary(&query::voter(deps, &address)?),
        QueryMsg::IsRegistered { address } => {
            let addr = deps.api.addr_validate(&address)?;
            to_json_binary(&IsRegisteredResponse {
                registered: registry::is_registered(deps.storage, &addr),
            })
        }
        QueryMsg::Proposal { proposal_id } => {
            to_json_binary(&query::proposal(deps, proposal_id)?)
        }
        QueryMsg::Proposals { start_after, limit } => {
            let proposals = proposals::list(deps.storage, start_after, query::page_limit(limit))?
                .into_iter()
                .map(|(id, proposal)| ProposalResponse::new(id, proposal))
                .collect();
            to_json_binary(&ProposalsResponse { proposals })
        }
        QueryMsg::ProposalCount {} => to_json_binary(&ProposalCountResponse {
            count: proposals::count(deps.storage)?,
        }),
        QueryMsg::WinningProposal {} => to_json_binary(&query::winning_proposal(deps)?),
        QueryMsg::Events { start_after, limit } => to_json_binary(&EventsResponse {
            events: events::range(deps.storage, start_after, query::page_limit(limit))?,
        }),
        QueryMsg::Observers {} => to_json_binary(&ObserversResponse {
            observers: events::observers(deps.storage)?,
        }),
    }
}

mod query {
    use super::*;
    use crate::workflow::WorkflowStatus;

    pub fn page_limit(limit: Option<u32>) -> usize {
        limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
    }

    pub fn session(deps: Deps) -> StdResult<SessionResponse> {
        Ok(SessionResponse {
            admin: CONFIG.load(deps.storage)?.admin,
            phase: PHASE.load(deps.storage)?,
            voter_count: registry::count(deps.storage)?,
            proposal_count: proposals::count(deps.storage)?,
            winning_proposal_id: WINNING_PROPOSAL.load(deps.storage)?,
            event_count: events::count(deps.storage)?,
        })
    }

    pub fn voter(deps: Deps, address: &str) -> StdResult<VoterResponse> {
        let addr = deps.api.addr_validate(address)?;
        VOTERS.load(deps.storage, &addr)
    }

    pub fn proposal(deps: Deps, proposal_id: u64) -> StdResult<ProposalResponse> {
        let proposal = PROPOSALS.load(deps.storage, proposal_id)?;
        Ok(ProposalResponse::new(proposal_id, proposal))
    }

    pub fn winning_proposal(deps: Deps) -> StdResult<WinningProposalResponse> {
        let winning_proposal_id = WINNING_PROPOSAL.load(deps.storage)?;
        let proposal = if PHASE.load(deps.storage)? == WorkflowStatus::VotesTallied {
            Some(proposal(deps, winning_proposal_id)?)
        } else {
            None
        };
        Ok(WinningProposalResponse {
            winning_proposal_id,
            proposal,
        })
    }
}

#[cfg_attr(not(feature = "library"), cosmwasm_std::entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        OBSERVER_DELIVERY_REPLY_ID => reply::observer_delivery(deps, msg),
        id => Err(ContractError::from(StdError::generic_err(format!(
            "Unknown reply id: {}",
            id
        )))),
    }
}

mod reply {
    use super::*;

    // Dispatched with reply_on_error only; a failed observer must not revert the session.
    pub fn observer_delivery(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
        let err = match msg.result {
            SubMsgResult::Err(err) => err,
            SubMsgResult::Ok(_) => {
                return Err(ContractError::from(StdError::generic_err(
                    "Unexpected reply for a successful observer delivery",
                )))
            }
        };
        deps.api
            .debug(&format!("session event delivery failed: {}", err));
        Ok(Response::new()
            .add_event(Event::new("observer-delivery-failed").add_attribute("error", err)))
    }
}
