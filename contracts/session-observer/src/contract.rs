use crate::{error::ContractError, interface::*, msg::*, state::*};
use cosmwasm_std::{
    to_json_binary, wasm_execute, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdResult,
};
use cw_storage_plus::Bound;

#[cfg_attr(not(feature = "library"), cosmwasm_std::entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let session = deps.api.addr_validate(&msg.session)?;
    let phase = deps
        .querier
        .query_wasm_smart::<session_interface::PhaseResponse>(
            &session,
            &session_interface::QueryMsg::Phase {},
        )?
        .phase;
    SUBSCRIPTION.save(
        deps.storage,
        &Subscription {
            owner: info.sender,
            session: session.clone(),
            last_seq: None,
        },
    )?;
    PHASE.save(deps.storage, &phase)?;
    RECEIVED_COUNT.save(deps.storage, &0)?;

    let subscribe = wasm_execute(
        session.to_string(),
        &session_interface::ExecuteMsg::Subscribe {},
        vec![],
    )?;
    Ok(Response::new()
        .add_message(subscribe)
        .add_event(Event::new("observer-attached").add_attribute("session", session)))
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
        OnSessionEvent { seq, event } => execute::on_session_event(deps, info, seq, event),
        Detach {} => execute::detach(deps, info),
    }
}

mod execute {
    use super::*;
    use crate::interface::session_interface::SessionEvent;

    pub fn on_session_event(
        deps: DepsMut,
        info: MessageInfo,
        seq: u64,
        event: SessionEvent,
    ) -> Result<Response, ContractError> {
        let mut subscription = SUBSCRIPTION.load(deps.storage)?;
        if info.sender != subscription.session {
            return Err(ContractError::UnknownSession());
        }
        if matches!(subscription.last_seq, Some(last) if seq <= last) {
            return Ok(Response::new()
                .add_event(Event::new("duplicate-ignored").add_attribute("seq", seq.to_string())));
        }

        // The session owns the phase; re-read it instead of deriving it from the event.
        if let SessionEvent::WorkflowStatusChange { .. } = event {
            let phase = deps
                .querier
                .query_wasm_smart::<session_interface::PhaseResponse>(
                    &subscription.session,
                    &session_interface::QueryMsg::Phase {},
                )?
                .phase;
            PHASE.save(deps.storage, &phase)?;
        }

        RECEIVED.save(deps.storage, seq, &event)?;
        RECEIVED_COUNT.update(deps.storage, |count| -> StdResult<u64> { Ok(count + 1) })?;
        subscription.last_seq = Some(seq);
        SUBSCRIPTION.save(deps.storage, &subscription)?;

        Ok(Response::new()
            .add_event(Event::new("session-event-received").add_attribute("seq", seq.to_string())))
    }

    pub fn detach(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
        let subscription = SUBSCRIPTION.load(deps.storage)?;
        if info.sender != subscription.owner {
            return Err(ContractError::Unauthorized());
        }
        let unsubscribe = wasm_execute(
            subscription.session.to_string(),
            &session_interface::ExecuteMsg::Unsubscribe {},
            vec![],
        )?;
        Ok(Response::new().add_message(unsubscribe).add_event(
            Event::new("observer-detached").add_attribute("session", subscription.session),
        ))
    }
}

#[cfg_attr(not(feature = "library"), cosmwasm_std::entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        Phase {} => to_json_binary(&PhaseResponse {
            phase: PHASE.load(deps.storage)?,
        }),
        Received { start_after, limit } => {
            to_json_binary(&query::received(deps, start_after, limit)?)
        }
        Status {} => to_json_binary(&query::status(deps)?),
    }
}

mod query {
    use super::*;

    pub fn received(
        deps: Deps,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<ReceivedResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let events = RECEIVED
            .range(
                deps.storage,
                start_after.map(Bound::exclusive),
                None,
                Order::Ascending,
            )
            .take(limit)
            .map(|item| item.map(|(seq, event)| ReceivedEvent { seq, event }))
            .collect::<StdResult<Vec<_>>>()?;
        Ok(ReceivedResponse { events })
    }

    pub fn status(deps: Deps) -> StdResult<StatusResponse> {
        let subscription = SUBSCRIPTION.load(deps.storage)?;
        Ok(StatusResponse {
            session: subscription.session,
            last_seq: subscription.last_seq,
            received: RECEIVED_COUNT.load(deps.storage)?,
        })
    }
}
