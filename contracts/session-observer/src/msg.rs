use crate::interface::session_interface::{SessionEvent, WorkflowStatus};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub session: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    OnSessionEvent { seq: u64, event: SessionEvent },
    Detach {},
}

#[cw_serde]
pub struct PhaseResponse {
    pub phase: WorkflowStatus,
}

#[cw_serde]
pub struct ReceivedEvent {
    pub seq: u64,
    pub event: SessionEvent,
}

#[cw_serde]
pub struct ReceivedResponse {
    pub events: Vec<ReceivedEvent>,
}

#[cw_serde]
pub struct StatusResponse {
    pub session: Addr,
    pub last_seq: Option<u64>,
    pub received: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PhaseResponse)]
    Phase {},
    #[returns(ReceivedResponse)]
    Received {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(StatusResponse)]
    Status {},
}

pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;
