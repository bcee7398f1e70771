use crate::interface::session_interface::{SessionEvent, WorkflowStatus};
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Subscription {
    pub owner: Addr,
    pub session: Addr,
    pub last_seq: Option<u64>,
}

pub const SUBSCRIPTION: Item<Subscription> = Item::new("subscription");
pub const PHASE: Item<WorkflowStatus> = Item::new("phase");
pub const RECEIVED: Map<u64, SessionEvent> = Map::new("received");
pub const RECEIVED_COUNT: Item<u64> = Item::new("received_count");
