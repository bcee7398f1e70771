use crate::events::SessionEvent;
use crate::workflow::WorkflowStatus;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub admin: Addr,
    pub max_observers: u32,
}

#[cw_serde]
pub struct Voter {
    pub address: Addr,
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: Option<u64>,
}

#[cw_serde]
pub struct Proposal {
    pub description: String,
    pub vote_count: u64,
    pub registrar: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const PHASE: Item<WorkflowStatus> = Item::new("phase");
pub const WINNING_PROPOSAL: Item<u64> = Item::new("winning_proposal");

pub const VOTERS: Map<&Addr, Voter> = Map::new("voters");
pub const VOTER_ORDER: Map<u64, Addr> = Map::new("voter_order");
pub const VOTER_COUNT: Item<u64> = Item::new("voter_count");

pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");
pub const PROPOSAL_COUNT: Item<u64> = Item::new("proposal_count");
pub const PROPOSAL_DESCRIPTIONS: Map<&str, u64> = Map::new("proposal_descriptions");

pub const EVENT_LOG: Map<u64, SessionEvent> = Map::new("event_log");
pub const EVENT_COUNT: Item<u64> = Item::new("event_count");
pub const OBSERVERS: Map<&Addr, Empty> = Map::new("observers");
pub const OBSERVER_COUNT: Item<u32> = Item::new("observer_count");
