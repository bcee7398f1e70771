pub mod contract;
pub mod error;
pub mod events;
pub mod interface;
pub mod msg;
pub mod proposals;
pub mod registry;
pub mod state;
pub mod tally;
pub mod workflow;

pub use crate::error::ContractError;
