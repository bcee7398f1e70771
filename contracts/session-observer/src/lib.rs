pub mod contract;
pub mod error;
pub mod interface;
pub mod msg;
pub mod state;
