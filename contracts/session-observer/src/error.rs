use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),
    #[error("Sender is not the observed session")]
    UnknownSession(),
    #[error("Only the owner can detach the observer")]
    Unauthorized(),
}
