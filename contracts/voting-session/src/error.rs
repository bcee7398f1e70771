use crate::workflow::WorkflowStatus;
use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),
    #[error("Unauthorized")]
    Unauthorized(),
    #[error("Operation requires phase {expected} but the session is in {current}")]
    InvalidPhase {
        expected: WorkflowStatus,
        current: WorkflowStatus,
    },
    #[error("Voter is already registered")]
    AlreadyRegistered(),
    #[error("You have already voted for proposal {0}")]
    AlreadyVoted(u64),
    #[error("Proposal already submitted with id {0}")]
    DuplicateProposal(u64),
    #[error("Proposal description can't be empty")]
    EmptyProposal(),
    #[error("At least 2 proposals are required, got {0}")]
    InsufficientProposals(u64),
    #[error("Proposal {0} not found")]
    ProposalNotFound(u64),
    #[error("Integer overflow")]
    Overflow(),
    #[error("Only contracts can subscribe to session events")]
    NotAContract(),
    #[error("Observer is already subscribed")]
    AlreadySubscribed(),
    #[error("Observer is not subscribed")]
    NotSubscribed(),
    #[error("Observer limit of {0} reached")]
    TooManyObservers(u32),
}
