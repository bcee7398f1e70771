pub mod session_interface {
    use cosmwasm_schema::{cw_serde, QueryResponses};
    use cosmwasm_std::Addr;

    #[cw_serde]
    #[derive(Copy, Eq)]
    pub enum WorkflowStatus {
        RegisteringVoters,
        ProposalsRegistrationStarted,
        ProposalsRegistrationEnded,
        VotingSessionStarted,
        VotingSessionEnded,
        VotesTallied,
    }

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

    #[cw_serde]
    pub enum ExecuteMsg {
        Subscribe {},
        Unsubscribe {},
    }

    #[cw_serde]
    pub struct PhaseResponse {
        pub phase: WorkflowStatus,
    }

    #[cw_serde]
    #[derive(QueryResponses)]
    pub enum QueryMsg {
        #[returns(PhaseResponse)]
        Phase {},
    }
}
