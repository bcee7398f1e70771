pub mod observer_interface {
    use crate::events::SessionEvent;
    use cosmwasm_schema::cw_serde;

    #[cw_serde]
    pub enum ExecuteMsg {
        OnSessionEvent { seq: u64, event: SessionEvent },
    }
}
