#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    Installing,
    WaitingToActivate,
    Active,
    Dispatching,
}
