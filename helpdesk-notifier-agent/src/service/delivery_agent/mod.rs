mod delivery_agent;
mod delivery_agent_handle;
mod dto;

pub use delivery_agent::*;
pub use delivery_agent_handle::*;
pub use dto::{AgentEvent, AgentState, ClickOutcome, DeliveryAgentConfig};
