mod agent_event;
mod agent_state;
mod click_outcome;
mod delivery_agent_config;

pub use agent_event::AgentEvent;
pub use agent_state::AgentState;
pub use click_outcome::ClickOutcome;
pub use delivery_agent_config::DeliveryAgentConfig;
