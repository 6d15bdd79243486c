pub mod delivery_agent;
