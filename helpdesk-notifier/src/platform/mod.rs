mod headless_push_transport;
mod permission_state;
mod push_transport;

pub use headless_push_transport::*;
pub use permission_state::*;
pub use push_transport::*;
