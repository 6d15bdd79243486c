//!
//! Authenticated HTTP client used to talk with the helpdesk backend.
//!

mod api_client;
mod error;
mod session;

pub use api_client::{ApiClient, ApiClientConfig};
pub use error::Error;
pub use session::Session;
