mod toast_service;
mod tracing_toast_service;

pub use toast_service::*;
pub use tracing_toast_service::*;
