mod notification_display;
mod worker_scope;

pub use notification_display::*;
pub use worker_scope::*;
