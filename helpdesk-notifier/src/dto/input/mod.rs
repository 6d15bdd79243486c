mod notification;
mod unread_count;
mod vapid_public_key;

pub use notification::*;
pub use unread_count::*;
pub use vapid_public_key::*;
