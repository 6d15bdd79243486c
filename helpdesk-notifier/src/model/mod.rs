mod notification;
mod notification_settings;
mod push_subscription;
mod vapid_key_material;

pub use notification::*;
pub use notification_settings::*;
pub use push_subscription::*;
pub use vapid_key_material::*;
