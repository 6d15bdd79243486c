mod notification_settings_repository;
mod notification_settings_repository_impl;
mod notifications_repository;
mod notifications_repository_impl;
mod push_subscriptions_repository;
mod push_subscriptions_repository_impl;

pub use api_client::Error;
pub use notification_settings_repository::*;
pub use notification_settings_repository_impl::*;
pub use notifications_repository::*;
pub use notifications_repository_impl::*;
pub use push_subscriptions_repository::*;
pub use push_subscriptions_repository_impl::*;
