use crate::{error::Error, model::NotificationSettings};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsService: Send + Sync {
    ///
    /// Fetch settings from the backend and cache them.
    /// Failure and empty response give default settings.
    ///
    async fn load(&self) -> NotificationSettings;

    /// Cached settings, `None` before [SettingsService::load]
    fn current(&self) -> Option<NotificationSettings>;

    ///
    /// Store settings in the backend and replace cached ones with the response
    ///
    /// ### Errors
    /// - [Error::NotAuthenticated]
    /// - [Error::Transport] when backend rejected the update
    ///
    async fn save(&self, settings: NotificationSettings) -> Result<NotificationSettings, Error>;

    /// [SettingsService::save] for loosely typed input, fields are coerced to booleans
    async fn save_loose(&self, value: &Value) -> Result<NotificationSettings, Error>;

    ///
    /// Persist `browser_notifications` flag keeping the other fields.
    /// Does nothing when settings were not loaded yet.
    ///
    async fn set_browser_notifications(&self, enabled: bool) -> Result<(), Error>;

    /// Forget cached settings (session ended)
    fn reset(&self);

    fn subscribe(&self) -> watch::Receiver<Option<NotificationSettings>>;
}
