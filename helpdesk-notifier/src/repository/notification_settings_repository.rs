use crate::{model::NotificationSettings, repository};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSettingsRepository: Send + Sync {
    ///
    /// ### Returns
    /// `None` when backend has no settings stored for the user
    ///
    async fn find(&self) -> Result<Option<NotificationSettings>, repository::Error>;

    ///
    /// ### Returns
    /// settings stored by the backend, `None` when backend echoed nothing
    ///
    async fn update(
        &self,
        settings: NotificationSettings,
    ) -> Result<Option<NotificationSettings>, repository::Error>;
}
