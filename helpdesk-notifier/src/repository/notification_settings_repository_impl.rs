use super::NotificationSettingsRepository;
use crate::{model::NotificationSettings, repository};
use api_client::ApiClient;
use async_trait::async_trait;

const SETTINGS: &str = "notifications/settings";

pub struct NotificationSettingsRepositoryImpl {
    client: ApiClient,
}

impl NotificationSettingsRepositoryImpl {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationSettingsRepository for NotificationSettingsRepositoryImpl {
    async fn find(&self) -> Result<Option<NotificationSettings>, repository::Error> {
        self.client.get_optional(SETTINGS).await
    }

    async fn update(
        &self,
        settings: NotificationSettings,
    ) -> Result<Option<NotificationSettings>, repository::Error> {
        self.client.put(SETTINGS, &settings).await
    }
}
