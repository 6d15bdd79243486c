use super::NotificationsRepository;
use crate::{dto::input, model::Notification, repository};
use api_client::ApiClient;
use async_trait::async_trait;

const NOTIFICATIONS: &str = "notifications";

pub struct NotificationsRepositoryImpl {
    client: ApiClient,
}

impl NotificationsRepositoryImpl {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Notification>, repository::Error> {
        let notifications = self
            .client
            .get_optional::<Vec<input::Notification>>(NOTIFICATIONS)
            .await?
            .unwrap_or_default();
        tracing::debug!(count = notifications.len(), "fetched notifications");

        let notifications = notifications.into_iter().map(Notification::from).collect();

        Ok(notifications)
    }

    async fn count_unread(&self) -> Result<usize, repository::Error> {
        let path = format!("{NOTIFICATIONS}/unread-count");
        let count = self.client.get::<input::UnreadCount>(&path).await?;

        Ok(count.count())
    }

    async fn mark_read(&self, id: i64) -> Result<(), repository::Error> {
        let path = format!("{NOTIFICATIONS}/{id}/mark-read");
        self.client.post(&path, &serde_json::json!({})).await?;
        tracing::debug!(id, "marked notification as read");

        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), repository::Error> {
        let path = format!("{NOTIFICATIONS}/mark-all-read");
        self.client.post(&path, &serde_json::json!({})).await?;
        tracing::debug!("marked all notifications as read");

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), repository::Error> {
        let path = format!("{NOTIFICATIONS}/{id}");
        self.client.delete::<()>(&path, None).await?;
        tracing::debug!(id, "deleted notification");

        Ok(())
    }
}
