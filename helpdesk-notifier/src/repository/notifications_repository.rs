use crate::{model::Notification, repository};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    /// Notifications of the current user, newest first
    async fn find_all(&self) -> Result<Vec<Notification>, repository::Error>;

    async fn count_unread(&self) -> Result<usize, repository::Error>;

    async fn mark_read(&self, id: i64) -> Result<(), repository::Error>;

    async fn mark_all_read(&self) -> Result<(), repository::Error>;

    async fn delete(&self, id: i64) -> Result<(), repository::Error>;
}
