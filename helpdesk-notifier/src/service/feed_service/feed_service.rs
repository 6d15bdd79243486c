use super::FeedSnapshot;
use crate::error::Error;
use async_trait::async_trait;
use tokio::sync::watch;

///
/// Notification feed of the current user with read/unread state.
///
/// Every operation does nothing when the session is not authenticated
/// or the service was closed.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedService: Send + Sync {
    ///
    /// Replace the feed with the backend one.
    /// Failure leaves an empty feed.
    ///
    async fn fetch_feed(&self);

    ///
    /// Publish unread counter reported by the backend.
    /// Failure leaves state unchanged.
    ///
    async fn fetch_unread_count(&self) -> Option<usize>;

    async fn mark_as_read(&self, id: i64);

    async fn mark_all_as_read(&self);

    ///
    /// ### Errors
    /// - [Error::NotAuthenticated]
    /// - [Error::Transport] when backend refused to delete
    ///
    async fn delete_notification(&self, id: i64) -> Result<(), Error>;

    fn snapshot(&self) -> FeedSnapshot;

    fn subscribe(&self) -> watch::Receiver<FeedSnapshot>;

    /// Drop local feed (session ended)
    fn reset(&self);

    ///
    /// Stop applying results. Requests still in flight
    /// are discarded once they resolve.
    ///
    fn close(&self);
}
