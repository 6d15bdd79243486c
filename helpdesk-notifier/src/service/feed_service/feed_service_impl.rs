use super::{FeedService, FeedSnapshot};
use crate::{
    error::Error, model::Notification, repository::NotificationsRepository,
    service::toast_service::ToastService,
};
use api_client::Session;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};
use time::OffsetDateTime;
use tokio::sync::watch;

const TOAST_ALL_READ: &str = "Tüm bildirimler okundu olarak işaretlendi";
const TOAST_ALL_READ_FAILED: &str = "Bildirimler işaretlenirken bir hata oluştu";

///
/// Feed store kept in a watch channel.
///
/// Every feed fetch and every local mutation takes the next generation number.
/// Fetch result is applied only when its generation is still the newest one,
/// so a slow response never overwrites newer state.
///
pub struct FeedServiceImpl {
    session: Session,
    repository: Arc<dyn NotificationsRepository>,
    toast_service: Arc<dyn ToastService>,
    feed_tx: watch::Sender<FeedSnapshot>,
    generation: AtomicU64,
    closed: AtomicBool,
}

impl FeedServiceImpl {
    pub fn new(
        session: Session,
        repository: Arc<dyn NotificationsRepository>,
        toast_service: Arc<dyn ToastService>,
    ) -> Self {
        let (feed_tx, _) = watch::channel(FeedSnapshot::default());

        Self {
            session,
            repository,
            toast_service,
            feed_tx,
            generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    fn is_active(&self) -> bool {
        !self.closed.load(Ordering::SeqCst) && self.session.is_authenticated()
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.closed.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == generation
    }

    ///
    /// Apply local change. Fetches started earlier become stale.
    ///
    fn modify<F>(&self, modify: F) -> bool
    where
        F: FnOnce(&mut FeedSnapshot) -> bool,
    {
        self.feed_tx.send_if_modified(|feed| {
            if self.closed.load(Ordering::SeqCst) {
                return false;
            }
            self.next_generation();

            modify(feed)
        })
    }

    ///
    /// Replace feed with fetched notifications if `generation` is still the newest
    ///
    fn apply_fetched(&self, generation: u64, notifications: Vec<Notification>) {
        let fetched = FeedSnapshot::new(notifications);

        let mut applied = false;
        self.feed_tx.send_if_modified(|feed| {
            if !self.is_current(generation) {
                return false;
            }
            applied = true;
            if *feed == fetched {
                return false;
            }
            *feed = fetched;

            true
        });

        if applied {
            tracing::debug!(generation, "applied feed");
        } else {
            tracing::debug!(generation, "discarded stale feed");
        }
    }

    ///
    /// Refetch after failed write. Unlike [FeedService::fetch_feed]
    /// a failed request keeps the local state.
    ///
    async fn reconcile(&self) {
        if !self.is_active() {
            return;
        }

        let generation = self.next_generation();
        tracing::debug!(generation, "reconciling feed");

        match self.repository.find_all().await {
            Ok(notifications) => self.apply_fetched(generation, notifications),
            Err(err) => tracing::warn!(%err, "failed to reconcile feed, keeping local state"),
        }
    }
}

#[async_trait]
impl FeedService for FeedServiceImpl {
    async fn fetch_feed(&self) {
        if !self.is_active() {
            return;
        }

        let generation = self.next_generation();
        tracing::debug!(generation, "fetching feed");

        let notifications = match self.repository.find_all().await {
            Ok(notifications) => notifications,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch feed, clearing it");
                Vec::new()
            }
        };

        self.apply_fetched(generation, notifications);
    }

    async fn fetch_unread_count(&self) -> Option<usize> {
        if !self.is_active() {
            return None;
        }

        // Count alone must not make a feed fetch in flight stale
        let generation = self.generation.load(Ordering::SeqCst);
        let count = match self.repository.count_unread().await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch unread count");
                return None;
            }
        };

        self.feed_tx.send_if_modified(|feed| {
            if !self.is_current(generation) || feed.unread_count == count {
                return false;
            }
            feed.unread_count = count;

            true
        });

        Some(count)
    }

    async fn mark_as_read(&self, id: i64) {
        if !self.is_active() {
            return;
        }
        tracing::info!(id, "marking notification as read");

        let now = OffsetDateTime::now_utc();
        self.modify(|feed| {
            let changed = feed
                .notifications
                .iter_mut()
                .find(|notification| notification.id == id)
                .map(|notification| notification.mark_read(now))
                .unwrap_or(false);
            if changed {
                feed.recount();
            }

            changed
        });

        if let Err(err) = self.repository.mark_read(id).await {
            tracing::warn!(id, %err, "failed to mark notification as read, reconciling");
            self.reconcile().await;
        }
    }

    async fn mark_all_as_read(&self) {
        if !self.is_active() {
            return;
        }
        tracing::info!("marking all notifications as read");

        let now = OffsetDateTime::now_utc();
        self.modify(|feed| {
            let mut changed = false;
            for notification in feed.notifications.iter_mut() {
                changed |= notification.mark_read(now);
            }
            changed |= feed.unread_count != 0;
            feed.unread_count = 0;

            changed
        });

        match self.repository.mark_all_read().await {
            Ok(()) => self.toast_service.success(TOAST_ALL_READ),
            Err(err) => {
                tracing::warn!(%err, "failed to mark all notifications as read, reconciling");
                self.toast_service.error(TOAST_ALL_READ_FAILED);
                self.reconcile().await;
            }
        }
    }

    async fn delete_notification(&self, id: i64) -> Result<(), Error> {
        if !self.is_active() {
            return Err(Error::NotAuthenticated);
        }
        tracing::info!(id, "deleting notification");

        self.repository.delete(id).await?;

        self.modify(|feed| {
            let len = feed.notifications.len();
            feed.notifications.retain(|notification| notification.id != id);
            feed.recount();

            len != feed.notifications.len()
        });

        Ok(())
    }

    fn snapshot(&self) -> FeedSnapshot {
        self.feed_tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.feed_tx.subscribe()
    }

    fn reset(&self) {
        self.modify(|feed| {
            let changed = *feed != FeedSnapshot::default();
            *feed = FeedSnapshot::default();

            changed
        });
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        tracing::debug!("feed closed");
    }
}
