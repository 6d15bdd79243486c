use super::{FeedService, FeedServiceConfig};
use std::sync::Arc;
use tokio::{
    sync::Notify,
    task::JoinHandle,
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};

///
/// Periodically refreshes the feed.
/// The first fetch happens one period after mount.
///
pub struct FeedServicePoller {
    close_notify: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl FeedServicePoller {
    pub fn mount(config: FeedServiceConfig, feed_service: Arc<dyn FeedService>) -> Self {
        let start = Instant::now() + config.poll_interval;
        let mut interval = interval_at(start, config.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let close_notify = Arc::new(Notify::new());
        let handle = tokio::spawn(Self::run(interval, feed_service, close_notify.clone()));
        tracing::info!(poll_interval = ?config.poll_interval, "mounted feed poller");

        Self {
            close_notify,
            handle,
        }
    }

    ///
    /// Stop polling and wait for the task to finish.
    /// Fetch in progress is cancelled.
    ///
    pub async fn teardown(self) {
        self.close_notify.notify_one();
        if let Err(err) = self.handle.await {
            tracing::error!(%err, "feed poller task failed");
        }
        tracing::info!("feed poller torn down");
    }

    #[tracing::instrument(name = "Feed Poller", skip_all)]
    async fn run(
        mut interval: Interval,
        feed_service: Arc<dyn FeedService>,
        close_notify: Arc<Notify>,
    ) {
        tokio::select! {
            biased;

            _ = close_notify.notified() => {},

            _ = async { loop {
                interval.tick().await;
                tracing::debug!("polling feed");
                feed_service.fetch_feed().await;
            }} => {}
        }
    }
}
