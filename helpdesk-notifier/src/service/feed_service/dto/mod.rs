mod feed_service_config;
mod feed_snapshot;

pub use feed_service_config::FeedServiceConfig;
pub use feed_snapshot::FeedSnapshot;
