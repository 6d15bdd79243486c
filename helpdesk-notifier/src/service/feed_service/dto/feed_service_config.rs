use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct FeedServiceConfig {
    /// Period between feed fetches, the first one happens one period after mount
    pub poll_interval: Duration,
}

impl Default for FeedServiceConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
        }
    }
}
