use async_trait::async_trait;
use url::Url;

/// Application window controlled by the agent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowClient {
    pub id: String,
    pub url: String,
}

impl WindowClient {
    pub fn has_origin(&self, origin: &Url) -> bool {
        Url::parse(&self.url)
            .map(|url| url.origin() == origin.origin())
            .unwrap_or(false)
    }
}

///
/// Global scope of the background agent
/// (service worker registration and its clients).
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerScope: Send + Sync {
    fn origin(&self) -> Url;

    /// Activate new agent version without waiting for old windows to close
    async fn skip_waiting(&self) -> anyhow::Result<()>;

    /// Take control of already open windows
    async fn claim_clients(&self) -> anyhow::Result<()>;

    async fn match_windows(&self) -> anyhow::Result<Vec<WindowClient>>;

    async fn navigate(&self, client: &WindowClient, url: &str) -> anyhow::Result<()>;

    async fn focus(&self, client: &WindowClient) -> anyhow::Result<()>;

    async fn open_window(&self, url: &str) -> anyhow::Result<()>;
}
