use async_trait::async_trait;
use serde_json::{Map, Value};

///
/// System notification shown by the agent
///
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayNotification {
    pub title: String,
    pub body: Option<String>,
    pub icon: String,
    pub badge: String,
    pub data: Map<String, Value>,
}

impl DisplayNotification {
    /// Navigation target carried in `data.url`
    pub fn url(&self) -> Option<&str> {
        self.data
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationDisplay: Send + Sync {
    async fn show(&self, notification: &DisplayNotification) -> anyhow::Result<()>;

    async fn close(&self, notification: &DisplayNotification) -> anyhow::Result<()>;
}
