use super::PermissionState;
use crate::model::PushSubscription;
use async_trait::async_trait;

///
/// Platform push service (browser `PushManager` or equivalent).
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// Whether the platform offers push messaging at all
    fn is_supported(&self) -> bool;

    fn permission(&self) -> PermissionState;

    ///
    /// Ask user for notification permission.
    /// Already decided permission is returned without prompting.
    ///
    async fn request_permission(&self) -> anyhow::Result<PermissionState>;

    ///
    /// Create subscription for `application_server_key`
    /// (raw uncompressed P-256 public key)
    ///
    async fn subscribe(&self, application_server_key: Vec<u8>) -> anyhow::Result<PushSubscription>;

    async fn get_subscription(&self) -> anyhow::Result<Option<PushSubscription>>;

    async fn unsubscribe(&self, subscription: &PushSubscription) -> anyhow::Result<()>;
}
