use super::{PermissionState, PushTransport};
use crate::model::PushSubscription;
use async_trait::async_trait;

///
/// Transport for hosts without push service.
/// Reports push as unsupported so push operations end early.
///
#[derive(Default)]
pub struct HeadlessPushTransport;

#[async_trait]
impl PushTransport for HeadlessPushTransport {
    fn is_supported(&self) -> bool {
        false
    }

    fn permission(&self) -> PermissionState {
        PermissionState::Denied
    }

    async fn request_permission(&self) -> anyhow::Result<PermissionState> {
        Ok(PermissionState::Denied)
    }

    async fn subscribe(&self, _: Vec<u8>) -> anyhow::Result<PushSubscription> {
        anyhow::bail!("push service unavailable")
    }

    async fn get_subscription(&self) -> anyhow::Result<Option<PushSubscription>> {
        Ok(None)
    }

    async fn unsubscribe(&self, _: &PushSubscription) -> anyhow::Result<()> {
        Ok(())
    }
}
