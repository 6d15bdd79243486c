use crate::{model::PushSubscription, repository};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushSubscriptionsRepository: Send + Sync {
    ///
    /// ### Returns
    /// base64url encoded VAPID public key, `None` when backend has none configured
    ///
    async fn find_vapid_public_key(&self) -> Result<Option<String>, repository::Error>;

    async fn insert(&self, subscription: &PushSubscription) -> Result<(), repository::Error>;

    async fn delete(&self, subscription: &PushSubscription) -> Result<(), repository::Error>;
}
