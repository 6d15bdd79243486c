use crate::model::VapidKeyMaterial;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyMaterialService: Send + Sync {
    ///
    /// Returns VAPID public key of the backend.
    ///
    /// Key is fetched once and cached for the lifetime of the service.
    /// Failed fetch is not cached, the next call tries again.
    ///
    async fn get_public_key(&self) -> Option<VapidKeyMaterial>;
}
