use super::KeyMaterialService;
use crate::{
    error::Error,
    model::VapidKeyMaterial,
    repository::PushSubscriptionsRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct KeyMaterialServiceImpl {
    repository: Arc<dyn PushSubscriptionsRepository>,
    key: OnceCell<VapidKeyMaterial>,
}

impl KeyMaterialServiceImpl {
    pub fn new(repository: Arc<dyn PushSubscriptionsRepository>) -> Self {
        Self {
            repository,
            key: OnceCell::new(),
        }
    }

    async fn fetch_key(&self) -> Result<VapidKeyMaterial, Error> {
        tracing::debug!("fetching vapid public key");

        let public_key = self
            .repository
            .find_vapid_public_key()
            .await?
            .ok_or(Error::KeyUnavailable)?;
        tracing::info!("fetched vapid public key");

        Ok(VapidKeyMaterial::new(public_key))
    }
}

#[async_trait]
impl KeyMaterialService for KeyMaterialServiceImpl {
    async fn get_public_key(&self) -> Option<VapidKeyMaterial> {
        match self.key.get_or_try_init(|| self.fetch_key()).await {
            Ok(key) => Some(key.clone()),
            Err(err) => {
                tracing::warn!(%err, "vapid public key unavailable");
                None
            }
        }
    }
}
