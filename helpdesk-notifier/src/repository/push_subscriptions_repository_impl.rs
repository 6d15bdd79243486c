use super::PushSubscriptionsRepository;
use crate::{
    dto::{input, output},
    model::PushSubscription,
    repository,
};
use api_client::ApiClient;
use async_trait::async_trait;

const VAPID_PUBLIC_KEY: &str = "notifications/vapid-public-key";
const PUSH_SUBSCRIPTION: &str = "notifications/push-subscription";

pub struct PushSubscriptionsRepositoryImpl {
    client: ApiClient,
}

impl PushSubscriptionsRepositoryImpl {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PushSubscriptionsRepository for PushSubscriptionsRepositoryImpl {
    async fn find_vapid_public_key(&self) -> Result<Option<String>, repository::Error> {
        let key = self
            .client
            .get_optional::<input::VapidPublicKey>(VAPID_PUBLIC_KEY)
            .await?
            .and_then(|key| key.public_key)
            .filter(|key| !key.trim().is_empty());

        Ok(key)
    }

    async fn insert(&self, subscription: &PushSubscription) -> Result<(), repository::Error> {
        let body = output::PushSubscription::try_from(subscription)?;
        self.client.post(PUSH_SUBSCRIPTION, &body).await?;
        tracing::debug!(endpoint = %subscription.endpoint, "registered push subscription");

        Ok(())
    }

    async fn delete(&self, subscription: &PushSubscription) -> Result<(), repository::Error> {
        let body = output::PushSubscription::try_from(subscription)?;
        self.client.delete(PUSH_SUBSCRIPTION, Some(&body)).await?;
        tracing::debug!(endpoint = %subscription.endpoint, "unregistered push subscription");

        Ok(())
    }
}
