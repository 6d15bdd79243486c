use super::ApplicationEnv;
use api_client::{ApiClient, ApiClientConfig, Session};
use helpdesk_notifier::{
    platform::HeadlessPushTransport,
    repository::{
        NotificationSettingsRepositoryImpl, NotificationsRepositoryImpl,
        PushSubscriptionsRepositoryImpl,
    },
    service::{
        feed_service::{FeedService, FeedServiceConfig, FeedServiceImpl, FeedServicePoller},
        key_material_service::KeyMaterialServiceImpl,
        settings_service::{SettingsService, SettingsServiceImpl},
        subscription_service::{SubscriptionService, SubscriptionServiceImpl},
        toast_service::TracingToastService,
    },
};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

#[derive(Clone)]
pub struct ApplicationState {
    pub session: Session,
    pub feed_config: FeedServiceConfig,
    pub feed_service: Arc<dyn FeedService>,
    pub settings_service: Arc<dyn SettingsService>,
    pub subscription_service: Arc<dyn SubscriptionService>,
}

pub struct ApplicationStateToClose {
    pub feed_service: Arc<dyn FeedService>,
    pub feed_poller: FeedServicePoller,
    pub watchers_close: Arc<Notify>,
    pub watchers: JoinHandle<()>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating api client");
    let session = Session::new(Some(env.api_token.clone()));
    let config = ApiClientConfig {
        base_url: env.api_base_url.clone(),
        request_timeout: env.request_timeout,
    };
    let client = ApiClient::new(config, session.clone())?;

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(client.clone());
    let notifications_repository = Arc::new(notifications_repository);

    let settings_repository = NotificationSettingsRepositoryImpl::new(client.clone());
    let settings_repository = Arc::new(settings_repository);

    let push_subscriptions_repository = PushSubscriptionsRepositoryImpl::new(client);
    let push_subscriptions_repository = Arc::new(push_subscriptions_repository);

    tracing::info!("creating services");
    let toast_service = Arc::new(TracingToastService);

    let feed_service = FeedServiceImpl::new(
        session.clone(),
        notifications_repository,
        toast_service.clone(),
    );
    let feed_service = Arc::new(feed_service);

    let settings_service =
        SettingsServiceImpl::new(session.clone(), settings_repository, toast_service.clone());
    let settings_service = Arc::new(settings_service);

    let key_material_service = KeyMaterialServiceImpl::new(push_subscriptions_repository.clone());
    let key_material_service = Arc::new(key_material_service);

    let subscription_service = SubscriptionServiceImpl::new(
        session.clone(),
        Arc::new(HeadlessPushTransport),
        push_subscriptions_repository,
        key_material_service,
        settings_service.clone(),
        toast_service,
    );
    let subscription_service = Arc::new(subscription_service);

    let feed_config = FeedServiceConfig {
        poll_interval: env.poll_interval,
    };

    Ok(ApplicationState {
        session,
        feed_config,
        feed_service,
        settings_service,
        subscription_service,
    })
}
