use super::SubscriptionService;
use crate::{
    error::Error,
    model::PushSubscription,
    platform::PushTransport,
    repository::PushSubscriptionsRepository,
    service::{
        key_material_service::KeyMaterialService, settings_service::SettingsService,
        toast_service::ToastService,
    },
};
use api_client::Session;
use async_trait::async_trait;
use std::sync::Arc;

const TOAST_UNSUPPORTED: &str = "Tarayıcınız push bildirimleri desteklemiyor";
const TOAST_PERMISSION_DENIED: &str = "Push bildirim izni reddedildi";
const TOAST_SUBSCRIBE_FAILED: &str = "Push bildirim aboneliği oluşturulamadı";
const TOAST_ENABLED: &str = "Push bildirimleri başarıyla etkinleştirildi";
const TOAST_DISABLED: &str = "Push bildirimleri devre dışı bırakıldı";
const TOAST_DISABLE_FAILED: &str = "Push bildirimleri devre dışı bırakılırken bir hata oluştu";

pub struct SubscriptionServiceImpl {
    session: Session,
    transport: Arc<dyn PushTransport>,
    repository: Arc<dyn PushSubscriptionsRepository>,
    key_material_service: Arc<dyn KeyMaterialService>,
    settings_service: Arc<dyn SettingsService>,
    toast_service: Arc<dyn ToastService>,
}

impl SubscriptionServiceImpl {
    pub fn new(
        session: Session,
        transport: Arc<dyn PushTransport>,
        repository: Arc<dyn PushSubscriptionsRepository>,
        key_material_service: Arc<dyn KeyMaterialService>,
        settings_service: Arc<dyn SettingsService>,
        toast_service: Arc<dyn ToastService>,
    ) -> Self {
        Self {
            session,
            transport,
            repository,
            key_material_service,
            settings_service,
            toast_service,
        }
    }

    ///
    /// ### Errors
    /// - [Error::PushUnsupported]
    /// - [Error::NotAuthenticated]
    /// - [Error::PermissionDenied] when permission is `default` or `denied` after request
    /// - [Error::KeyUnavailable]
    /// - [Error::InvalidKey], [Error::InvalidKeyEncoding] when backend key can't be decoded
    /// - [Error::Platform] when platform refused to subscribe
    /// - [Error::Transport] when backend refused the subscription or settings update
    ///
    async fn try_enable_push(&self) -> Result<PushSubscription, Error> {
        if !self.transport.is_supported() {
            return Err(Error::PushUnsupported);
        }
        if !self.session.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        let permission = self.transport.request_permission().await?;
        tracing::debug!(%permission, "permission requested");
        if !permission.is_granted() {
            return Err(Error::PermissionDenied(permission));
        }

        let key = self
            .key_material_service
            .get_public_key()
            .await
            .ok_or(Error::KeyUnavailable)?;
        let application_server_key = key.application_server_key()?;

        let subscription = self.transport.subscribe(application_server_key).await?;
        tracing::debug!(endpoint = %subscription.endpoint, "subscribed at push service");

        self.repository.insert(&subscription).await?;

        self.settings_service.set_browser_notifications(true).await?;

        Ok(subscription)
    }

    ///
    /// Subscription is removed from the backend first, then from the platform.
    /// Settings are not touched when there was nothing to remove.
    ///
    /// ### Returns
    /// `false` when there was no subscription to drop
    ///
    async fn try_disable_push(&self) -> Result<bool, Error> {
        if !self.transport.is_supported() {
            return Ok(false);
        }

        let Some(subscription) = self.transport.get_subscription().await? else {
            return Ok(false);
        };

        self.repository.delete(&subscription).await?;
        self.transport.unsubscribe(&subscription).await?;
        tracing::debug!(endpoint = %subscription.endpoint, "unsubscribed at push service");

        self.settings_service.set_browser_notifications(false).await?;

        Ok(true)
    }

    async fn try_restore(&self) -> Result<(), Error> {
        if !self.transport.is_supported() || !self.transport.permission().is_granted() {
            return Ok(());
        }
        if !self.session.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        if let Some(subscription) = self.transport.get_subscription().await? {
            self.repository.insert(&subscription).await?;
            tracing::info!(endpoint = %subscription.endpoint, "restored push subscription");
        }

        Ok(())
    }
}

#[async_trait]
impl SubscriptionService for SubscriptionServiceImpl {
    async fn enable_push(&self) -> bool {
        tracing::info!("enabling push notifications");

        match self.try_enable_push().await {
            Ok(_) => {
                tracing::info!("enabled push notifications");
                self.toast_service.success(TOAST_ENABLED);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to enable push notifications");
                let message = match err {
                    Error::PushUnsupported => TOAST_UNSUPPORTED,
                    Error::PermissionDenied(_) => TOAST_PERMISSION_DENIED,
                    _ => TOAST_SUBSCRIBE_FAILED,
                };
                self.toast_service.error(message);
                false
            }
        }
    }

    async fn disable_push(&self) -> bool {
        tracing::info!("disabling push notifications");

        match self.try_disable_push().await {
            Ok(false) => {
                tracing::info!("no push subscription to disable");
                true
            }
            Ok(true) => {
                tracing::info!("disabled push notifications");
                self.toast_service.success(TOAST_DISABLED);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "failed to disable push notifications");
                self.toast_service.error(TOAST_DISABLE_FAILED);
                false
            }
        }
    }

    async fn restore_if_granted(&self) {
        if let Err(err) = self.try_restore().await {
            tracing::warn!(%err, "failed to restore push subscription");
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        model::{PushSubscriptionKeys, VapidKeyMaterial},
        platform::{MockPushTransport, PermissionState},
        repository::{self, MockPushSubscriptionsRepository},
        service::{
            key_material_service::MockKeyMaterialService,
            settings_service::MockSettingsService, toast_service::MockToastService,
        },
    };
    use mockall::predicate::eq;

    struct Mocks {
        session: Session,
        transport: MockPushTransport,
        repository: MockPushSubscriptionsRepository,
        key_material_service: MockKeyMaterialService,
        settings_service: MockSettingsService,
        toast_service: MockToastService,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                session: Session::new(Some("token".to_string())),
                transport: MockPushTransport::new(),
                repository: MockPushSubscriptionsRepository::new(),
                key_material_service: MockKeyMaterialService::new(),
                settings_service: MockSettingsService::new(),
                toast_service: MockToastService::new(),
            }
        }

        fn into_service(self) -> SubscriptionServiceImpl {
            SubscriptionServiceImpl::new(
                self.session,
                Arc::new(self.transport),
                Arc::new(self.repository),
                Arc::new(self.key_material_service),
                Arc::new(self.settings_service),
                Arc::new(self.toast_service),
            )
        }
    }

    fn subscription() -> PushSubscription {
        PushSubscription {
            endpoint: "https://push.example.com/send/abc".to_string(),
            expiration_time: None,
            keys: PushSubscriptionKeys {
                p256dh: vec![4, 1, 2, 3],
                auth: vec![9, 8, 7],
            },
        }
    }

    #[tokio::test]
    async fn enable_push_success() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .times(1)
            .returning(|| Ok(PermissionState::Granted));
        mocks
            .key_material_service
            .expect_get_public_key()
            .times(1)
            .returning(|| Some(VapidKeyMaterial::new("BAECAw".to_string())));
        mocks
            .transport
            .expect_subscribe()
            .with(eq(vec![4u8, 1, 2, 3]))
            .times(1)
            .returning(|_| Ok(subscription()));
        mocks
            .repository
            .expect_insert()
            .with(eq(subscription()))
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .with(eq(true))
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .toast_service
            .expect_success()
            .with(eq(TOAST_ENABLED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        let enabled = service.enable_push().await;

        assert!(enabled);
    }

    #[tokio::test]
    async fn enable_push_unsupported_no_network() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(false);
        mocks.transport.expect_request_permission().never();
        mocks.key_material_service.expect_get_public_key().never();
        mocks.repository.expect_insert().never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_UNSUPPORTED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        let enabled = service.enable_push().await;

        assert!(!enabled);
    }

    #[tokio::test]
    async fn enable_push_permission_denied_no_subscription() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .times(1)
            .returning(|| Ok(PermissionState::Denied));
        mocks.transport.expect_subscribe().never();
        mocks.repository.expect_insert().never();
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_PERMISSION_DENIED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        let enabled = service.enable_push().await;

        assert!(!enabled);
    }

    #[tokio::test]
    async fn enable_push_permission_dismissed() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .returning(|| Ok(PermissionState::Default));
        mocks.transport.expect_subscribe().never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_PERMISSION_DENIED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        assert!(!service.enable_push().await);
    }

    #[tokio::test]
    async fn enable_push_key_unavailable() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .returning(|| Ok(PermissionState::Granted));
        mocks
            .key_material_service
            .expect_get_public_key()
            .returning(|| None);
        mocks.transport.expect_subscribe().never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_SUBSCRIBE_FAILED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        assert!(!service.enable_push().await);
    }

    #[tokio::test]
    async fn enable_push_backend_rejects_subscription_not_rolled_back() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .returning(|| Ok(PermissionState::Granted));
        mocks
            .key_material_service
            .expect_get_public_key()
            .returning(|| Some(VapidKeyMaterial::new("BAECAw".to_string())));
        mocks
            .transport
            .expect_subscribe()
            .returning(|_| Ok(subscription()));
        mocks.repository.expect_insert().times(1).returning(|_| {
            Err(repository::Error::Status {
                status: 500,
                body: String::new(),
            })
        });
        mocks.transport.expect_unsubscribe().never();
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_SUBSCRIBE_FAILED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        assert!(!service.enable_push().await);
    }

    #[tokio::test]
    async fn enable_push_invalid_key() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .returning(|| Ok(PermissionState::Granted));
        mocks
            .key_material_service
            .expect_get_public_key()
            .returning(|| Some(VapidKeyMaterial::new("BAECA".to_string())));
        mocks.transport.expect_subscribe().never();
        mocks.toast_service.expect_error().times(1).return_const(());
        let service = mocks.into_service();

        assert!(!service.enable_push().await);
    }

    #[tokio::test]
    async fn enable_push_settings_update_failed() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_request_permission()
            .returning(|| Ok(PermissionState::Granted));
        mocks
            .key_material_service
            .expect_get_public_key()
            .returning(|| Some(VapidKeyMaterial::new("BAECAw".to_string())));
        mocks
            .transport
            .expect_subscribe()
            .returning(|_| Ok(subscription()));
        mocks.repository.expect_insert().times(1).returning(|_| Ok(()));
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .with(eq(true))
            .times(1)
            .returning(|_| {
                Err(Error::Transport(repository::Error::Status {
                    status: 500,
                    body: String::new(),
                }))
            });
        mocks.toast_service.expect_success().never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_SUBSCRIBE_FAILED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        let enabled = service.enable_push().await;

        assert!(!enabled);
    }

    #[tokio::test]
    async fn disable_push_without_subscription_noop() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_get_subscription()
            .times(1)
            .returning(|| Ok(None));
        mocks.repository.expect_delete().never();
        mocks.transport.expect_unsubscribe().never();
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .never();
        mocks.toast_service.expect_success().never();
        mocks.toast_service.expect_error().never();
        let service = mocks.into_service();

        let disabled = service.disable_push().await;

        assert!(disabled);
    }

    #[tokio::test]
    async fn disable_push_unsupported_noop() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(false);
        mocks.transport.expect_get_subscription().never();
        let service = mocks.into_service();

        assert!(service.disable_push().await);
    }

    #[tokio::test]
    async fn disable_push_success() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_get_subscription()
            .returning(|| Ok(Some(subscription())));
        mocks
            .repository
            .expect_delete()
            .with(eq(subscription()))
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .transport
            .expect_unsubscribe()
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .with(eq(false))
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .toast_service
            .expect_success()
            .with(eq(TOAST_DISABLED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        assert!(service.disable_push().await);
    }

    #[tokio::test]
    async fn disable_push_backend_failure() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_get_subscription()
            .returning(|| Ok(Some(subscription())));
        mocks.repository.expect_delete().returning(|_| {
            Err(repository::Error::Status {
                status: 500,
                body: String::new(),
            })
        });
        mocks.transport.expect_unsubscribe().never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_DISABLE_FAILED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        assert!(!service.disable_push().await);
    }

    #[tokio::test]
    async fn disable_push_settings_update_failed() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_get_subscription()
            .returning(|| Ok(Some(subscription())));
        mocks.repository.expect_delete().times(1).returning(|_| Ok(()));
        mocks
            .transport
            .expect_unsubscribe()
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .settings_service
            .expect_set_browser_notifications()
            .with(eq(false))
            .times(1)
            .returning(|_| {
                Err(Error::Transport(repository::Error::Status {
                    status: 503,
                    body: String::new(),
                }))
            });
        mocks.toast_service.expect_success().never();
        mocks
            .toast_service
            .expect_error()
            .with(eq(TOAST_DISABLE_FAILED))
            .times(1)
            .return_const(());
        let service = mocks.into_service();

        assert!(!service.disable_push().await);
    }

    #[tokio::test]
    async fn restore_if_granted_registers_existing() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_permission()
            .return_const(PermissionState::Granted);
        mocks
            .transport
            .expect_get_subscription()
            .returning(|| Ok(Some(subscription())));
        mocks
            .repository
            .expect_insert()
            .with(eq(subscription()))
            .times(1)
            .returning(|_| Ok(()));
        let service = mocks.into_service();

        service.restore_if_granted().await;
    }

    #[tokio::test]
    async fn restore_if_granted_permission_not_granted() {
        let mut mocks = Mocks::new();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_permission()
            .return_const(PermissionState::Default);
        mocks.transport.expect_get_subscription().never();
        mocks.repository.expect_insert().never();
        let service = mocks.into_service();

        service.restore_if_granted().await;
    }

    #[tokio::test]
    async fn restore_if_granted_not_authenticated() {
        let mut mocks = Mocks::new();
        mocks.session = Session::anonymous();
        mocks.transport.expect_is_supported().return_const(true);
        mocks
            .transport
            .expect_permission()
            .return_const(PermissionState::Granted);
        mocks.transport.expect_get_subscription().never();
        mocks.repository.expect_insert().never();
        let service = mocks.into_service();

        service.restore_if_granted().await;
    }
}
