#![allow(dead_code)]

use api_client::{ApiClient, ApiClientConfig, Session};
use async_trait::async_trait;
use helpdesk_notifier::{
    model::{PushSubscription, PushSubscriptionKeys},
    platform::{PermissionState, PushTransport},
    service::toast_service::ToastService,
};
use std::{sync::Mutex, time::Duration};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub fn create_client(server: &MockServer, session: Session) -> ApiClient {
    let config = ApiClientConfig {
        base_url: format!("{}/api", server.uri()),
        request_timeout: Duration::from_secs(5),
    };

    ApiClient::new(config, session).unwrap()
}

pub fn authenticated_session() -> Session {
    Session::new(Some(TOKEN.to_string()))
}

pub fn subscription() -> PushSubscription {
    PushSubscription {
        endpoint: "https://push.example.com/send/abc".to_string(),
        expiration_time: None,
        keys: PushSubscriptionKeys {
            p256dh: vec![4, 1, 2, 3],
            auth: vec![9, 8, 7],
        },
    }
}

/// `subscription()` the way the backend receives it
pub const SUBSCRIPTION_JSON: &str = r#"{"endpoint":"https://push.example.com/send/abc","expirationTime":null,"keys":{"p256dh":"BAECAw","auth":"CQgH"}}"#;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingToastService {
    pub toasts: Mutex<Vec<Toast>>,
}

impl RecordingToastService {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl ToastService for RecordingToastService {
    fn success(&self, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::Error(message.to_string()));
    }
}

///
/// Push service that grants permission on request
/// and keeps at most one subscription
///
pub struct FakePushTransport {
    pub permission_on_request: PermissionState,
    pub permission: Mutex<PermissionState>,
    pub subscription: Mutex<Option<PushSubscription>>,
    pub subscribed_keys: Mutex<Vec<Vec<u8>>>,
}

impl FakePushTransport {
    pub fn new(permission_on_request: PermissionState) -> Self {
        Self {
            permission_on_request,
            permission: Mutex::new(PermissionState::Default),
            subscription: Mutex::new(None),
            subscribed_keys: Mutex::new(Vec::new()),
        }
    }

    pub fn granted_with(subscription: PushSubscription) -> Self {
        let transport = Self::new(PermissionState::Granted);
        *transport.permission.lock().unwrap() = PermissionState::Granted;
        *transport.subscription.lock().unwrap() = Some(subscription);

        transport
    }
}

#[async_trait]
impl PushTransport for FakePushTransport {
    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> PermissionState {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> anyhow::Result<PermissionState> {
        *self.permission.lock().unwrap() = self.permission_on_request;
        Ok(self.permission_on_request)
    }

    async fn subscribe(&self, application_server_key: Vec<u8>) -> anyhow::Result<PushSubscription> {
        self.subscribed_keys
            .lock()
            .unwrap()
            .push(application_server_key);
        let subscription = subscription();
        *self.subscription.lock().unwrap() = Some(subscription.clone());

        Ok(subscription)
    }

    async fn get_subscription(&self) -> anyhow::Result<Option<PushSubscription>> {
        Ok(self.subscription.lock().unwrap().clone())
    }

    async fn unsubscribe(&self, _: &PushSubscription) -> anyhow::Result<()> {
        *self.subscription.lock().unwrap() = None;
        Ok(())
    }
}
