use super::{AgentEvent, AgentState, ClickOutcome, DeliveryAgentConfig};
use crate::{
    dto::input::PushPayload,
    error::Error,
    platform::{DisplayNotification, NotificationDisplay, WorkerScope},
};
use serde_json::{Map, Value};
use std::sync::Arc;

const DEFAULT_URL: &str = "/";

///
/// Background context that turns push messages into system notifications
/// and routes notification clicks to application windows.
///
/// `Installing -> WaitingToActivate -> Active`, every push and click
/// is handled in `Dispatching` and returns to the previous state.
///
pub struct DeliveryAgent {
    config: DeliveryAgentConfig,
    display: Arc<dyn NotificationDisplay>,
    scope: Arc<dyn WorkerScope>,
    state: AgentState,
}

impl DeliveryAgent {
    pub fn new(
        config: DeliveryAgentConfig,
        display: Arc<dyn NotificationDisplay>,
        scope: Arc<dyn WorkerScope>,
    ) -> Self {
        Self {
            config,
            display,
            scope,
            state: AgentState::Installing,
        }
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub async fn handle(&mut self, event: AgentEvent) -> Result<(), Error> {
        match event {
            AgentEvent::Install => self.on_install().await,
            AgentEvent::Activate => self.on_activate().await,
            AgentEvent::Push(data) => self.on_push(data.as_deref()).await.map(|_| ()),
            AgentEvent::NotificationClick(notification) => {
                self.on_notification_click(&notification).await.map(|_| ())
            }
        }
    }

    pub async fn on_install(&mut self) -> Result<(), Error> {
        tracing::info!("installing");
        self.scope.skip_waiting().await.map_err(Error::Scope)?;
        self.state = AgentState::WaitingToActivate;
        tracing::info!("installed");

        Ok(())
    }

    pub async fn on_activate(&mut self) -> Result<(), Error> {
        tracing::info!("activating");
        self.scope.claim_clients().await.map_err(Error::Scope)?;
        self.state = AgentState::Active;
        tracing::info!("activated");

        Ok(())
    }

    ///
    /// Show system notification for push data.
    /// Completes once the platform displayed it.
    ///
    /// ### Errors
    /// - [Error::Display]
    ///
    pub async fn on_push(&mut self, data: Option<&[u8]>) -> Result<DisplayNotification, Error> {
        tracing::debug!(len = data.map(<[u8]>::len), "push received");
        let previous = std::mem::replace(&mut self.state, AgentState::Dispatching);

        let notification = self.compose(data);
        let result = self.display.show(&notification).await;

        self.state = previous;
        result.map_err(Error::Display)?;
        tracing::info!(title = %notification.title, "notification shown");

        Ok(notification)
    }

    ///
    /// Close clicked notification and bring the user to its target.
    /// First window with the agent origin is reused, otherwise new one is opened.
    ///
    /// ### Errors
    /// - [Error::Scope] when windows can't be listed, navigated, focused or opened
    ///
    pub async fn on_notification_click(
        &mut self,
        notification: &DisplayNotification,
    ) -> Result<ClickOutcome, Error> {
        tracing::debug!("notification clicked");
        let previous = std::mem::replace(&mut self.state, AgentState::Dispatching);

        let result = self.route_click(notification).await;

        self.state = previous;
        let outcome = result?;
        tracing::info!(?outcome, "notification click routed");

        Ok(outcome)
    }

    ///
    /// Build notification from push data. Data that is absent or is not JSON
    /// is shown as plain text body.
    ///
    pub fn compose(&self, data: Option<&[u8]>) -> DisplayNotification {
        let Some(payload) = PushPayload::parse(data) else {
            tracing::debug!("push data is not JSON, using plain text");
            return DisplayNotification {
                title: self.config.default_title.clone(),
                body: data.map(|data| String::from_utf8_lossy(data).into_owned()),
                icon: self.config.default_icon.clone(),
                badge: self.config.default_badge.clone(),
                data: Map::new(),
            };
        };

        let or_default = |value: Option<String>, default: &String| {
            value
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.clone())
        };

        DisplayNotification {
            title: or_default(payload.title, &self.config.default_title),
            body: payload.body,
            icon: or_default(payload.icon, &self.config.default_icon),
            badge: or_default(payload.badge, &self.config.default_badge),
            data: match payload.data {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
        }
    }

    async fn route_click(&self, notification: &DisplayNotification) -> Result<ClickOutcome, Error> {
        if let Err(err) = self.display.close(notification).await {
            tracing::warn!(%err, "failed to close notification");
        }

        let url = notification.url().unwrap_or(DEFAULT_URL).to_string();
        let origin = self.scope.origin();

        let windows = self.scope.match_windows().await.map_err(Error::Scope)?;
        match windows.into_iter().find(|client| client.has_origin(&origin)) {
            Some(client) => {
                self.scope
                    .navigate(&client, &url)
                    .await
                    .map_err(Error::Scope)?;
                self.scope.focus(&client).await.map_err(Error::Scope)?;

                Ok(ClickOutcome::Focused { client, url })
            }
            None => {
                self.scope.open_window(&url).await.map_err(Error::Scope)?;

                Ok(ClickOutcome::Opened { url })
            }
        }
    }
}
