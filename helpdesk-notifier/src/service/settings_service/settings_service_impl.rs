use super::SettingsService;
use crate::{
    error::Error,
    model::NotificationSettings,
    repository::NotificationSettingsRepository,
    service::toast_service::ToastService,
};
use api_client::Session;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;

const TOAST_SAVED: &str = "Bildirim ayarları güncellendi";
const TOAST_SAVE_FAILED: &str = "Bildirim ayarları güncellenirken bir hata oluştu";

pub struct SettingsServiceImpl {
    session: Session,
    repository: Arc<dyn NotificationSettingsRepository>,
    toast_service: Arc<dyn ToastService>,
    settings_tx: watch::Sender<Option<NotificationSettings>>,
}

impl SettingsServiceImpl {
    pub fn new(
        session: Session,
        repository: Arc<dyn NotificationSettingsRepository>,
        toast_service: Arc<dyn ToastService>,
    ) -> Self {
        let (settings_tx, _) = watch::channel(None);

        Self {
            session,
            repository,
            toast_service,
            settings_tx,
        }
    }

    async fn try_save(&self, settings: NotificationSettings) -> Result<NotificationSettings, Error> {
        if !self.session.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        let saved = self.repository.update(settings).await?.unwrap_or(settings);
        self.settings_tx.send_replace(Some(saved));

        Ok(saved)
    }
}

#[async_trait]
impl SettingsService for SettingsServiceImpl {
    async fn load(&self) -> NotificationSettings {
        if !self.session.is_authenticated() {
            tracing::debug!("not authenticated, using default settings");
            return NotificationSettings::default();
        }

        tracing::debug!("loading notification settings");
        let settings = match self.repository.find().await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                tracing::debug!("no settings stored, using default");
                NotificationSettings::default()
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load settings, using default");
                NotificationSettings::default()
            }
        };
        self.settings_tx.send_replace(Some(settings));
        tracing::info!(?settings, "loaded notification settings");

        settings
    }

    fn current(&self) -> Option<NotificationSettings> {
        *self.settings_tx.borrow()
    }

    async fn save(&self, settings: NotificationSettings) -> Result<NotificationSettings, Error> {
        tracing::info!(?settings, "saving notification settings");

        match self.try_save(settings).await {
            Ok(saved) => {
                self.toast_service.success(TOAST_SAVED);
                Ok(saved)
            }
            Err(Error::NotAuthenticated) => {
                tracing::debug!("not authenticated, settings not saved");
                Err(Error::NotAuthenticated)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to save settings");
                self.toast_service.error(TOAST_SAVE_FAILED);
                Err(err)
            }
        }
    }

    async fn save_loose(&self, value: &Value) -> Result<NotificationSettings, Error> {
        self.save(NotificationSettings::from_loose(value)).await
    }

    async fn set_browser_notifications(&self, enabled: bool) -> Result<(), Error> {
        let Some(current) = self.current() else {
            tracing::debug!("settings not loaded, browser_notifications not persisted");
            return Ok(());
        };

        self.save(current.with_browser_notifications(enabled))
            .await
            .map(|_| ())
    }

    fn reset(&self) {
        self.settings_tx.send_replace(None);
    }

    fn subscribe(&self) -> watch::Receiver<Option<NotificationSettings>> {
        self.settings_tx.subscribe()
    }
}
