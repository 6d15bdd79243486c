mod application;

use application::{ApplicationEnv, ApplicationStateToClose};
use helpdesk_notifier::service::feed_service::FeedServicePoller;
use std::sync::Arc;
use tokio::sync::Notify;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env)?;

    application::start(&state).await;

    tracing::info!("mounting feed poller");
    let feed_poller = FeedServicePoller::mount(state.feed_config, state.feed_service.clone());

    let watchers_close = Arc::new(Notify::new());
    let watchers = tokio::spawn(application::watch(state.clone(), watchers_close.clone()));

    application::shutdown_signal().await;

    application::close(ApplicationStateToClose {
        feed_service: state.feed_service,
        feed_poller,
        watchers_close,
        watchers,
    })
    .await;

    Ok(())
}
