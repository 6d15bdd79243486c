use super::ApplicationState;
use std::sync::Arc;
use tokio::sync::Notify;

///
/// Initial load after the session became authenticated
///
pub async fn start(state: &ApplicationState) {
    if !state.session.is_authenticated() {
        tracing::warn!("session is not authenticated, waiting for token");
        return;
    }

    tracing::info!("loading notification settings");
    state.settings_service.load().await;

    tracing::info!("restoring push subscription");
    state.subscription_service.restore_if_granted().await;

    tracing::info!("fetching feed");
    state.feed_service.fetch_feed().await;
}

///
/// Follow session and feed changes until closed.
/// Ended session drops local feed and settings,
/// new token triggers the initial load again.
///
#[tracing::instrument(name = "Watchers", skip_all)]
pub async fn watch(state: ApplicationState, close_notify: Arc<Notify>) {
    let mut token_rx = state.session.watch();
    let mut feed_rx = state.feed_service.subscribe();
    let mut unread_count = feed_rx.borrow_and_update().unread_count;

    loop {
        tokio::select! {
            biased;

            _ = close_notify.notified() => break,

            changed = token_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let has_token = token_rx.borrow_and_update().is_some();
                if has_token {
                    tracing::info!("session token changed");
                    start(&state).await;
                } else {
                    tracing::info!("session ended, dropping local state");
                    state.feed_service.reset();
                    state.settings_service.reset();
                }
            }

            changed = feed_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = feed_rx.borrow_and_update().unread_count;
                if current != unread_count {
                    tracing::info!(unread_count = current, "unread count changed");
                    unread_count = current;
                }
            }
        }
    }
}
