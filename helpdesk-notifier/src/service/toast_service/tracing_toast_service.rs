use super::ToastService;

/// Writes toasts to the log for hosts without UI
#[derive(Default)]
pub struct TracingToastService;

impl ToastService for TracingToastService {
    fn success(&self, message: &str) {
        tracing::info!(toast = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(toast = "error", "{message}");
    }
}
