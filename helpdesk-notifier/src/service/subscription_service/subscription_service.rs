use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    ///
    /// Ask for permission, subscribe at the platform push service
    /// and register the subscription in the backend.
    ///
    /// Outcome is reported to the user with a toast.
    ///
    /// ### Returns
    /// `true` when push notifications are enabled
    ///
    async fn enable_push(&self) -> bool;

    ///
    /// Unregister and drop current platform subscription.
    /// Missing subscription counts as success.
    ///
    async fn disable_push(&self) -> bool;

    ///
    /// Register already existing subscription again when permission
    /// was granted in an earlier session.
    ///
    async fn restore_if_granted(&self);
}
