use crate::platform::PermissionState;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("push notifications are not supported")]
    PushUnsupported,

    #[error("push permission not granted: {0}")]
    PermissionDenied(PermissionState),

    #[error("vapid public key unavailable")]
    KeyUnavailable,

    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(#[from] base64::DecodeError),

    #[error("session is not authenticated")]
    NotAuthenticated,

    #[error("transport error: {0}")]
    Transport(#[from] api_client::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    ///
    /// Error reported by platform adapter
    /// (permission request, subscribe, unsubscribe)
    ///
    #[error("platform error: {0}")]
    Platform(#[from] anyhow::Error),
}
