use jsonwebtoken::{errors::ErrorKind, DecodingKey, Validation};
use std::{collections::HashSet, sync::Arc};
use tokio::sync::watch;

///
/// Client side view of the user session.
///
/// Holds bearer token attached to every request. Token is inspected only
/// to find out whether it already expired, its signature is verified by the backend.
///
/// Clones share the same token, so clearing it in one place
/// (e.g. after 401 response) logs out every component.
///
#[derive(Clone, Debug)]
pub struct Session {
    token_tx: Arc<watch::Sender<Option<String>>>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|token| Self::is_token_usable(token));
        let (token_tx, _) = watch::channel(token);

        Self {
            token_tx: Arc::new(token_tx),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn token(&self) -> Option<String> {
        self.token_tx.borrow().clone()
    }

    pub fn set_token(&self, token: String) {
        if !Self::is_token_usable(&token) {
            tracing::warn!("ignoring unusable session token");
            return;
        }

        self.token_tx.send_replace(Some(token));
        tracing::info!("session token set");
    }

    pub fn clear(&self) {
        if self.token_tx.send_replace(None).is_some() {
            tracing::info!("session token cleared");
        }
    }

    ///
    /// Session is authenticated when it holds a token that did not expire.
    /// Opaque (non JWT) tokens are trusted until backend rejects them.
    ///
    pub fn is_authenticated(&self) -> bool {
        let token = self.token_tx.borrow();
        let Some(token) = token.as_deref() else {
            return false;
        };

        !Self::is_jwt_expired(token)
    }

    ///
    /// Receiver notified whenever token changes
    ///
    pub fn watch(&self) -> watch::Receiver<Option<String>> {
        self.token_tx.subscribe()
    }

    fn is_token_usable(token: &str) -> bool {
        !token.is_empty() && token != "undefined" && token != "null"
    }

    fn is_jwt_expired(token: &str) -> bool {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.required_spec_claims = HashSet::new();
        validation.validate_aud = false;
        validation.leeway = 0;

        let key = DecodingKey::from_secret(&[]);
        match jsonwebtoken::decode::<serde_json::Value>(token, &key, &validation) {
            Ok(_) => false,
            Err(err) => matches!(err.kind(), ErrorKind::ExpiredSignature),
        }
    }
}
