use crate::{Error, Session};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use url::Url;

#[derive(Clone, Debug)]
pub struct ApiClientConfig {
    /// Base of every endpoint, e.g. `https://example.com/api/`
    pub base_url: String,
    pub request_timeout: Duration,
}

///
/// HTTP client that talks with the backend API.
///
/// Bearer token from [Session] is attached to every request.
/// Response with status 401 clears the session.
///
/// Paths passed to methods are relative to [ApiClientConfig::base_url]
/// and must not start with `/`.
///
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, session: Session) -> Result<Self, Error> {
        let base_url = Self::parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url,
                session,
            }),
        })
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    ///
    /// Send GET request and decode JSON response
    ///
    /// ### Errors
    /// - [Error::Decode] when body is empty or is not valid `T`
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self.send(Method::GET, path, None).await?;
        let value = serde_json::from_slice(&body)?;

        Ok(value)
    }

    ///
    /// Send GET request and decode JSON response.
    /// Empty body and JSON `null` are returned as `None`.
    ///
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        let body = self.send(Method::GET, path, None).await?;

        Self::decode_optional(&body)
    }

    ///
    /// Send POST request. Response body is ignored.
    ///
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), Error> {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, Some(body)).await?;

        Ok(())
    }

    ///
    /// Send PUT request and decode optional JSON response
    ///
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let body = serde_json::to_value(body)?;
        let response = self.send(Method::PUT, path, Some(body)).await?;

        Self::decode_optional(&response)
    }

    ///
    /// Send DELETE request with optional JSON body. Response body is ignored.
    ///
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.send(Method::DELETE, path, body).await?;

        Ok(())
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<Vec<u8>, Error> {
        let url = self.inner.base_url.join(path)?;

        let mut request = self.inner.http.request(method.clone(), url);
        if let Some(token) = self.inner.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(%method, path, "sending request");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%method, path, status = status.as_u16(), "received response");

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "request unauthorized, clearing session");
            self.inner.session.clear();
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;

        Ok(body.to_vec())
    }

    fn decode_optional<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value = serde_json::from_slice::<Option<T>>(body)?;

        Ok(value)
    }

    fn parse_base_url(base_url: &str) -> Result<Url, Error> {
        // Without trailing slash Url::join would replace last path segment
        let mut url = Url::parse(base_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }
}
