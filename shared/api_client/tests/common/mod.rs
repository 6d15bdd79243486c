use api_client::{ApiClient, ApiClientConfig, Session};
use std::time::Duration;
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
