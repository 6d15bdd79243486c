#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request rejected: session is not authorized")]
    Unauthorized,

    #[error("unexpected response status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
