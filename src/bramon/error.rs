use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("HTTP client error: {0}")]
    Client(reqwest::Error),
    #[error("error connecting to the BRAMON API: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body is kept for logging and never shown to clients.
    #[error("BRAMON API returned {status}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected BRAMON API response: {0}")]
    Decode(#[from] serde_json::Error),
}
