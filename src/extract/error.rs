use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("GET {url} failed: {status} - {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },
    #[error("Could not resolve '{url}' against the API base: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Malformed API payload: {0}")]
    Payload(#[from] serde_json::Error),
}
