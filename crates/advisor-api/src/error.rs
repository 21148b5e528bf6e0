use reqwest::StatusCode;

/// Failures talking to the travel-advice backend.
///
/// `Generation` is kept apart from `Upstream` so callers can tell a failed
/// advice run from a failed lookup or create.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid client config: {0}")]
    Config(String),

    #[error("backend returned error: status={status} body={body}")]
    Upstream { status: StatusCode, body: String },

    #[error("advice generation failed: status={status} body={body}")]
    Generation { status: StatusCode, body: String },
}

impl ApiError {
    pub fn is_generation(&self) -> bool {
        matches!(self, ApiError::Generation { .. })
    }
}
