/// Errors raised at the extraction oracle boundary.
///
/// Every variant is recoverable: the analyzer treats any of them as "oracle
/// unavailable" and substitutes its fallback keyword set. Nothing here is ever
/// surfaced to an HTTP caller.
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("extraction oracle is not configured (missing API key)")]
    NotConfigured,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} body={body}")]
    Upstream { status: StatusCode, body: String },
}

impl OracleError {
    /// True when the failure was the bounded request timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, OracleError::Request(e) if e.is_timeout())
    }
}
