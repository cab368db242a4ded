//! Error types for upstream fetches.

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Failure of a single upstream fetch.
///
/// Fetches are fire-and-forget: callers log these and clear the loading flag,
/// leaving prior state in place. There is no retry policy.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("upstream reported an error status: {0}")]
    Api(String),
}
