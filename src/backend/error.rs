use thiserror::Error;

/// Errors surfaced by the backend repository API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure (connection refused, TLS, timeout at the OS
    /// level). The request may or may not have reached the backend.
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` carries the
    /// response body when the backend provided one.
    #[error("backend returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The backend answered 2xx but the payload was not the expected JSON.
    #[error("invalid backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot address the repository endpoint.
    #[error("invalid backend base URL {url:?}")]
    BaseUrl { url: String },
}
