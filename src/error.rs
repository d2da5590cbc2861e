//! Error types for service-boundary failures.
//!
//! The view-state core itself is total and does not produce errors; failures
//! only arise at the remote service boundary (profile, session, notification
//! endpoints) and at the session file store. Those are classified here so the
//! shell can decide between substituting defaults, logging, or re-routing to
//! the login screen.

use thiserror::Error;

/// Result alias for service-boundary operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by the remote API adapters and the session store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection, DNS, timeout).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No session is available for an authenticated call.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Reading or writing the persisted session file failed.
    #[error("session storage: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    /// Whether this error means the cached session is no longer valid.
    ///
    /// The shell uses this to route back through the session gate instead of
    /// silently substituting defaults forever.
    pub fn is_auth_error(&self) -> bool {
        match self {
            ApiError::NotAuthenticated => true,
            ApiError::Status { status } => *status == 401,
            _ => false,
        }
    }
}
