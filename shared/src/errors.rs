//! Shared error types for the HR toolkit

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid identifier: {input:?}")]
    InvalidId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Failure modes of the external creative-text service
///
/// These are classified for logging only; callers of the creative-text
/// boundary always receive a fallback string instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("service unavailable")]
    ServiceUnavailable,

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("server error: {0}")]
    ServerError(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiFailure {
    /// Map an HTTP status to a failure class
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiFailure::AuthenticationFailed,
            429 => ApiFailure::RateLimitExceeded,
            503 => ApiFailure::ServiceUnavailable,
            other => ApiFailure::ServerError(format!("HTTP {other}")),
        }
    }
}
