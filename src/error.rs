//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! HTTP-level rejections (the backend answered, and said no) are split from
//! transport failures (the backend never answered). Flows render rejections
//! through the active feedback strategy; transport and decode failures
//! propagate to the caller.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("authentication rejected (HTTP {status})")]
    Auth { status: u16 },
    #[error("request rejected (HTTP {status})")]
    Validation { status: u16 },
    #[error("unexpected response status (HTTP {status})")]
    UnexpectedStatus { status: u16 },
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("token store error: {0}")]
    Store(#[from] std::io::Error),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    ///
    /// 401/403 are authentication rejections; 400/409/422 are validation
    /// rejections (the backend answers 409 for a duplicate username).
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Auth { status: status.as_u16() },
            400 | 409 | 422 => Self::Validation { status: status.as_u16() },
            code => Self::UnexpectedStatus { status: code },
        }
    }

    /// True when the backend answered with a rejection status, as opposed to
    /// a transport, decode, or storage failure.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Auth { .. } | Self::Validation { .. } | Self::UnexpectedStatus { .. }
        )
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
