//! Application error types.

use pkgtracker_domain::error::FormError;

/// A failed call to the tracking server.
///
/// All variants mean "the request failed"; they only record why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// Displays as the raw response body, whatever the status code.
    #[error("{body}")]
    RequestFailed { status: u16, body: String },

    /// No response was received.
    #[error("network error: {0}")]
    Transport(String),

    /// A 2xx response whose body is not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Failure for a non-2xx response; the message is the body text as is.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        Self::RequestFailed { status, body }
    }
}

/// Errors returned by dashboard use-cases that read a form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
