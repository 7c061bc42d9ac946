//! Domain error types.

/// Rejection of a form value before anything is sent to the server.
///
/// `field` is the DOM id of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The field does not start with a decimal integer.
    #[error("{field}: not an integer")]
    NotAnInteger { field: &'static str },

    /// The integer does not fit the setting's range.
    #[error("{field}: value out of range")]
    OutOfRange { field: &'static str },
}

impl FormError {
    /// DOM id of the field that failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotAnInteger { field } | Self::OutOfRange { field } => field,
        }
    }
}
