//! Error types for contact form processing.

/// Errors that can occur while reading or sending a contact submission.
///
/// None of these escape [`validate`](crate::validate) or
/// [`submit`](crate::submit): they are converted into
/// [`ContactResult::Failure`](crate::ContactResult::Failure) at that boundary.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// A field could not be read from its source.
    #[error("Failed to read field '{field}': {reason}")]
    FieldRead { field: &'static str, reason: String },

    /// The transport could not deliver the submission.
    #[error("Failed to send message: {0}")]
    Transport(String),

    /// An error with no message of its own.
    #[error("")]
    Opaque,
}

impl ContactError {
    /// Create a field read error.
    pub fn field_read(field: &'static str, reason: impl Into<String>) -> Self {
        Self::FieldRead {
            field,
            reason: reason.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
