//! Common error types and handling for Mentionwatch

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Mentionwatch client workspace
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Operation already in flight: {0}")]
    Busy(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Load failed: {0}")]
    Load(String),

    #[error("Delete failed: {0}")]
    Delete(String),
}

impl Error {
    /// Get the error code for notices and structured logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Busy(_) => "BUSY",
            Error::Analysis(_) => "ANALYSIS_ERROR",
            Error::Submission(_) => "SUBMISSION_ERROR",
            Error::Load(_) => "LOAD_ERROR",
            Error::Delete(_) => "DELETE_ERROR",
        }
    }

    /// Whether the failure leaves the controller in a stable state that
    /// permits retry. Remote and validation failures always do.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Unexpected(_) | Error::Serialization(_))
    }
}
