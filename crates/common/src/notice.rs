//! Operation notices surfaced to the presentation layer
//!
//! Each controller operation (analyze, create, delete, load) pushes a
//! success or error notice into its owning controller's queue. The
//! presentation layer drains the queue and renders the notices as toasts.
//! Message text is a presentation detail; tests assert on kind only.

use serde::{Deserialize, Serialize};

/// Kind of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible notice produced by a controller operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Whether this notice reports a failure
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
