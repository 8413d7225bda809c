//! Error types for editors.

use configurable_types::HostKind;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while building or rendering editors.
///
/// Malformed configuration is never an error: editors fall back to their
/// defaults instead. What remains are programming defects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// The editor already renders into another toolkit.
    #[error("Can not switch widget host from {locked} to {requested}")]
    HostConflict {
        locked: HostKind,
        requested: HostKind,
    },

    /// An editor declaration that can never hold a valid value.
    #[error("Invalid editor declaration: {0}")]
    InvalidSpec(String),
}

impl EditorError {
    /// Create a host conflict error.
    pub fn host_conflict(locked: HostKind, requested: HostKind) -> Self {
        Self::HostConflict { locked, requested }
    }

    /// Create an invalid declaration error.
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec(message.into())
    }
}
