//! Error types for the voc-eval library.

use thiserror::Error;

/// Result type for voc-eval operations.
pub type Result<T> = std::result::Result<T, VocEvalError>;

/// Error types that can occur while scoring a submission.
#[derive(Error, Debug)]
pub enum VocEvalError {
    /// Archive is missing, unreadable, or not a ZIP container.
    #[error("Archive error ({path}): {reason}")]
    Archive { path: String, reason: String },

    /// Annotation record exists but cannot be interpreted.
    #[error("Parse error ({source_name}): {reason}")]
    Parse { source_name: String, reason: String },

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid IoU threshold or smoothing term.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

impl VocEvalError {
    pub(crate) fn archive(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        VocEvalError::Archive {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        VocEvalError::Parse {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures caused by the archive container itself.
    pub fn is_archive_error(&self) -> bool {
        matches!(self, VocEvalError::Archive { .. })
    }

    /// True for failures caused by an unreadable or malformed annotation.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, VocEvalError::Parse { .. })
    }
}
