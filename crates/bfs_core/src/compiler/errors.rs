//! Error types for job compilation.
//!
//! All errors are detected synchronously; the first violated precondition
//! aborts the compile with no tasks produced.

use thiserror::Error;

/// A precondition violated during job compilation.
#[derive(Error, Debug)]
pub enum CompileError {
    /// A video container format was selected as the output format.
    #[error("Unsupported output format '{format}': video formats cannot be split into farm tasks")]
    UnsupportedFormat { format: String },

    /// A setting required by the active mode is absent or blank.
    #[error("Missing required setting '{key}'")]
    MissingRequiredSetting { key: String },

    /// The frame-range expression could not be parsed.
    #[error("Malformed frame range: bad token '{token}'")]
    MalformedFrameRange { token: String },

    /// The chunk size is not a positive integer.
    #[error("Invalid chunk size {size}: must be at least 1")]
    InvalidChunkSize { size: i64 },
}

impl CompileError {
    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a missing required setting error.
    pub fn missing_setting(key: impl Into<String>) -> Self {
        Self::MissingRequiredSetting { key: key.into() }
    }

    /// Create a malformed frame range error for the offending token.
    pub fn malformed_frame_range(token: impl Into<String>) -> Self {
        Self::MalformedFrameRange {
            token: token.into(),
        }
    }

    /// Create an invalid chunk size error.
    pub fn invalid_chunk_size(size: i64) -> Self {
        Self::InvalidChunkSize { size }
    }
}

/// Result type for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;
