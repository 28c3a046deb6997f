//! Error types for the image upload workflow.
//!
//! - [`IntakeError`] - per-file rejections at drop/selection time
//! - [`StorageError`] - object storage failures during a batch upload
//! - [`ConfigError`] - missing or malformed storage configuration
//!
//! None of these are fatal: each one ends up as a [`crate::Notice`] and the
//! page stays interactive.

use thiserror::Error;

// =============================================================================
// Intake Errors
// =============================================================================

/// Reasons a dropped or selected file is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Declared MIME type is not JPEG or PNG.
    #[error("Unsupported file type: {mime}")]
    UnsupportedType { mime: String },

    /// File exceeds the size ceiling.
    #[error("File is too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from the object storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The request never produced a response (network, CORS, body).
    #[error("{0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Upload succeeded but no public URL could be resolved.
    #[error("파일 URL을 가져오는데 실패했습니다. ({key})")]
    MissingPublicUrl { key: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Storage configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required setting was not provided at build time.
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    /// Project URL is not an http(s) URL.
    #[error("Invalid project URL: {0}")]
    InvalidUrl(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for intake checks.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_backend_message_only() {
        let err = StorageError::Rejected {
            status: 400,
            message: "The resource already exists".into(),
        };
        assert_eq!(err.to_string(), "The resource already exists");
    }

    #[test]
    fn test_too_large_format() {
        let err = IntakeError::TooLarge {
            size: 11_000_000,
            limit: 10 * 1024 * 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("11000000"));
        assert!(msg.contains("10485760"));
    }
}
