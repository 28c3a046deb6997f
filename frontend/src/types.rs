//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - browser-backed pending files
//! - **Toast Types** - notices queued for display
//! - **Progress Types** - batch upload progress
//! - **Error Types** - frontend error handling

use std::fmt;

use reviewhi::{ConfigError, Notice, PendingFile, SelectionStore, StepEvent, StorageError};

// =============================================================================
// File Types
// =============================================================================

/// A pending file whose bytes live in a browser `File`.
pub type BrowserFile = PendingFile<web_sys::File>;

/// Selection store holding browser files.
pub type BrowserSelection = SelectionStore<web_sys::File>;

// =============================================================================
// Toast Types
// =============================================================================

/// A notice on screen, keyed for the toast list.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

// =============================================================================
// Progress Types
// =============================================================================

/// Where a running batch is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    /// Files stored so far
    pub done: usize,
    pub total: usize,
}

impl UploadProgress {
    /// Fold a sequencer event into the progress.
    pub fn record(&mut self, event: &StepEvent) {
        match event {
            StepEvent::Started { total, .. } => self.total = *total,
            StepEvent::Uploaded { index, total, .. } => {
                self.done = index + 1;
                self.total = *total;
            }
        }
    }

    /// Completion in percent, for the progress bar width.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 * 100.0 / self.total as f64
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Storage request failed.
    Storage(String),
    /// Storage settings missing or invalid.
    Config(String),
    /// Clipboard unavailable or write rejected.
    Clipboard(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
