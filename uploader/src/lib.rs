//! # ReviewHi - image intake and upload workflow
//!
//! Everything the uploader page does that is not rendering: checking
//! dropped files, keeping the pending and uploaded lists, naming objects
//! and pushing them to storage one at a time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Dropped     │────▶│  Selection  │────▶│  Sequencer  │────▶│  LinkStore  │
//! │ files       │     │  Store      │     │ (1 by 1)    │     │  (URLs)     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!    intake::admit                          ObjectStorage
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reviewhi::{admit, upload_selection, LinkStore, SelectionStore};
//!
//! let mut selection = SelectionStore::new();
//! let report = admit(candidates, |_| None);
//! selection.append(report.admitted);
//!
//! let mut links = LinkStore::new();
//! let (notice, _released) = upload_selection(&storage, &mut selection, &mut links).await;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - PendingFile, UploadedLink, ImageType
//! - [`intake`] - Type and size checks
//! - [`store`] - Selection and link stores
//! - [`storage`] - Storage trait, keys, Supabase conventions
//! - [`sequencer`] - Sequential batch upload
//! - [`notice`] - User-facing toast messages

pub mod error;
pub mod models;

pub mod intake;
pub mod store;

pub mod storage;
pub mod sequencer;

pub mod notice;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ConfigError, ConfigResult,
    IntakeError, IntakeResult,
    StorageError, StorageResult,
};

pub use models::{FileId, ImageType, PendingFile, UploadedLink};

pub use intake::{admit, check, Candidate, IntakeReport, Rejection, ACCEPT_ATTR, MAX_FILE_SIZE};

pub use store::{LinkStore, SelectionStore, LINK_SEPARATOR};

pub use storage::{
    error_from_response,
    ObjectStorage,
    StorageConfig,
    StorageKey,
    DEFAULT_BUCKET,
};

pub use sequencer::{
    upload_selection,
    BatchReport,
    CompletedStep,
    StepEvent,
    StepFailure,
    UploadSequencer,
};

pub use notice::{Notice, NoticeKind};
