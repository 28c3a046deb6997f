//! Browser services.
//!
//! # Services
//!
//! - [`storage`] - Supabase Storage uploads over `fetch`
//! - [`files`] - `FileList` conversion and thumbnail object URLs
//! - [`clipboard`] - `navigator.clipboard` writes

pub mod storage;
pub mod files;
pub mod clipboard;

pub use storage::*;
pub use files::*;
pub use clipboard::*;
