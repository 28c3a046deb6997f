//! UI Components for the ReviewHi uploader.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with guide/contact links
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ImageUploader`] - Drop zone, selection grid and upload trigger
//! - [`LinkList`] - Uploaded links with copy/remove actions
//! - [`ProgressSection`] - Batch upload progress
//! - [`ToastViewport`] - Toast notifications

mod header;
mod hero;
mod upload;
mod links;
mod progress;
mod toast;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use links::*;
pub use progress::*;
pub use toast::*;
pub use footer::*;
