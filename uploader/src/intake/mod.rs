//! File intake: the checks a dropped or selected file must pass before it
//! joins the selection.
//!
//! # Rules
//!
//! - MIME type must be `image/jpeg`, `image/jpg` or `image/png`
//! - Size must be at most [`MAX_FILE_SIZE`] (10 MiB, inclusive)
//!
//! The type check runs first, so a file that fails both is reported as the
//! wrong type. Rejections are per file: one bad file never blocks the
//! others from the same drop.
//!
//! # Example
//!
//! ```rust
//! use reviewhi::intake::{admit, Candidate};
//!
//! let report = admit(
//!     vec![
//!         Candidate::new("cat.png", 2048, "image/png", vec![0u8; 4]),
//!         Candidate::new("doc.pdf", 2048, "application/pdf", vec![0u8; 4]),
//!     ],
//!     |_| None,
//! );
//! assert_eq!(report.admitted.len(), 1);
//! assert_eq!(report.rejected.len(), 1);
//! ```

use crate::error::{IntakeError, IntakeResult};
use crate::models::{FileId, ImageType, PendingFile};
use crate::notice::Notice;

/// Upper bound on an image's size in bytes.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// `accept` attribute for the file picker.
pub const ACCEPT_ATTR: &str = ".jpg,.jpeg,.png";

/// A file as handed over by the browser, before validation.
#[derive(Debug, Clone)]
pub struct Candidate<P> {
    pub name: String,
    pub size: u64,
    /// MIME type as declared by the browser
    pub mime: String,
    pub payload: P,
}

impl<P> Candidate<P> {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            payload,
        }
    }
}

/// A refused file and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    pub error: IntakeError,
}

impl Rejection {
    pub fn notice(&self) -> Notice {
        Notice::from(&self.error)
    }
}

/// Outcome of one drop or selection.
#[derive(Debug, Clone)]
pub struct IntakeReport<P> {
    /// Admitted files, in drop order
    pub admitted: Vec<PendingFile<P>>,
    pub rejected: Vec<Rejection>,
}

impl<P> IntakeReport<P> {
    /// One notice per rejected file, in drop order.
    pub fn notices(&self) -> Vec<Notice> {
        self.rejected.iter().map(Rejection::notice).collect()
    }
}

/// Check a declared MIME type and size.
pub fn check(mime: &str, size: u64) -> IntakeResult<ImageType> {
    let image_type = ImageType::from_mime(mime).ok_or_else(|| IntakeError::UnsupportedType {
        mime: mime.to_string(),
    })?;

    if size > MAX_FILE_SIZE {
        return Err(IntakeError::TooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    Ok(image_type)
}

/// Validate a batch of candidates.
///
/// `preview` is only called for admitted files, so a rejected file never
/// allocates an object URL.
pub fn admit<P, F>(candidates: impl IntoIterator<Item = Candidate<P>>, mut preview: F) -> IntakeReport<P>
where
    F: FnMut(&P) -> Option<String>,
{
    let mut admitted = Vec::new();
    let mut rejected = Vec::new();

    for candidate in candidates {
        match check(&candidate.mime, candidate.size) {
            Ok(image_type) => {
                let preview = preview(&candidate.payload);
                admitted.push(PendingFile {
                    id: FileId::new(),
                    payload: candidate.payload,
                    name: candidate.name,
                    size: candidate.size,
                    image_type,
                    preview,
                });
            }
            Err(error) => {
                log::warn!("Rejected {}: {}", candidate.name, error);
                rejected.push(Rejection {
                    name: candidate.name,
                    error,
                });
            }
        }
    }

    IntakeReport { admitted, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, size: u64, mime: &str) -> Candidate<Vec<u8>> {
        Candidate::new(name, size, mime, Vec::new())
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert_eq!(check("image/png", MAX_FILE_SIZE), Ok(ImageType::Png));
        assert_eq!(
            check("image/png", MAX_FILE_SIZE + 1),
            Err(IntakeError::TooLarge {
                size: MAX_FILE_SIZE + 1,
                limit: MAX_FILE_SIZE
            })
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let err = check("image/gif", MAX_FILE_SIZE * 2).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_admit_keeps_drop_order_and_reports_each_rejection() {
        let report = admit(
            vec![
                candidate("a.jpg", 10, "image/jpeg"),
                candidate("b.gif", 10, "image/gif"),
                candidate("c.png", MAX_FILE_SIZE + 1, "image/png"),
                candidate("d.jpeg", 10, "image/jpg"),
            ],
            |_| None,
        );

        let names: Vec<_> = report.admitted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "d.jpeg"]);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].name, "b.gif");
        assert_eq!(report.rejected[1].name, "c.png");

        let notices = report.notices();
        assert_eq!(notices[0], Notice::invalid_type());
        assert_eq!(notices[1], Notice::too_large());
    }

    #[test]
    fn test_preview_only_created_for_admitted_files() {
        let mut calls = 0;
        let report = admit(
            vec![
                candidate("a.png", 1, "image/png"),
                candidate("b.bmp", 1, "image/bmp"),
            ],
            |_| {
                calls += 1;
                Some(format!("blob:preview-{}", calls))
            },
        );
        assert_eq!(calls, 1);
        assert_eq!(report.admitted[0].preview.as_deref(), Some("blob:preview-1"));
    }

    #[test]
    fn test_admitted_files_get_distinct_ids() {
        let report = admit(
            vec![
                candidate("a.png", 1, "image/png"),
                candidate("a.png", 1, "image/png"),
            ],
            |_| None,
        );
        assert_ne!(report.admitted[0].id, report.admitted[1].id);
    }
}
