//! Domain models: pending files, uploaded links and image types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Image Type
// =============================================================================

/// Image formats accepted by the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Jpeg,
    Png,
}

impl ImageType {
    /// Parse a declared MIME type.
    ///
    /// Accepts `image/jpeg`, the non-standard `image/jpg` some browsers
    /// report, and `image/png`. Case and parameters (`; charset=...`) are
    /// ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageType::Jpeg),
            "image/png" => Some(ImageType::Png),
            _ => None,
        }
    }

    /// Canonical MIME type sent as `content-type`.
    pub fn mime(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
        }
    }

    /// Extension used when the original file name has none.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
        }
    }
}

// =============================================================================
// Pending File
// =============================================================================

/// Locally generated identifier of a pending file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated image waiting for the user to trigger the upload.
///
/// `P` is the platform's handle on the bytes: `web_sys::File` in the
/// browser, a plain `Vec<u8>` in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile<P> {
    pub id: FileId,
    pub payload: P,
    /// Original file name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub image_type: ImageType,
    /// Local object URL used for the thumbnail, if one was created
    pub preview: Option<String>,
}

impl<P> PendingFile<P> {
    /// Size in megabytes, for logs.
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

// =============================================================================
// Uploaded Link
// =============================================================================

/// Public URL of an uploaded object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedLink {
    pub url: String,
}

impl UploadedLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl fmt::Display for UploadedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_allow_set() {
        assert_eq!(ImageType::from_mime("image/jpeg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_mime("image/jpg"), Some(ImageType::Jpeg));
        assert_eq!(ImageType::from_mime("image/png"), Some(ImageType::Png));
        assert_eq!(ImageType::from_mime("IMAGE/PNG"), Some(ImageType::Png));
        assert_eq!(ImageType::from_mime("image/png; q=1"), Some(ImageType::Png));
    }

    #[test]
    fn test_from_mime_rejects_others() {
        assert_eq!(ImageType::from_mime("image/gif"), None);
        assert_eq!(ImageType::from_mime("image/webp"), None);
        assert_eq!(ImageType::from_mime(""), None);
        assert_eq!(ImageType::from_mime("application/pdf"), None);
    }

    #[test]
    fn test_file_ids_are_unique() {
        let a = FileId::new();
        let b = FileId::new();
        assert_ne!(a, b);
    }
}
