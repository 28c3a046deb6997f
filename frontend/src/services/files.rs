//! Browser file handling: turning `FileList`s into intake candidates and
//! managing thumbnail object URLs.

use reviewhi::Candidate;
use web_sys::{File, FileList, Url};

use crate::types::BrowserFile;

/// Collect a `FileList` in order.
pub fn candidates(files: &FileList) -> Vec<Candidate<File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| Candidate::new(file.name(), file.size() as u64, file.type_(), file))
        .collect()
}

/// Create a local object URL for a thumbnail.
pub fn create_preview(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Failed to create preview for {}: {:?}", file.name(), e);
            None
        }
    }
}

/// Release the thumbnail URLs of files leaving the selection.
pub fn release_previews<'a>(files: impl IntoIterator<Item = &'a BrowserFile>) {
    for file in files {
        if let Some(url) = &file.preview {
            if let Err(e) = Url::revoke_object_url(url) {
                log::debug!("Failed to revoke {}: {:?}", url, e);
            }
        }
    }
}
