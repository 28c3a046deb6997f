//! In-memory stores owned by the uploader page.
//!
//! - [`SelectionStore`] - files waiting to be uploaded
//! - [`LinkStore`] - public URLs returned by completed uploads
//!
//! Both keep insertion order and live only as long as the page does.

use crate::models::{FileId, PendingFile, UploadedLink};

/// Separator used by "copy all links".
pub const LINK_SEPARATOR: &str = ", ";

// =============================================================================
// Selection Store
// =============================================================================

/// Ordered list of pending files, unique by id.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionStore<P> {
    files: Vec<PendingFile<P>>,
}

impl<P> Default for SelectionStore<P> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<P> SelectionStore<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch in arrival order.
    ///
    /// Entries whose id is already present are skipped. Returns how many
    /// were added.
    pub fn append(&mut self, batch: impl IntoIterator<Item = PendingFile<P>>) -> usize {
        let before = self.files.len();
        for file in batch {
            if self.contains(&file.id) {
                log::debug!("Skipping duplicate pending file {}", file.id);
                continue;
            }
            self.files.push(file);
        }
        self.files.len() - before
    }

    /// Remove one entry by id, keeping the order of the rest.
    pub fn remove(&mut self, id: &FileId) -> Option<PendingFile<P>> {
        let index = self.files.iter().position(|f| &f.id == id)?;
        Some(self.files.remove(index))
    }

    /// Remove everything, handing the entries back so their previews can
    /// be released.
    pub fn clear(&mut self) -> Vec<PendingFile<P>> {
        std::mem::take(&mut self.files)
    }

    pub fn contains(&self, id: &FileId) -> bool {
        self.files.iter().any(|f| &f.id == id)
    }

    pub fn get(&self, id: &FileId) -> Option<&PendingFile<P>> {
        self.files.iter().find(|f| &f.id == id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingFile<P>> {
        self.files.iter()
    }

    pub fn ids(&self) -> Vec<FileId> {
        self.files.iter().map(|f| f.id).collect()
    }
}

impl<P: Clone> SelectionStore<P> {
    /// Owned copy of the pending list, for a batch upload that must not
    /// hold a borrow across await points.
    pub fn snapshot(&self) -> Vec<PendingFile<P>> {
        self.files.clone()
    }
}

// =============================================================================
// Link Store
// =============================================================================

/// Ordered list of uploaded links. Values may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStore {
    links: Vec<UploadedLink>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch, preserving order.
    pub fn append(&mut self, batch: impl IntoIterator<Item = UploadedLink>) {
        self.links.extend(batch);
    }

    /// Remove every entry equal to `url`. Returns how many were removed.
    pub fn remove(&mut self, url: &str) -> usize {
        let before = self.links.len();
        self.links.retain(|link| link.url != url);
        before - self.links.len()
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }

    /// Text placed on the clipboard by "copy link".
    pub fn copy_text(&self, url: &str) -> String {
        url.to_string()
    }

    /// All links joined with `", "`, or `None` when there is nothing to copy.
    pub fn copy_all_text(&self) -> Option<String> {
        if self.links.is_empty() {
            return None;
        }
        let urls: Vec<&str> = self.links.iter().map(|l| l.url.as_str()).collect();
        Some(urls.join(LINK_SEPARATOR))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedLink> {
        self.links.iter()
    }

    pub fn urls(&self) -> Vec<String> {
        self.links.iter().map(|l| l.url.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageType;

    fn pending(name: &str) -> PendingFile<()> {
        PendingFile {
            id: FileId::new(),
            payload: (),
            name: name.to_string(),
            size: 1,
            image_type: ImageType::Png,
            preview: None,
        }
    }

    fn names(store: &SelectionStore<()>) -> Vec<&str> {
        store.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut store = SelectionStore::new();
        let files = vec![pending("a"), pending("b"), pending("c"), pending("d")];
        let target = files[1].id;
        store.append(files);

        let removed = store.remove(&target).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = SelectionStore::new();
        store.append(vec![pending("a")]);
        assert!(store.remove(&FileId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_append_skips_duplicate_ids() {
        let mut store = SelectionStore::new();
        let file = pending("a");
        assert_eq!(store.append(vec![file.clone()]), 1);
        assert_eq!(store.append(vec![file, pending("b")]), 1);
        assert_eq!(names(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_clear_returns_drained_entries() {
        let mut store = SelectionStore::new();
        store.append(vec![pending("a"), pending("b")]);
        let drained = store.clear();
        assert_eq!(drained.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_link_remove_drops_every_equal_entry() {
        let mut links = LinkStore::new();
        links.append(vec![
            UploadedLink::new("https://x/1"),
            UploadedLink::new("https://x/2"),
            UploadedLink::new("https://x/1"),
        ]);
        assert_eq!(links.remove("https://x/1"), 2);
        assert_eq!(links.urls(), vec!["https://x/2"]);
        assert_eq!(links.remove("https://x/missing"), 0);
    }

    #[test]
    fn test_copy_all_joins_in_store_order() {
        let mut links = LinkStore::new();
        assert_eq!(links.copy_all_text(), None);

        links.append(vec![UploadedLink::new("https://x/b"), UploadedLink::new("https://x/a")]);
        links.append(vec![UploadedLink::new("https://x/c")]);
        assert_eq!(
            links.copy_all_text().as_deref(),
            Some("https://x/b, https://x/a, https://x/c")
        );
        assert_eq!(links.copy_text("https://x/a"), "https://x/a");
    }
}
