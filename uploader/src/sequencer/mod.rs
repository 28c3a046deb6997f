//! Sequential batch upload.
//!
//! ```text
//! ┌───────────┐   for each file, one at a time   ┌──────────────┐
//! │ Selection │ ───────────────────────────────▶ │ ObjectStorage│
//! │  snapshot │   key → upload → public URL      └──────────────┘
//! └───────────┘               │
//!                             ▼ stop at first failure
//!                      ┌─────────────┐  apply()  ┌──────────────────────┐
//!                      │ BatchReport │ ────────▶ │ Selection + LinkStore│
//!                      └─────────────┘           └──────────────────────┘
//! ```
//!
//! Running and committing are split: [`UploadSequencer::run`] only needs
//! an owned snapshot of the pending files, so the caller does not hold its
//! stores across the awaits. [`BatchReport::apply`] then updates both stores
//! in one synchronous step.

use crate::error::StorageError;
use crate::models::{FileId, PendingFile, UploadedLink};
use crate::notice::Notice;
use crate::storage::{ObjectStorage, StorageKey};
use crate::store::{LinkStore, SelectionStore};

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// Upload of file `index` (0-based) is about to start.
    Started {
        index: usize,
        total: usize,
        key: StorageKey,
    },
    /// File `index` is stored and has a public URL.
    Uploaded {
        index: usize,
        total: usize,
        url: String,
    },
}

/// A file that made it to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedStep {
    pub file_id: FileId,
    pub key: StorageKey,
    pub url: String,
}

/// The file that stopped the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub index: usize,
    pub file_id: FileId,
    pub file_name: String,
    pub error: StorageError,
}

/// Per-step results of one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchReport {
    /// Nothing was selected; no backend call was made.
    Empty,
    /// Every file was stored.
    Completed(Vec<CompletedStep>),
    /// Stopped at the first failure. `completed` lists the files stored
    /// before it.
    Failed {
        completed: Vec<CompletedStep>,
        failure: StepFailure,
    },
}

impl BatchReport {
    /// Steps that reached storage, in upload order.
    pub fn completed(&self) -> &[CompletedStep] {
        match self {
            BatchReport::Empty => &[],
            BatchReport::Completed(steps) => steps,
            BatchReport::Failed { completed, .. } => completed,
        }
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            BatchReport::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchReport::Completed(_))
    }

    /// URLs of objects stored before a failure. They stay in the bucket
    /// but are not added to the link list.
    pub fn orphaned_urls(&self) -> Vec<&str> {
        match self {
            BatchReport::Failed { completed, .. } => completed.iter().map(|s| s.url.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Commit the outcome and build the notice for the user.
    ///
    /// - `Empty`: nothing changes, "nothing selected" notice
    /// - `Completed`: links appended in upload order, selection cleared;
    ///   the drained pending files are returned so their previews can be
    ///   released
    /// - `Failed`: neither store changes, failure notice with the first
    ///   error's message
    pub fn apply<P>(
        self,
        selection: &mut SelectionStore<P>,
        links: &mut LinkStore,
    ) -> (Notice, Vec<PendingFile<P>>) {
        match self {
            BatchReport::Empty => (Notice::nothing_selected(), Vec::new()),
            BatchReport::Completed(steps) => {
                let count = steps.len();
                links.append(steps.into_iter().map(|s| UploadedLink::new(s.url)));
                let drained = selection.clear();
                (Notice::upload_success(count), drained)
            }
            BatchReport::Failed { completed, failure } => {
                if !completed.is_empty() {
                    log::warn!(
                        "{} file(s) were stored before the failure and are not listed: {:?}",
                        completed.len(),
                        completed.iter().map(|s| s.url.as_str()).collect::<Vec<_>>()
                    );
                }
                (Notice::from(&failure.error), Vec::new())
            }
        }
    }
}

/// Runs a batch one file at a time against a storage backend.
pub struct UploadSequencer<'a, S: ObjectStorage> {
    storage: &'a S,
}

impl<'a, S: ObjectStorage> UploadSequencer<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Upload `files` in order, awaiting each before starting the next.
    ///
    /// Stops at the first upload error or missing public URL. `observer`
    /// sees every step as it happens.
    pub async fn run<F>(&self, files: &[PendingFile<S::Payload>], mut observer: F) -> BatchReport
    where
        F: FnMut(&StepEvent),
    {
        if files.is_empty() {
            log::warn!("Upload requested with no files selected");
            return BatchReport::Empty;
        }

        let total = files.len();
        let mut completed = Vec::with_capacity(total);

        for (index, file) in files.iter().enumerate() {
            let key = StorageKey::generate(&file.name, file.image_type);

            log::info!(
                "Upload start: {} -> {} ({:.2}MB, {})",
                file.name,
                key,
                file.size_mb(),
                file.image_type.mime()
            );
            observer(&StepEvent::Started {
                index,
                total,
                key: key.clone(),
            });

            let result = match self.storage.upload(&key, file).await {
                Ok(()) => self
                    .storage
                    .public_url(&key)
                    .filter(|url| !url.is_empty())
                    .ok_or_else(|| StorageError::MissingPublicUrl {
                        key: key.to_string(),
                    }),
                Err(e) => Err(e),
            };

            match result {
                Ok(url) => {
                    log::info!("Public URL: {}", url);
                    observer(&StepEvent::Uploaded {
                        index,
                        total,
                        url: url.clone(),
                    });
                    completed.push(CompletedStep {
                        file_id: file.id,
                        key,
                        url,
                    });
                }
                Err(error) => {
                    log::error!("Upload of {} failed: {}", file.name, error);
                    return BatchReport::Failed {
                        completed,
                        failure: StepFailure {
                            index,
                            file_id: file.id,
                            file_name: file.name.clone(),
                            error,
                        },
                    };
                }
            }
        }

        log::info!("Uploaded {} file(s)", completed.len());
        BatchReport::Completed(completed)
    }
}

/// Run a batch over `selection` and commit the result.
///
/// Convenience for callers that own both stores outright. Returns the
/// notice and the report's released pending files.
pub async fn upload_selection<S>(
    storage: &S,
    selection: &mut SelectionStore<S::Payload>,
    links: &mut LinkStore,
) -> (Notice, Vec<PendingFile<S::Payload>>)
where
    S: ObjectStorage,
    S::Payload: Clone,
{
    let files = selection.snapshot();
    let report = UploadSequencer::new(storage).run(&files, |_| {}).await;
    report.apply(selection, links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageType;
    use crate::notice::GENERIC_UPLOAD_FAILURE;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// In-memory backend that records calls and fails at a chosen index.
    #[derive(Default)]
    struct FakeStorage {
        calls: RefCell<Vec<String>>,
        fail_at: Option<(usize, StorageError)>,
        no_url: bool,
    }

    #[async_trait(?Send)]
    impl ObjectStorage for FakeStorage {
        type Payload = Vec<u8>;

        async fn upload(&self, key: &StorageKey, file: &PendingFile<Vec<u8>>) -> Result<(), StorageError> {
            let index = self.calls.borrow().len();
            self.calls.borrow_mut().push(format!("{}:{}", file.name, key));
            match &self.fail_at {
                Some((at, err)) if *at == index => Err(err.clone()),
                _ => Ok(()),
            }
        }

        fn public_url(&self, key: &StorageKey) -> Option<String> {
            if self.no_url {
                None
            } else {
                Some(format!("https://cdn.test/public/{}", key))
            }
        }
    }

    fn selection(names: &[&str]) -> SelectionStore<Vec<u8>> {
        let mut store = SelectionStore::new();
        store.append(names.iter().map(|name| PendingFile {
            id: FileId::new(),
            payload: vec![1, 2, 3],
            name: name.to_string(),
            size: 3,
            image_type: ImageType::Jpeg,
            preview: None,
        }));
        store
    }

    #[tokio::test]
    async fn test_empty_selection_makes_no_calls() {
        let storage = FakeStorage::default();
        let mut files = selection(&[]);
        let mut links = LinkStore::new();

        let (notice, drained) = upload_selection(&storage, &mut files, &mut links).await;

        assert_eq!(notice, Notice::nothing_selected());
        assert!(drained.is_empty());
        assert!(storage.calls.borrow().is_empty());
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_all_succeed_appends_links_in_order_and_clears_selection() {
        let storage = FakeStorage::default();
        let mut files = selection(&["a.jpg", "b.png", "c.jpeg"]);
        let mut links = LinkStore::new();
        links.append(vec![UploadedLink::new("https://cdn.test/old")]);

        let (notice, drained) = upload_selection(&storage, &mut files, &mut links).await;

        assert_eq!(notice, Notice::upload_success(3));
        assert_eq!(drained.len(), 3);
        assert!(files.is_empty());

        let calls = storage.calls.borrow();
        assert_eq!(calls.len(), 3);
        let urls = links.urls();
        assert_eq!(urls.len(), 4);
        assert_eq!(urls[0], "https://cdn.test/old");
        for (i, name) in ["a.jpg", "b.png", "c.jpeg"].iter().enumerate() {
            let key = calls[i].strip_prefix(&format!("{}:", name)).unwrap();
            assert_eq!(urls[i + 1], format!("https://cdn.test/public/{}", key));
        }
        assert!(urls[1].ends_with(".jpg"));
        assert!(urls[2].ends_with(".png"));
        assert!(urls[3].ends_with(".jpeg"));
    }

    #[tokio::test]
    async fn test_failure_stops_batch_and_leaves_stores_untouched() {
        let storage = FakeStorage {
            fail_at: Some((
                1,
                StorageError::Rejected {
                    status: 400,
                    message: "Payload too large".into(),
                },
            )),
            ..Default::default()
        };
        let mut files = selection(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
        let before = files.clone();
        let mut links = LinkStore::new();

        let snapshot = files.snapshot();
        let report = UploadSequencer::new(&storage).run(&snapshot, |_| {}).await;

        assert_eq!(storage.calls.borrow().len(), 2);
        assert_eq!(report.orphaned_urls().len(), 1);
        let failure = report.failure().unwrap();
        assert_eq!(failure.index, 1);
        assert_eq!(failure.file_name, "b.jpg");

        let (notice, drained) = report.apply(&mut files, &mut links);
        assert_eq!(notice.description, "Payload too large");
        assert!(drained.is_empty());
        assert_eq!(files, before);
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_blank_backend_message_uses_generic_fallback() {
        let storage = FakeStorage {
            fail_at: Some((0, StorageError::Request(String::new()))),
            ..Default::default()
        };
        let mut files = selection(&["a.jpg"]);
        let mut links = LinkStore::new();

        let (notice, _) = upload_selection(&storage, &mut files, &mut links).await;
        assert_eq!(notice.description, GENERIC_UPLOAD_FAILURE);
        assert_eq!(files.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_public_url_is_a_failure() {
        let storage = FakeStorage {
            no_url: true,
            ..Default::default()
        };
        let mut files = selection(&["a.jpg", "b.jpg"]);
        let mut links = LinkStore::new();

        let snapshot = files.snapshot();
        let report = UploadSequencer::new(&storage).run(&snapshot, |_| {}).await;

        assert_eq!(storage.calls.borrow().len(), 1);
        assert!(matches!(
            report.failure().map(|f| &f.error),
            Some(StorageError::MissingPublicUrl { .. })
        ));
        let (_, _) = report.apply(&mut files, &mut links);
        assert_eq!(files.len(), 2);
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_observer_sees_each_step_in_order() {
        let storage = FakeStorage::default();
        let files = selection(&["a.jpg", "b.jpg"]).snapshot();
        let mut seen = Vec::new();

        let report = UploadSequencer::new(&storage)
            .run(&files, |event| {
                seen.push(match event {
                    StepEvent::Started { index, total, .. } => format!("start {}/{}", index, total),
                    StepEvent::Uploaded { index, total, .. } => format!("done {}/{}", index, total),
                })
            })
            .await;

        assert!(report.is_success());
        assert_eq!(seen, vec!["start 0/2", "done 0/2", "start 1/2", "done 1/2"]);
    }
}
