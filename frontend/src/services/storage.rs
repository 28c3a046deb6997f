//! Supabase Storage client over `fetch`.
//!
//! Implements [`ObjectStorage`] for browser files. Upload is a single
//! `POST` with upsert; public URLs are computed locally from the config.

use async_trait::async_trait;
use gloo_net::http::Request;
use reviewhi::{error_from_response, ObjectStorage, StorageConfig, StorageError, StorageKey, StorageResult};

use crate::types::BrowserFile;

/// Storage backend bound to one bucket.
#[derive(Clone, Debug)]
pub struct SupabaseStorage {
    config: StorageConfig,
}

impl SupabaseStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }
}

#[async_trait(?Send)]
impl ObjectStorage for SupabaseStorage {
    type Payload = web_sys::File;

    async fn upload(&self, key: &StorageKey, file: &BrowserFile) -> StorageResult<()> {
        let url = self.config.object_url(key);

        let mut builder = Request::post(&url);
        for (name, value) in self.config.upload_headers(file.image_type) {
            builder = builder.header(name, &value);
        }

        let request = builder
            .body(file.payload.clone())
            .map_err(|e| StorageError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Request(format!("HTTP request failed: {}", e)))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(response.status(), &body));
        }

        log::debug!("Stored {} in bucket {}", key, self.config.bucket);
        Ok(())
    }

    fn public_url(&self, key: &StorageKey) -> Option<String> {
        Some(self.config.public_url(key))
    }
}
