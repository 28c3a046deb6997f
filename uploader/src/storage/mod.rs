//! Object storage seam and Supabase Storage conventions.
//!
//! The [`ObjectStorage`] trait is what the sequencer talks to. The browser
//! implementation lives in the frontend; everything here is pure so it can
//! be tested natively:
//!
//! - [`StorageConfig`] - project URL, anon key, bucket, endpoint layout
//! - [`StorageKey`] - collision-resistant object names
//! - [`error_from_response`] - decoding of Supabase error bodies
//!
//! # Endpoints
//!
//! | Method | Path                                          | Use             |
//! |--------|-----------------------------------------------|-----------------|
//! | POST   | `/storage/v1/object/{bucket}/{key}`           | Upload (upsert) |
//! | GET    | `/storage/v1/object/public/{bucket}/{key}`    | Public URL      |

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use std::fmt;

use crate::error::{ConfigError, ConfigResult, StorageError, StorageResult};
use crate::models::{ImageType, PendingFile};

/// Bucket used when none is configured.
pub const DEFAULT_BUCKET: &str = "reviewhi";

/// `cache-control` max-age for uploaded objects, in seconds.
pub const CACHE_CONTROL_SECS: u32 = 3600;

/// Length of the random part of a storage key.
pub const SUFFIX_LEN: usize = 6;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// =============================================================================
// Storage Trait
// =============================================================================

/// Backend able to store an object and hand out its public URL.
///
/// Futures are not `Send`: the browser implementation awaits `fetch` on the
/// main thread.
#[async_trait(?Send)]
pub trait ObjectStorage {
    /// Platform handle on the file bytes.
    type Payload;

    /// Store `file` under `key`, overwriting any existing object.
    async fn upload(&self, key: &StorageKey, file: &PendingFile<Self::Payload>) -> StorageResult<()>;

    /// Public URL of an uploaded object.
    fn public_url(&self, key: &StorageKey) -> Option<String>;
}

// =============================================================================
// Storage Keys
// =============================================================================

/// Object name: `{unix_millis}_{suffix}.{ext}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Fresh key for a file, from the current time and a random suffix.
    pub fn generate(file_name: &str, image_type: ImageType) -> Self {
        let suffix = random_suffix(&mut rand::thread_rng());
        Self::compose(Utc::now().timestamp_millis(), &suffix, file_name, image_type)
    }

    /// Build a key from its parts.
    ///
    /// The extension is taken from the original name; names without one
    /// fall back to the image type's extension.
    pub fn compose(millis: i64, suffix: &str, file_name: &str, image_type: ImageType) -> Self {
        let ext = extension_of(file_name).unwrap_or_else(|| image_type.extension().to_string());
        Self(format!("{}_{}.{}", millis, suffix, ext))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Random lowercase base-36 string of [`SUFFIX_LEN`] characters.
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// Extension after the last `.`, restricted to ASCII alphanumerics so the
/// key never needs escaping in a URL path.
pub fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext: String = ext.chars().filter(char::is_ascii_alphanumeric).collect();
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Connection settings for a Supabase Storage bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Project URL without trailing slash
    pub project_url: String,
    /// Public (anonymous) API key
    pub anon_key: String,
    pub bucket: String,
    pub cache_control_secs: u32,
}

impl StorageConfig {
    /// Validate raw settings.
    ///
    /// `project_url` and `anon_key` are required; a missing or blank bucket
    /// falls back to [`DEFAULT_BUCKET`].
    pub fn new(
        project_url: Option<&str>,
        anon_key: Option<&str>,
        bucket: Option<&str>,
    ) -> ConfigResult<Self> {
        let project_url = non_blank(project_url).ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = non_blank(anon_key).ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;
        let bucket = non_blank(bucket).unwrap_or(DEFAULT_BUCKET);

        if !(project_url.starts_with("https://") || project_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(project_url.to_string()));
        }

        Ok(Self {
            project_url: project_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            bucket: bucket.to_string(),
            cache_control_secs: CACHE_CONTROL_SECS,
        })
    }

    /// Upload endpoint for `key`.
    pub fn object_url(&self, key: &StorageKey) -> String {
        format!("{}/storage/v1/object/{}/{}", self.project_url, self.bucket, key)
    }

    /// Public download URL for `key`.
    pub fn public_url(&self, key: &StorageKey) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.project_url, self.bucket, key)
    }

    /// Headers for an upsert upload of `image_type`.
    pub fn upload_headers(&self, image_type: ImageType) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.anon_key.clone()),
            ("authorization", format!("Bearer {}", self.anon_key)),
            ("x-upsert", "true".to_string()),
            ("cache-control", format!("max-age={}", self.cache_control_secs)),
            ("content-type", image_type.mime().to_string()),
        ]
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Error Bodies
// =============================================================================

/// Supabase Storage error payload. `statusCode` is sometimes a string,
/// sometimes a number, and is not needed.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Turn a non-success response into a [`StorageError`].
///
/// Prefers the JSON `message`, then `error`, then the raw body, then a
/// plain `HTTP {status}`.
pub fn error_from_response(status: u16, body: &str) -> StorageError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = parsed
        .and_then(|b| non_empty(b.message).or_else(|| non_empty(b.error)))
        .or_else(|| non_empty(Some(body.trim().to_string())))
        .unwrap_or_else(|| format!("HTTP {}", status));

    StorageError::Rejected { status, message }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> StorageConfig {
        StorageConfig::new(Some("https://abc.supabase.co/"), Some("anon"), None).unwrap()
    }

    #[test]
    fn test_compose_keeps_original_extension() {
        let key = StorageKey::compose(1700000000000, "k3x9qa", "holiday.photo.JPEG", ImageType::Jpeg);
        assert_eq!(key.as_str(), "1700000000000_k3x9qa.JPEG");
    }

    #[test]
    fn test_compose_falls_back_to_type_extension() {
        let key = StorageKey::compose(1, "aaaaaa", "screenshot", ImageType::Png);
        assert_eq!(key.as_str(), "1_aaaaaa.png");
        let key = StorageKey::compose(1, "aaaaaa", "trailing.", ImageType::Jpeg);
        assert_eq!(key.as_str(), "1_aaaaaa.jpg");
    }

    #[test]
    fn test_extension_strips_unsafe_characters() {
        assert_eq!(extension_of("a.p n/g").as_deref(), Some("png"));
        assert_eq!(extension_of("a.??"), None);
    }

    #[test]
    fn test_random_suffix_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let suffix = random_suffix(&mut rng);
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_generated_keys_differ() {
        let a = StorageKey::generate("a.png", ImageType::Png);
        let b = StorageKey::generate("a.png", ImageType::Png);
        assert_ne!(a, b);
        assert!(a.as_str().ends_with(".png"));
        let (millis, _) = a.as_str().split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
    }

    #[test]
    fn test_config_requires_url_and_key() {
        assert_eq!(
            StorageConfig::new(None, Some("k"), None),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
        assert_eq!(
            StorageConfig::new(Some("https://x.supabase.co"), Some("  "), None),
            Err(ConfigError::Missing("SUPABASE_ANON_KEY"))
        );
        assert!(matches!(
            StorageConfig::new(Some("x.supabase.co"), Some("k"), None),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_layout() {
        let cfg = config();
        assert_eq!(cfg.bucket, DEFAULT_BUCKET);
        let key = StorageKey::compose(1, "abcdef", "a.png", ImageType::Png);
        assert_eq!(
            cfg.object_url(&key),
            "https://abc.supabase.co/storage/v1/object/reviewhi/1_abcdef.png"
        );
        assert_eq!(
            cfg.public_url(&key),
            "https://abc.supabase.co/storage/v1/object/public/reviewhi/1_abcdef.png"
        );
    }

    #[test]
    fn test_upload_headers_upsert_and_cache() {
        let headers = config().upload_headers(ImageType::Jpeg);
        assert!(headers.contains(&("x-upsert", "true".to_string())));
        assert!(headers.contains(&("cache-control", "max-age=3600".to_string())));
        assert!(headers.contains(&("content-type", "image/jpeg".to_string())));
        assert!(headers.contains(&("authorization", "Bearer anon".to_string())));
    }

    #[test]
    fn test_error_from_response_prefers_message() {
        let body = r#"{"statusCode":"404","error":"Not found","message":"Bucket not found"}"#;
        assert_eq!(
            error_from_response(400, body),
            StorageError::Rejected {
                status: 400,
                message: "Bucket not found".into()
            }
        );

        let body = r#"{"statusCode":403,"error":"Unauthorized"}"#;
        assert_eq!(error_from_response(403, body).to_string(), "Unauthorized");
    }

    #[test]
    fn test_error_from_response_fallbacks() {
        assert_eq!(error_from_response(502, "Bad Gateway").to_string(), "Bad Gateway");
        assert_eq!(error_from_response(500, "").to_string(), "HTTP 500");
    }
}
