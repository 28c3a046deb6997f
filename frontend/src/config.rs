//! Application configuration.
//!
//! Storage settings are baked in at build time: `build.rs` forwards
//! `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `SUPABASE_BUCKET` from the
//! environment or a `.env` file. A missing value does not break the page;
//! uploads fail with a notice instead.

use reviewhi::{ConfigResult, StorageConfig};

/// Supabase project URL.
pub const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");

/// Public (anonymous) API key.
pub const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

/// Storage bucket. Defaults to `reviewhi` when unset.
pub const SUPABASE_BUCKET: Option<&str> = option_env!("SUPABASE_BUCKET");

/// Application name shown in the header and title.
pub const APP_NAME: &str = "ReviewHi";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Validated storage settings.
pub fn storage_config() -> ConfigResult<StorageConfig> {
    StorageConfig::new(SUPABASE_URL, SUPABASE_ANON_KEY, SUPABASE_BUCKET)
}
