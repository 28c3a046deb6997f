//! ReviewHi - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for dropping JPEG/PNG images, uploading them to
//! Supabase Storage and collecting shareable public links.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (guide / contact links)                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, tagline)                                  │
//! │  └── ImageUploader                                          │
//! │      ├── drop zone                                          │
//! │      ├── SelectionGrid (pending files)                      │
//! │      ├── ProgressSection (while uploading)                  │
//! │      └── LinkList (uploaded links)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastViewport                                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Frontend types (Toast, UploadProgress, AppError)
//! - [`components`] - UI components
//! - [`services`] - Browser services (storage, files, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    BrowserFile, BrowserSelection,
    // Toasts
    Toast,
    // Progress
    UploadProgress,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    if let Err(e) = storage_config() {
        log::warn!("⚠️ {}; uploads will fail until it is set", e);
    }

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Toaster::new());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
        <ToastViewport/>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <ImageUploader/>
        </div>

        <Footer/>
    }
}
