//! picdrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for staging image files (picker or drag & drop) and
//! uploading them to the gallery server in one batch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (gallery link)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns UploaderState)                            │
//! │  ├── Hero                                                    │
//! │  ├── DropZone ──► intake filter ──► PendingList             │
//! │  ├── PendingFileList (rows projected from PendingList)      │
//! │  └── UploadButton ──► dispatch cycle ──► POST /upload       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (PendingFile, UploadOutcome, AppError, ...)
//! - [`format`] - Human-readable byte sizes
//! - [`intake`] - Intake filter and pending list
//! - [`dispatch`] - Dispatch cycle over a transport and a page
//! - [`state`] - Reactive state owner
//! - [`components`] - UI components
//! - [`services`] - HTTP transport and browser page effects

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod format;
pub mod intake;
pub mod dispatch;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Pending
    FileKey, FileRow, IntakeReport, PendingFile, RejectReason, Rejection,
    // Upload
    DispatchSummary, UploadOutcome, UploadReply,
    // Errors
    AppError, AppResult,
};

// Core
pub use dispatch::{run_dispatch_cycle, UploadPage, UploadTransport};
pub use format::format_file_size;
pub use intake::{FileCandidate, PendingList};
pub use state::UploaderState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs logging and mounts the application on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 picdrop - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="picdrop - Upload Images"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Lives as long as the page; a reload builds a fresh one.
    let state = UploaderState::new();

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <DropZone state=state/>

            <PendingFileList state=state/>

            <div class="upload-actions">
                <UploadButton state=state/>
            </div>
        </div>

        <Footer/>
    }
}
