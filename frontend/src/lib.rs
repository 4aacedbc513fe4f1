//! GrievanceHub - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for reporting municipal grievances with photo
//! evidence and tracking them by code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (nav links, session affordance)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /        HomePage (hero, feature cards, CTAs)          │
//! │  ├── /report  ReportPage (photo → details → review → code)  │
//! │  └── /track   TrackPage (status lookup by tracking code)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (GrievanceRecord, GrievanceStatus, etc.)
//! - [`state`] - Submission draft state machine
//! - [`error`] - Error taxonomy
//! - [`components`] - UI components (Header, ReportPage, TrackPage, etc.)
//! - [`services`] - Remote contracts and workflow orchestration

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Route, Router, Routes};
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod error;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{GrievanceRecord, GrievanceStatus, NewGrievance, UserSession};

// Errors
pub use error::{
    AuthError, LookupError, LookupResult, PreviewError, StoreError, StoreResult, SubmitError,
    SubmitResult,
};

// Form state
pub use state::{FormStep, SubmissionDraft};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 GrievanceHub - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session context is created once here and injected into the chrome
    // that needs it; it is not ambient state.
    let session = SessionContext::new(AuthClient::from_config());
    session.restore();

    view! {
        <Router>
            <Header session=session.clone()/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/report" view=ReportPage/>
                    <Route path="/track" view=TrackPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
