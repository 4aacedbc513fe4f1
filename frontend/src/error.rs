//! Error types for the grievance submission and lookup flows.
//!
//! - [`StoreError`] - remote object-store / row-store transport errors
//! - [`PreviewError`] - local photo preview encoding errors
//! - [`AuthError`] - auth endpoint errors
//! - [`SubmitError`] - submission orchestration errors
//! - [`LookupError`] - tracking-code lookup errors
//!
//! Every remote-call failure is caught at the orchestrator/lookup boundary
//! and converted to a user-facing string; nothing propagates uncaught into
//! the view layer.

use thiserror::Error;

// =============================================================================
// Remote Store Errors
// =============================================================================

/// Errors from the object-store / row-store contracts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StoreError {
    /// The request never reached the service.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The object path is malformed.
    #[error("invalid object path: {0}")]
    InvalidPath(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Preview Errors
// =============================================================================

/// Errors while encoding a local photo preview.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PreviewError {
    /// Selected file is not image-typed.
    #[error("not an image file")]
    NotAnImage,

    /// The browser failed to read the file.
    #[error("failed to read file: {0}")]
    Read(String),
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Errors from the auth endpoint.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AuthError {
    /// The request never reached the service.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("auth request failed ({status}): {message}")]
    Remote { status: u16, message: String },
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Terminal outcomes of a failed submission.
///
/// `Validation` is raised before any remote call. `Storage` aborts the
/// whole submission with no record created. `Persistence` means the photo
/// was stored but the record insert failed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    /// A required field is missing; no network call was made.
    #[error("{0}")]
    Validation(String),

    /// Photo upload or URL resolution failed; retryable.
    #[error("photo upload failed: {0}")]
    Storage(String),

    /// Record insert failed; retryable, photo may be orphaned.
    #[error("saving your report failed: {0}")]
    Persistence(String),
}

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

// =============================================================================
// Lookup Errors
// =============================================================================

/// Outcomes of a failed tracking-code lookup.
///
/// `NotFound` is informational, not a failure: the code simply matches
/// no record.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LookupError {
    /// Blank code; no network call was made.
    #[error("{0}")]
    Validation(String),

    /// No record matches the code.
    #[error("no grievance found for this tracking code")]
    NotFound,

    /// The query itself failed.
    #[error("could not fetch grievance status: {0}")]
    Fetch(String),
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
