//! Application configuration.
//!
//! Centralized configuration for the GrievanceHub frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Base URL of the Supabase-compatible backend.
///
/// Storage, records and auth all live under this origin.
pub const SUPABASE_URL: &str = "http://localhost:54321";

/// Anonymous API key sent with every request.
///
/// Replace with the project key before deploying.
pub const SUPABASE_ANON_KEY: &str = "grievancehub-dev-anon-key";

/// Storage bucket holding grievance photos.
pub const GRIEVANCE_BUCKET: &str = "grievance-images";

/// Row-store table holding grievance records.
pub const GRIEVANCE_TABLE: &str = "grievances";

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "GrievanceHub";

/// Length of the public tracking code handed to citizens.
///
/// Codes are a truncated UUID; shorter codes are easier to write down
/// but collide more often. Tune this before raising traffic.
pub const TRACKING_CODE_LEN: usize = 6;

/// Maximum photo size accepted for upload (in bytes).
///
/// 10 MB limit.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Whether a failed record insert triggers deletion of the photo that
/// was already uploaded for it.
pub const DELETE_ORPHANED_UPLOADS: bool = false;

/// Local-storage key under which the auth session token persists.
pub const SESSION_STORAGE_KEY: &str = "grievancehub.session";
