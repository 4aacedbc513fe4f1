//! Remote storage contracts.
//!
//! The object store and row store are opaque remote services; these traits
//! are the only surface the rest of the app sees, so the remote dependency
//! stays swappable and mockable for tests.
//!
//! # Object path format
//!
//! Uploaded photos are namespaced by tracking code: `{code}/{filename}`.
//! Paths must not contain `..` or a leading `/`. Path generation is
//! centralized in [`object_path`] so every backend stays consistent.

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::types::{GrievanceRecord, NewGrievance};

/// Build the storage path for a grievance photo.
pub fn object_path(code: &str, file_name: &str) -> String {
    format!("{}/{}", code, file_name)
}

/// Reject malformed object paths before they reach the wire.
pub fn validate_object_path(path: &str) -> StoreResult<()> {
    if path.trim().is_empty() {
        return Err(StoreError::InvalidPath("empty path".into()));
    }
    if path.starts_with('/') {
        return Err(StoreError::InvalidPath(format!(
            "leading slash in {:?}",
            path
        )));
    }
    if path.split('/').any(|segment| segment == "..") {
        return Err(StoreError::InvalidPath(format!(
            "parent traversal in {:?}",
            path
        )));
    }
    Ok(())
}

/// Durable object storage for grievance photos.
#[async_trait(?Send)]
pub trait ObjectStore {
    /// The binary blob handle this store uploads. `web_sys::File` in the
    /// app; anything cheap in tests.
    type Blob;

    /// Persist a blob under `path`. Failure means nothing was stored.
    async fn put(&self, path: &str, blob: &Self::Blob) -> StoreResult<()>;

    /// Resolve the public address of an object at `path`.
    fn public_url(&self, path: &str) -> StoreResult<String>;

    /// Remove the object at `path`. Used only for compensating cleanup.
    async fn delete(&self, path: &str) -> StoreResult<()>;
}

/// Durable row storage for grievance records.
#[async_trait(?Send)]
pub trait RowStore {
    /// Insert a new record and return the stored row (with `created_at`
    /// assigned by the persistence layer).
    async fn insert(&self, record: &NewGrievance) -> StoreResult<GrievanceRecord>;

    /// Fetch every record whose `code` equals the input.
    async fn select_by_code(&self, code: &str) -> StoreResult<Vec<GrievanceRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_path_is_code_namespaced() {
        assert_eq!(object_path("a1b2c3", "pothole.png"), "a1b2c3/pothole.png");
    }

    #[test]
    fn test_validate_rejects_traversal_and_leading_slash() {
        assert!(validate_object_path("a1b2c3/pothole.png").is_ok());
        assert!(validate_object_path("/a1b2c3/pothole.png").is_err());
        assert!(validate_object_path("a1b2c3/../secret.png").is_err());
        assert!(validate_object_path("  ").is_err());
    }
}
