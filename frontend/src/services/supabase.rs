//! HTTP client for the Supabase-compatible backend.
//!
//! Implements the [`ObjectStore`] and [`RowStore`] contracts over the
//! storage and REST surfaces of a Supabase project:
//!
//! - `POST /storage/v1/object/{bucket}/{path}` - photo upload
//! - `GET  /storage/v1/object/public/{bucket}/{path}` - public address
//! - `POST /rest/v1/{table}` - record insert
//! - `GET  /rest/v1/{table}?code=eq.{code}` - record query

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::File;

use crate::config::{GRIEVANCE_BUCKET, GRIEVANCE_TABLE, SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::error::{StoreError, StoreResult};
use crate::types::{GrievanceRecord, NewGrievance};

use super::store::{validate_object_path, ObjectStore, RowStore};

/// Thin client over the backend's storage and REST endpoints.
///
/// Cheap to clone; one instance per in-flight operation is fine.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    bucket: String,
    table: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            bucket: GRIEVANCE_BUCKET.to_string(),
            table: GRIEVANCE_TABLE.to_string(),
        }
    }

    /// Client wired to the hardcoded development configuration.
    pub fn from_config() -> Self {
        Self::new(SUPABASE_URL, SUPABASE_ANON_KEY)
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    fn public_object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.anon_key)
    }
}

/// Pull a usable message out of a non-success response.
///
/// Supabase errors carry JSON bodies like `{"message": "..."}`; fall back
/// to the raw body text when the shape is anything else.
async fn remote_error(response: Response) -> StoreError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["message", "error", "msg"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or(body);
    StoreError::Remote { status, message }
}

#[async_trait(?Send)]
impl ObjectStore for SupabaseClient {
    type Blob = File;

    async fn put(&self, path: &str, blob: &File) -> StoreResult<()> {
        validate_object_path(path)?;

        let request = Request::post(&self.object_url(path))
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
            .body(blob.clone())
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(remote_error(response).await);
        }
        Ok(())
    }

    fn public_url(&self, path: &str) -> StoreResult<String> {
        validate_object_path(path)?;
        Ok(self.public_object_url(path))
    }

    async fn delete(&self, path: &str) -> StoreResult<()> {
        validate_object_path(path)?;

        let response = Request::delete(&self.object_url(path))
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(remote_error(response).await);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl RowStore for SupabaseClient {
    async fn insert(&self, record: &NewGrievance) -> StoreResult<GrievanceRecord> {
        let request = Request::post(&self.table_url())
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
            .header("Prefer", "return=representation")
            .json(record)
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(remote_error(response).await);
        }

        // PostgREST answers inserts with an array of the stored rows.
        let mut rows: Vec<GrievanceRecord> = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
        rows.pop()
            .ok_or_else(|| StoreError::InvalidResponse("insert returned no rows".into()))
    }

    async fn select_by_code(&self, code: &str) -> StoreResult<Vec<GrievanceRecord>> {
        let filter = format!("eq.{}", code);
        let response = Request::get(&self.table_url())
            .query([("select", "*"), ("code", filter.as_str())])
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(remote_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_follow_the_supabase_layout() {
        let client = SupabaseClient::new("http://localhost:54321", "key");

        assert_eq!(
            client.object_url("a1b2c3/pothole.png"),
            "http://localhost:54321/storage/v1/object/grievance-images/a1b2c3/pothole.png"
        );
        assert_eq!(
            client.public_object_url("a1b2c3/pothole.png"),
            "http://localhost:54321/storage/v1/object/public/grievance-images/a1b2c3/pothole.png"
        );
        assert_eq!(
            client.table_url(),
            "http://localhost:54321/rest/v1/grievances"
        );
    }

    #[test]
    fn test_public_url_rejects_malformed_paths() {
        let client = SupabaseClient::from_config();
        assert!(client.public_url("a1b2c3/pothole.png").is_ok());
        assert!(client.public_url("../escape.png").is_err());
    }
}
