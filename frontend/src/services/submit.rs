//! Submission orchestration.
//!
//! Sequences a grievance submission against the remote stores:
//! tracking code → photo upload → public URL → record insert. Strictly
//! sequential, no retry; the caller re-invokes manually on failure.
//!
//! A record is only ever inserted after its photo is durably stored, so a
//! storage failure aborts the whole submission with no record created. The
//! reverse hole (record insert fails after the photo stored) leaves an
//! orphaned object; compensating deletion is a policy choice, off by
//! default.

use crate::config::{DELETE_ORPHANED_UPLOADS, TRACKING_CODE_LEN};
use crate::error::{SubmitError, SubmitResult};
use crate::state::SubmissionDraft;
use crate::types::{GrievanceRecord, GrievanceStatus, NewGrievance};

use super::store::{object_path, ObjectStore, RowStore};
use super::tracking::generate_tracking_code;

/// Tunable submission behavior.
#[derive(Clone, Debug)]
pub struct SubmitPolicy {
    /// Tracking code length; shorter codes collide more often.
    pub code_len: usize,
    /// Attempt a best-effort delete of the uploaded photo when the record
    /// insert fails afterwards.
    pub delete_orphaned_uploads: bool,
}

impl Default for SubmitPolicy {
    fn default() -> Self {
        Self {
            code_len: TRACKING_CODE_LEN,
            delete_orphaned_uploads: DELETE_ORPHANED_UPLOADS,
        }
    }
}

/// Submit a completed draft.
///
/// Fails fast with [`SubmitError::Validation`] before any remote call
/// unless the photo, description and location are all present.
pub async fn submit_grievance<S, R>(
    store: &S,
    rows: &R,
    draft: &SubmissionDraft<S::Blob>,
    policy: &SubmitPolicy,
) -> SubmitResult<GrievanceRecord>
where
    S: ObjectStore,
    R: RowStore,
{
    let file = draft
        .file
        .as_ref()
        .ok_or_else(|| SubmitError::Validation("please select a photo".into()))?;
    let file_name = draft
        .file_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| SubmitError::Validation("please select a photo".into()))?;
    if draft.description.trim().is_empty() {
        return Err(SubmitError::Validation("please describe the issue".into()));
    }
    if draft.location.trim().is_empty() {
        return Err(SubmitError::Validation(
            "please tell us where the issue is".into(),
        ));
    }

    // The code exists before anything touches the network: the storage
    // path is derived from it.
    let code = generate_tracking_code(policy.code_len);
    let path = object_path(&code, file_name);

    store
        .put(&path, file)
        .await
        .map_err(|e| SubmitError::Storage(e.to_string()))?;

    let image_url = store
        .public_url(&path)
        .map_err(|e| SubmitError::Storage(e.to_string()))?;

    let record = NewGrievance {
        code,
        image_url,
        description: draft.description.trim().to_string(),
        location: draft.location.trim().to_string(),
        status: GrievanceStatus::UnderReview,
    };

    match rows.insert(&record).await {
        Ok(stored) => Ok(stored),
        Err(e) => {
            if policy.delete_orphaned_uploads {
                if let Err(cleanup) = store.delete(&path).await {
                    log::warn!("orphan cleanup failed for {}: {}", path, cleanup);
                }
            } else {
                log::warn!("record insert failed, photo left orphaned at {}", path);
            }
            Err(SubmitError::Persistence(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use async_trait::async_trait;
    use chrono::Utc;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingStore {
        puts: RefCell<Vec<String>>,
        url_calls: RefCell<Vec<String>>,
        deletes: RefCell<Vec<String>>,
        fail_put: bool,
        fail_url: bool,
    }

    #[async_trait(?Send)]
    impl ObjectStore for RecordingStore {
        type Blob = String;

        async fn put(&self, path: &str, _blob: &String) -> StoreResult<()> {
            if self.fail_put {
                return Err(StoreError::Remote {
                    status: 503,
                    message: "storage unavailable".into(),
                });
            }
            self.puts.borrow_mut().push(path.to_string());
            Ok(())
        }

        fn public_url(&self, path: &str) -> StoreResult<String> {
            if self.fail_url {
                return Err(StoreError::InvalidPath(path.into()));
            }
            self.url_calls.borrow_mut().push(path.to_string());
            Ok(format!("http://store.local/public/{}", path))
        }

        async fn delete(&self, path: &str) -> StoreResult<()> {
            self.deletes.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingRows {
        inserts: RefCell<Vec<NewGrievance>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl RowStore for RecordingRows {
        async fn insert(&self, record: &NewGrievance) -> StoreResult<GrievanceRecord> {
            if self.fail {
                return Err(StoreError::Remote {
                    status: 500,
                    message: "insert failed".into(),
                });
            }
            self.inserts.borrow_mut().push(record.clone());
            Ok(GrievanceRecord {
                code: record.code.clone(),
                image_url: record.image_url.clone(),
                description: record.description.clone(),
                location: record.location.clone(),
                status: record.status,
                created_at: Utc::now(),
            })
        }

        async fn select_by_code(&self, _code: &str) -> StoreResult<Vec<GrievanceRecord>> {
            unreachable!("submission never queries");
        }
    }

    fn ready_draft() -> SubmissionDraft<String> {
        let mut draft = SubmissionDraft::new();
        draft.select_file("photo-bytes".into(), "photo.png".into());
        draft.set_description("Pothole on Main St".into());
        draft.set_location("Main St & 5th".into());
        draft
    }

    #[test]
    fn test_happy_path_makes_one_call_per_step() {
        let store = RecordingStore::default();
        let rows = RecordingRows::default();
        let draft = ready_draft();

        let record = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap();

        assert_eq!(store.puts.borrow().len(), 1);
        assert_eq!(store.url_calls.borrow().len(), 1);
        assert_eq!(rows.inserts.borrow().len(), 1);
        assert_eq!(record.status, GrievanceStatus::UnderReview);
        assert_eq!(record.code.len(), 6);
        assert_eq!(record.description, "Pothole on Main St");
    }

    #[test]
    fn test_code_exists_before_the_storage_call() {
        let store = RecordingStore::default();
        let rows = RecordingRows::default();
        let draft = ready_draft();

        let record = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap();

        let path = store.puts.borrow()[0].clone();
        assert_eq!(path, format!("{}/photo.png", record.code));
    }

    #[test]
    fn test_missing_file_fails_before_any_remote_call() {
        let store = RecordingStore::default();
        let rows = RecordingRows::default();
        let mut draft = ready_draft();
        draft.clear_file();

        let err = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap_err();

        assert!(matches!(err, SubmitError::Validation(_)));
        assert!(store.puts.borrow().is_empty());
        assert!(store.url_calls.borrow().is_empty());
        assert!(rows.inserts.borrow().is_empty());
    }

    #[test]
    fn test_blank_details_fail_validation() {
        let store = RecordingStore::default();
        let rows = RecordingRows::default();
        let mut draft = ready_draft();
        draft.set_description("   ".into());

        let err = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap_err();

        assert!(matches!(err, SubmitError::Validation(_)));
        assert!(store.puts.borrow().is_empty());
    }

    #[test]
    fn test_storage_failure_inserts_no_record() {
        let store = RecordingStore {
            fail_put: true,
            ..Default::default()
        };
        let rows = RecordingRows::default();
        let draft = ready_draft();

        let err = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap_err();

        assert!(matches!(err, SubmitError::Storage(_)));
        assert!(rows.inserts.borrow().is_empty());
    }

    #[test]
    fn test_url_resolution_failure_is_fatal() {
        let store = RecordingStore {
            fail_url: true,
            ..Default::default()
        };
        let rows = RecordingRows::default();
        let draft = ready_draft();

        let err = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap_err();

        assert!(matches!(err, SubmitError::Storage(_)));
        assert!(rows.inserts.borrow().is_empty());
    }

    #[test]
    fn test_insert_failure_leaves_orphan_by_default() {
        let store = RecordingStore::default();
        let rows = RecordingRows {
            fail: true,
            ..Default::default()
        };
        let draft = ready_draft();

        let err = block_on(submit_grievance(
            &store,
            &rows,
            &draft,
            &SubmitPolicy::default(),
        ))
        .unwrap_err();

        assert!(matches!(err, SubmitError::Persistence(_)));
        assert_eq!(store.puts.borrow().len(), 1);
        assert!(store.deletes.borrow().is_empty());
    }

    #[test]
    fn test_insert_failure_cleans_up_when_configured() {
        let store = RecordingStore::default();
        let rows = RecordingRows {
            fail: true,
            ..Default::default()
        };
        let draft = ready_draft();
        let policy = SubmitPolicy {
            delete_orphaned_uploads: true,
            ..Default::default()
        };

        let err = block_on(submit_grievance(&store, &rows, &draft, &policy)).unwrap_err();

        assert!(matches!(err, SubmitError::Persistence(_)));
        assert_eq!(store.deletes.borrow().len(), 1);
        assert_eq!(store.deletes.borrow()[0], store.puts.borrow()[0]);
    }

    #[test]
    fn test_code_length_follows_policy() {
        let store = RecordingStore::default();
        let rows = RecordingRows::default();
        let draft = ready_draft();
        let policy = SubmitPolicy {
            code_len: 10,
            ..Default::default()
        };

        let record = block_on(submit_grievance(&store, &rows, &draft, &policy)).unwrap();
        assert_eq!(record.code.len(), 10);
    }
}
