//! Tracking-code lookup.
//!
//! Fetches the grievance matching a citizen-entered code. "Not found" and
//! "query failed" are distinct outcomes with distinct user-facing
//! messages.

use crate::error::{LookupError, LookupResult};
use crate::types::GrievanceRecord;

use super::store::RowStore;

/// Find the grievance for a tracking code.
///
/// Input is trimmed; a blank code short-circuits to a validation error
/// without any network call.
pub async fn find_grievance<R: RowStore>(rows: &R, code: &str) -> LookupResult<GrievanceRecord> {
    let code = code.trim();
    if code.is_empty() {
        return Err(LookupError::Validation(
            "please enter a tracking code".into(),
        ));
    }

    let mut matches = rows
        .select_by_code(code)
        .await
        .map_err(|e| LookupError::Fetch(e.to_string()))?;

    if matches.is_empty() {
        return Err(LookupError::NotFound);
    }
    if matches.len() > 1 {
        log::warn!(
            "tracking code {} matches {} records, showing the first",
            code,
            matches.len()
        );
    }
    Ok(matches.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::types::{GrievanceStatus, NewGrievance};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FixtureRows {
        rows: Vec<GrievanceRecord>,
        queries: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FixtureRows {
        fn with(rows: Vec<GrievanceRecord>) -> Self {
            Self {
                rows,
                queries: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    #[async_trait(?Send)]
    impl RowStore for FixtureRows {
        async fn insert(&self, _record: &NewGrievance) -> StoreResult<GrievanceRecord> {
            unreachable!("lookup never inserts");
        }

        async fn select_by_code(&self, code: &str) -> StoreResult<Vec<GrievanceRecord>> {
            if self.fail {
                return Err(StoreError::Network("connection refused".into()));
            }
            self.queries.borrow_mut().push(code.to_string());
            Ok(self
                .rows
                .iter()
                .filter(|r| r.code == code)
                .cloned()
                .collect())
        }
    }

    fn resolved_fixture() -> GrievanceRecord {
        GrievanceRecord {
            code: "123456".into(),
            image_url: "http://store.local/public/123456/pothole.png".into(),
            description: "Streetlight out".into(),
            location: "Elm Ave".into(),
            status: GrievanceStatus::Resolved,
            created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        }
    }

    #[test]
    fn test_blank_code_short_circuits_without_query() {
        let rows = FixtureRows::with(vec![resolved_fixture()]);

        let err = block_on(find_grievance(&rows, "   ")).unwrap_err();

        assert!(matches!(err, LookupError::Validation(_)));
        assert!(rows.queries.borrow().is_empty());
    }

    #[test]
    fn test_code_is_trimmed_before_query() {
        let rows = FixtureRows::with(vec![resolved_fixture()]);

        let record = block_on(find_grievance(&rows, "  123456  ")).unwrap();

        assert_eq!(record.code, "123456");
        assert_eq!(rows.queries.borrow()[0], "123456");
    }

    #[test]
    fn test_known_code_reports_resolved_status() {
        let rows = FixtureRows::with(vec![resolved_fixture()]);

        let record = block_on(find_grievance(&rows, "123456")).unwrap();

        assert_eq!(record.status, GrievanceStatus::Resolved);
        assert_eq!(
            record.status.detail(),
            "Your issue has been successfully resolved."
        );
    }

    #[test]
    fn test_unknown_code_is_not_found_not_a_failure() {
        let rows = FixtureRows::with(vec![resolved_fixture()]);

        let err = block_on(find_grievance(&rows, "999999")).unwrap_err();

        assert_eq!(err, LookupError::NotFound);
    }

    #[test]
    fn test_query_error_is_reported_separately() {
        let mut rows = FixtureRows::with(vec![]);
        rows.fail = true;

        let err = block_on(find_grievance(&rows, "123456")).unwrap_err();

        assert!(matches!(err, LookupError::Fetch(_)));
    }

    #[test]
    fn test_repeat_lookup_returns_equivalent_record() {
        let rows = FixtureRows::with(vec![resolved_fixture()]);

        let first = block_on(find_grievance(&rows, "123456")).unwrap();
        let second = block_on(find_grievance(&rows, "123456")).unwrap();

        assert_eq!(first, second);
    }
}
