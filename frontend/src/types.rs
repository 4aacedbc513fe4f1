//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Record Types** - durable grievance rows and their wire mapping
//! - **Session Types** - authenticated-user info
//! - **Status** - the back-office lifecycle of a grievance

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Status
// =============================================================================

/// Lifecycle status of a grievance.
///
/// Set to [`GrievanceStatus::UnderReview`] at creation and mutated only
/// by the municipal back office, never by this client. The serialized
/// form matches the human-readable strings stored in the `status` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrievanceStatus {
    /// Just filed, not yet looked at.
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Assigned and being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Fixed and closed.
    Resolved,
    /// Reviewed but not actionable.
    Rejected,
}

impl GrievanceStatus {
    /// Get CSS class for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            GrievanceStatus::UnderReview => "status-under-review",
            GrievanceStatus::InProgress => "status-in-progress",
            GrievanceStatus::Resolved => "status-resolved",
            GrievanceStatus::Rejected => "status-rejected",
        }
    }

    /// Citizen-facing detail line shown under the status on the track screen.
    pub fn detail(&self) -> &'static str {
        match self {
            GrievanceStatus::UnderReview => {
                "Your report has been received and is awaiting review."
            }
            GrievanceStatus::InProgress => {
                "Your issue is currently being reviewed by our team."
            }
            GrievanceStatus::Resolved => "Your issue has been successfully resolved.",
            GrievanceStatus::Rejected => {
                "Your report was reviewed but could not be taken forward."
            }
        }
    }
}

impl fmt::Display for GrievanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GrievanceStatus::UnderReview => "Under Review",
            GrievanceStatus::InProgress => "In Progress",
            GrievanceStatus::Resolved => "Resolved",
            GrievanceStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// Record Types
// =============================================================================

/// A durable grievance row as returned by the row store.
///
/// Immutable from the client's perspective once created, aside from the
/// back-office `status` mutation. Unknown columns in the response are
/// ignored during deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrievanceRecord {
    /// Public tracking code, generated client-side before first persistence.
    pub code: String,
    /// Public address of the uploaded photo.
    pub image_url: String,
    /// Complaint text, copied verbatim from the draft.
    pub description: String,
    /// Where the issue is, copied verbatim from the draft.
    pub location: String,
    /// Current lifecycle status.
    pub status: GrievanceStatus,
    /// Assigned by the persistence layer on insert.
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new grievance.
///
/// Deliberately has no `created_at`: the persistence layer assigns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewGrievance {
    pub code: String,
    pub image_url: String,
    pub description: String,
    pub location: String,
    pub status: GrievanceStatus,
}

// =============================================================================
// Session Types
// =============================================================================

/// Authenticated-user info exposed to the navigation chrome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Email shown in the header, when the provider discloses it.
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_column_strings() {
        assert_eq!(
            serde_json::to_string(&GrievanceStatus::UnderReview).unwrap(),
            "\"Under Review\""
        );
        assert_eq!(
            serde_json::to_string(&GrievanceStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&GrievanceStatus::Resolved).unwrap(),
            "\"Resolved\""
        );
    }

    #[test]
    fn test_record_deserializes_from_row_store_response() {
        // Extra columns (id) must be tolerated.
        let json = r#"{
            "id": 42,
            "code": "a1b2c3",
            "image_url": "http://localhost:54321/storage/v1/object/public/grievance-images/a1b2c3/pothole.png",
            "description": "Pothole on Main St",
            "location": "Main St & 5th",
            "status": "Under Review",
            "created_at": "2025-03-14T09:26:53+00:00"
        }"#;

        let record: GrievanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.code, "a1b2c3");
        assert_eq!(record.status, GrievanceStatus::UnderReview);
        assert_eq!(record.created_at.timezone(), Utc);
    }

    #[test]
    fn test_insert_payload_has_no_created_at() {
        let payload = NewGrievance {
            code: "a1b2c3".into(),
            image_url: "http://example/img.png".into(),
            description: "desc".into(),
            location: "loc".into(),
            status: GrievanceStatus::UnderReview,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("created_at"));
        assert!(json.contains("\"Under Review\""));
    }
}
