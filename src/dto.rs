//! Request/response DTOs for the mood API.
//!
//! Conventions:
//! - `*Request`  → deserialized from the client JSON body
//! - `*Response` → serialized to client JSON
//! - Validation is structural only: serde enforces presence and shape,
//!   nothing range-checks `mood` or parses `date`

use serde::{Deserialize, Serialize};

/// Body for POST /api/moods and PUT /api/moods/{mood_id}.
///
/// An update replaces every mutable field with this payload; there is no
/// partial-update form.
#[derive(Debug, Deserialize)]
pub struct CreateMoodEntryRequest {
    pub mood: i32,
    pub mood_emoji: String,
    /// Absent or null collapses to the empty string on write.
    pub notes: Option<String>,
    pub date: String,
}

/// Standard success message response (root banner, delete confirmation)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/moods/export/csv
#[derive(Debug, Serialize)]
pub struct CsvExportResponse {
    pub content: String,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_missing_notes() {
        let body: CreateMoodEntryRequest =
            serde_json::from_str(r#"{"mood":4,"mood_emoji":"😊","date":"2025-03-01"}"#).unwrap();
        assert_eq!(body.mood, 4);
        assert!(body.notes.is_none());
    }

    #[test]
    fn create_request_accepts_null_notes() {
        let body: CreateMoodEntryRequest = serde_json::from_str(
            r#"{"mood":2,"mood_emoji":"😞","notes":null,"date":"2025-03-01"}"#,
        )
        .unwrap();
        assert!(body.notes.is_none());
    }

    #[test]
    fn create_request_requires_mood() {
        let result = serde_json::from_str::<CreateMoodEntryRequest>(
            r#"{"mood_emoji":"🙂","date":"2025-03-01"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_request_keeps_date_as_raw_string() {
        // No calendar validation happens at the boundary.
        let body: CreateMoodEntryRequest = serde_json::from_str(
            r#"{"mood":3,"mood_emoji":"😐","notes":"","date":"2025-13-99"}"#,
        )
        .unwrap();
        assert_eq!(body.date, "2025-13-99");
    }
}
