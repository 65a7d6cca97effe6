use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single journal entry. `date` stays a raw `YYYY-MM-DD` string: lookups
/// match it exactly and it is never parsed, so an entry for "2025-02-30"
/// is stored as-is. Several entries may share one date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    /// 1-5 scale by convention; the boundary does not enforce the range.
    pub mood: i32,
    pub mood_emoji: String,
    pub notes: String,
    pub date: String,
    pub timestamp: DateTime<Utc>,
}
