use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::dto::{CreateMoodEntryRequest, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::models::mood_entry::MoodEntry;
use crate::AppState;

pub async fn create_mood_entry(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateMoodEntryRequest>, AppError>,
) -> AppResult<Json<MoodEntry>> {
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (id, mood, mood_emoji, notes, date, timestamp)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(body.mood)
    .bind(&body.mood_emoji)
    .bind(body.notes.as_deref().unwrap_or(""))
    .bind(&body.date)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn list_mood_entries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        ORDER BY timestamp DESC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

/// Exact string match on `date`. When several entries share the date, which
/// one is returned is unspecified.
pub async fn get_mood_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<Option<MoodEntry>>> {
    let entry = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM mood_entries WHERE date = $1 LIMIT 1",
    )
    .bind(&date)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn update_mood_entry(
    State(state): State<AppState>,
    Path(mood_id): Path<Uuid>,
    WithRejection(Json(body), _): WithRejection<Json<CreateMoodEntryRequest>, AppError>,
) -> AppResult<Json<MoodEntry>> {
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        UPDATE mood_entries SET
            mood = $2,
            mood_emoji = $3,
            notes = $4,
            date = $5,
            timestamp = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(mood_id)
    .bind(body.mood)
    .bind(&body.mood_emoji)
    .bind(body.notes.as_deref().unwrap_or(""))
    .bind(&body.date)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Mood entry not found".into()))?;

    Ok(Json(entry))
}

pub async fn delete_mood_entry(
    State(state): State<AppState>,
    Path(mood_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let result = sqlx::query("DELETE FROM mood_entries WHERE id = $1")
        .bind(mood_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Mood entry not found".into()));
    }

    Ok(Json(MessageResponse {
        message: "Mood entry deleted successfully".into(),
    }))
}
