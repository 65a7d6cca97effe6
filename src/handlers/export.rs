use axum::{extract::State, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use csv::{QuoteStyle, WriterBuilder};

use crate::dto::CsvExportResponse;
use crate::error::{AppError, AppResult};
use crate::models::mood_entry::MoodEntry;
use crate::AppState;

const CSV_HEADER: &str = "Date,Mood,Emoji,Notes,Timestamp";

/// GET /api/moods/export/csv — the full journal ordered by date, as
/// `{content, filename}` for the client to save.
pub async fn export_moods_csv(
    State(state): State<AppState>,
) -> AppResult<Json<CsvExportResponse>> {
    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        ORDER BY date ASC
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    let content = render_csv(&entries)?;

    Ok(Json(CsvExportResponse {
        content,
        filename: export_filename(Utc::now()),
    }))
}

/// Every data field is quoted; embedded quotes are doubled. An empty journal
/// yields a header-only document.
fn render_csv(entries: &[MoodEntry]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    for entry in entries {
        let mood = entry.mood.to_string();
        let stamp = entry
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Micros, true);
        wtr.write_record([
            entry.date.as_str(),
            mood.as_str(),
            entry.mood_emoji.as_str(),
            entry.notes.as_str(),
            stamp.as_str(),
        ])
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV write error: {}", e)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
    let rows = String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))?;

    Ok(format!("{CSV_HEADER}\n{rows}"))
}

fn export_filename(now: DateTime<Utc>) -> String {
    format!("mood_data_{}.csv", now.format("%Y%m%d"))
}
