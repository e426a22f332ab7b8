//! Route handlers for the time entry API.
//!
//! Handlers hold the store lock for exactly one store call and never across
//! an `.await`. Rendering an export happens after the lock is released.

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::libs::entry::{normalize, NewEntry, Period, TimeEntry};
use crate::libs::export::{ExportFormat, Exporter};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Time Tracker API", "status": "running" }))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let healthy = state.entries.lock().is_healthy();

    Json(json!({
        "status": "ok",
        "message": "Server is running",
        "db": if healthy { "connected" } else { "disconnected" },
    }))
}

pub async fn list_entries(State(state): State<AppState>) -> ApiResult<Json<Vec<TimeEntry>>> {
    let entries = state.entries.lock().fetch_all()?;
    Ok(Json(entries))
}

pub async fn month_entries(
    State(state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> ApiResult<Json<Vec<TimeEntry>>> {
    let period = parse_period(&year, &month)?;
    let entries = state.entries.lock().fetch_period(&period)?;
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(raw) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let fields = normalize(&raw)?;

    let entry = state.entries.lock().insert(&fields)?;
    tracing::info!(id = entry.id, date = %entry.date, hours = entry.total_hours, "entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> ApiResult<Json<TimeEntry>> {
    let id = parse_id(&id)?;
    let Json(raw) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let fields = normalize(&raw)?;

    let entry = state.entries.lock().update(id, &fields)?.ok_or(ApiError::NotFound)?;
    tracing::info!(id = entry.id, date = %entry.date, hours = entry.total_hours, "entry updated");

    Ok(Json(entry))
}

pub async fn delete_entry(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;

    if !state.entries.lock().delete(id)? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "entry deleted");

    Ok(Json(json!({ "message": "Entry deleted" })))
}

pub async fn export_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let period = parse_period(&year, &month)?;
    let entries = state.entries.lock().fetch_period(&period)?;

    let exporter = Exporter::new(ExportFormat::Excel);
    let bytes = exporter.render(&entries, &period.to_string())?;
    let disposition = format!("attachment; filename=\"{}\"", exporter.default_file_name(&period));

    Ok((
        [
            (header::CONTENT_TYPE, ExportFormat::Excel.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

fn parse_period(year: &str, month: &str) -> ApiResult<Period> {
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid year: '{}'", year)))?;

    Ok(Period::parse(year, month)?)
}

fn parse_id(id: &str) -> ApiResult<i64> {
    id.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid entry id: '{}'", id)))
}
