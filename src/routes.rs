//! APIハンドラー

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use journal_common::{
    EnhanceRequest, EnhanceResponse, JournalEntry, MessageResponse, SaveEntryRequest,
    SaveEntryResponse,
};
use tracing::{info, warn};

use crate::error::{JournalError, Result};
use crate::memory_file;
use crate::state::AppState;

pub const SAVE_SUCCESS_MESSAGE: &str = "Memory saved successfully! ✨";
pub const SAVE_WITHOUT_FILE_NOTE: &str = " (Note: Local text file could not be saved. 😟)";
pub const DELETE_ALL_MESSAGE: &str = "All memories have been deleted. 🗑️";

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

fn parse_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| JournalError::BadRequest(format!("Malformed request body: {}", e.body_text())))
}

/// POST /enhance
pub async fn enhance_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>> {
    let request = parse_body(payload)?;
    let journal_text = request.journal_text;

    if journal_text.trim().is_empty() {
        warn!("Enhance request received without journal text.");
        return Err(JournalError::BadRequest("No journal text provided".into()));
    }

    info!("Received journal text for enhancement: {}...", preview(&journal_text));
    let enhanced_text = state.ollama.enhance(&journal_text).await?;
    info!("Successfully enhanced text: {}...", preview(&enhanced_text));

    Ok(Json(EnhanceResponse { enhanced_text }))
}

/// POST /save_entry
pub async fn save_entry_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SaveEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveEntryResponse>)> {
    let request = parse_body(payload)?;

    if request.title.trim().is_empty() || request.original_text.trim().is_empty() {
        warn!("Save entry request missing title or original text.");
        return Err(JournalError::BadRequest("Title and original text are required".into()));
    }

    let saved = {
        let mut store = state.store.lock().await;
        store
            .save(request, Local::now())
            .map_err(|e| JournalError::Save(e.to_string()))?
    };
    info!("Entry saved with ID: {}", saved.entry.id);

    let mut message = SAVE_SUCCESS_MESSAGE.to_string();
    if !saved.file_saved {
        message.push_str(SAVE_WITHOUT_FILE_NOTE);
    }

    Ok((
        StatusCode::CREATED,
        Json(SaveEntryResponse {
            message,
            entry: Some(saved.entry),
        }),
    ))
}

/// GET /get_entries
pub async fn get_entries_handler(State(state): State<Arc<AppState>>) -> Json<Vec<JournalEntry>> {
    let entries = state.store.lock().await.list();
    info!("Fetched {} entries.", entries.len());
    Json(entries)
}

/// DELETE /delete_all_entries
pub async fn delete_all_entries_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>> {
    let removed = state
        .store
        .lock()
        .await
        .clear()
        .map_err(|e| JournalError::Delete(e.to_string()))?;
    info!("Deleted {} entries.", removed);

    Ok(Json(MessageResponse {
        message: DELETE_ALL_MESSAGE.to_string(),
    }))
}

/// GET /get_memory_file/{file_name}
pub async fn memory_file_handler(
    State(state): State<Arc<AppState>>,
    Path(file_name): Path<String>,
) -> Result<Response> {
    let files_dir = state.store.lock().await.files_dir();
    let path = memory_file::resolve(&files_dir, &file_name)?;

    let content = tokio::fs::read(&path)
        .await
        .map_err(|e| JournalError::FileRead(e.to_string()))?;
    info!("Serving file: {}", file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        content,
    )
        .into_response())
}
