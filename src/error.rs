use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use journal_common::ErrorResponse;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid filename")]
    InvalidFileName,

    #[error("File not found")]
    FileNotFound,

    #[error("Ollama API error: {message}")]
    OllamaApi { status: u16, message: String },

    #[error("Could not connect to Ollama server. Please ensure Ollama is running.")]
    OllamaUnavailable,

    #[error("Unexpected response format from Ollama. Please check Ollama API response structure.")]
    OllamaFormat,

    #[error("Ollama model '{model}' not found or Ollama is not running. Please run `ollama pull {model}`. Details: {detail}")]
    ModelUnavailable { model: String, detail: String },

    #[error("Failed to enhance text due to an unexpected error: {0}")]
    Enhance(String),

    #[error("Failed to save memory: {0} 😔")]
    Save(String),

    #[error("Failed to fetch memories: {0} 💔")]
    Fetch(String),

    #[error("Failed to delete memories: {0} 😔")]
    Delete(String),

    #[error("Could not retrieve file: {0}")]
    FileRead(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;

impl JournalError {
    pub fn status(&self) -> StatusCode {
        match self {
            JournalError::BadRequest(_) | JournalError::InvalidFileName => StatusCode::BAD_REQUEST,
            JournalError::FileNotFound => StatusCode::NOT_FOUND,
            JournalError::OllamaApi { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{} -> {}", status, self);
        } else {
            warn!("{} -> {}", status, self);
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
