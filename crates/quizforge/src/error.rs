//! Error types for the quiz service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Quiz service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// File parsing error
    #[error("Failed to parse file '{filename}': {message}")]
    FileParse { filename: String, message: String },

    /// Unsupported file type
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Wikipedia retrieval error
    #[error("Wikipedia error: {0}")]
    Wikipedia(String),

    /// LLM error
    #[error("LLM error: {0}")]
    Llm(String),

    /// The model's structured payload did not decode as a quiz
    #[error("Quiz decoding failed: {0}")]
    QuizDecode(String),

    /// Source not found in the registry
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error
    pub fn file_parse(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileParse {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a quiz decode error
    pub fn quiz_decode(message: impl Into<String>) -> Self {
        Self::QuizDecode(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            Error::Config(msg) => (StatusCode::BAD_REQUEST, "config_error", msg.clone()),
            Error::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            Error::FileParse { filename, message } => (
                StatusCode::BAD_REQUEST,
                "parse_error",
                format!("Failed to parse '{}': {}", filename, message),
            ),
            Error::UnsupportedFileType(ext) => (
                StatusCode::BAD_REQUEST,
                "unsupported_type",
                format!("Unsupported file type: {}", ext),
            ),
            Error::Wikipedia(msg) => (StatusCode::BAD_GATEWAY, "wikipedia_error", msg.clone()),
            Error::Llm(msg) => (StatusCode::SERVICE_UNAVAILABLE, "llm_error", msg.clone()),
            Error::QuizDecode(msg) => (StatusCode::BAD_GATEWAY, "quiz_decode_error", msg.clone()),
            Error::SourceNotFound(label) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Source not found: {}", label),
            ),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                err.to_string(),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, "json_error", err.to_string()),
            Error::Http(err) => (StatusCode::BAD_GATEWAY, "http_error", err.to_string()),
            Error::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
