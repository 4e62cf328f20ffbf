use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::evaluation::validator::ValidationError;
use crate::extractor::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Only PDF files are supported")]
    UnsupportedMediaType,

    #[error("Upload exceeds the request size limit")]
    PayloadTooLarge,

    #[error("Could not extract resume text: {0}")]
    ExtractionFailed(#[from] ExtractError),

    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Completion service returned no content")]
    EmptyResponse,

    #[error("Model output is not valid JSON: {reason}")]
    MalformedJson { raw: String, reason: String },

    #[error("Model output violates schema at `{path}`: {detail}")]
    SchemaViolation { path: String, detail: String },
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => AppError::EmptyResponse,
            other => AppError::ServiceUnavailable(other.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MalformedJson { raw, reason } => AppError::MalformedJson { raw, reason },
            ValidationError::SchemaViolation { path, kind } => AppError::SchemaViolation {
                path,
                detail: kind.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                "Only PDF files are supported".to_string(),
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                "The upload exceeds the request size limit".to_string(),
            ),
            AppError::ExtractionFailed(e) => {
                warn!("Extraction failed: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "EXTRACTION_FAILED",
                    "Could not extract resume text".to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                error!("Completion service error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_UNAVAILABLE",
                    "The AI evaluation service is unavailable".to_string(),
                )
            }
            AppError::EmptyResponse => {
                error!("Completion service returned empty content");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_RESPONSE",
                    "The AI evaluation service returned no content".to_string(),
                )
            }
            AppError::MalformedJson { raw, reason } => {
                // raw text is only logged by the pipeline when LOG_MODEL_OUTPUT is on
                error!(raw_len = raw.len(), "Model returned malformed JSON: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_MODEL_OUTPUT",
                    "The AI evaluation service returned an unreadable result".to_string(),
                )
            }
            AppError::SchemaViolation { path, detail } => {
                error!(field = %path, "Model output violates schema: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VIOLATION",
                    "The AI evaluation service returned an incomplete result".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
