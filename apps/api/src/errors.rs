use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cache::CacheError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The three user-facing pipeline failures (empty content, blank JD, unknown
/// resume id) are distinct variants so the HTTP layer can map each one to a
/// specific response. Degraded LLM extraction is NOT an error — the extractor
/// and scorer absorb it and fall back to rule-based output.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No text could be extracted from the resume")]
    EmptyContent,

    #[error("Job description cannot be blank")]
    BlankJobDescription,

    #[error("Resume not found: {0}")]
    ResumeNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyContent => (
                StatusCode::BAD_REQUEST,
                "EMPTY_CONTENT",
                "No text could be extracted from the resume; please upload a valid PDF"
                    .to_string(),
            ),
            AppError::BlankJobDescription => (
                StatusCode::BAD_REQUEST,
                "BLANK_JOB_DESCRIPTION",
                "job_description cannot be blank".to_string(),
            ),
            AppError::ResumeNotFound(id) => (
                StatusCode::NOT_FOUND,
                "RESUME_NOT_FOUND",
                format!("No resume found for id '{id}'; please upload the resume again"),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PdfExtraction(msg) => {
                tracing::warn!("PDF extraction failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PDF_EXTRACTION_ERROR",
                    "The uploaded file could not be read as a PDF".to_string(),
                )
            }
            AppError::Cache(e) => {
                tracing::error!("Cache error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CACHE_ERROR",
                    "A cache error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
