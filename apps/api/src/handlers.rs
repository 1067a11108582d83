//! Axum route handlers for the resume and match endpoints.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::pdf;
use crate::models::matching::MatchResult;
use crate::models::resume::ResumeRecord;
use crate::pipeline;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume: ResumeRecord,
}

#[derive(Debug, Deserialize)]
pub struct MatchJobRequest {
    pub resume_id: String,
    pub job_description: String,
}

/// POST /api/v1/resumes
///
/// Multipart PDF upload → text extraction → key-info extraction → cached
/// ResumeRecord. Re-uploading the same file returns the cached record.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut file_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        if field.content_type() != Some("application/pdf") {
            return Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            ));
        }
        file_bytes = Some(
            field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?,
        );
    }

    let bytes = file_bytes
        .ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))?;

    info!("Received resume upload ({} bytes)", bytes.len());

    // PDF parsing is CPU-bound; keep it off the async runtime.
    let raw_text = tokio::task::spawn_blocking(move || pdf::pdf_to_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))??;
    let cleaned_text = pdf::clean_text(&raw_text);

    let resume =
        pipeline::ingest_text(&state.cache, state.extractor.as_ref(), raw_text, cleaned_text)
            .await?;

    Ok(Json(UploadResumeResponse { resume }))
}

/// POST /api/v1/match
///
/// Scores a previously uploaded resume against a job description.
pub async fn handle_match_job(
    State(state): State<AppState>,
    Json(request): Json<MatchJobRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result = pipeline::match_job(
        &state.cache,
        state.scorer.as_ref(),
        &request.resume_id,
        &request.job_description,
    )
    .await?;

    Ok(Json(result))
}
