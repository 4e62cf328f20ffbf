//! Axum route handlers for the evaluation API.
//!
//! Every handler reads the multipart form, rejects non-PDF uploads before any
//! extraction or completion work, extracts text on the blocking pool, then runs
//! its flavor's pipeline.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::models::{AtsAnalysis, BasicAnalysis, JdMatchAnalysis, RewriteResponse};
use crate::evaluation::pipeline::{self, PipelineOptions};
use crate::extractor::{is_pdf_file_name, ExtractError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Multipart form
// ────────────────────────────────────────────────────────────────────────────

/// The fields any evaluation endpoint may receive. Unknown fields are skipped.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file_name: Option<String>,
    pub file: Option<Bytes>,
    pub target_role: Option<String>,
    pub job_description: Option<String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("file") => {
                    form.file_name = field.file_name().map(str::to_string);
                    form.file = Some(field.bytes().await.map_err(bad_multipart)?);
                }
                Some("target_role") => {
                    form.target_role = Some(field.text().await.map_err(bad_multipart)?);
                }
                Some("job_description") => {
                    form.job_description = Some(field.text().await.map_err(bad_multipart)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// The uploaded PDF. Missing part → 400; wrong extension → 415.
    fn pdf(&self) -> Result<Bytes, AppError> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| AppError::Validation("file is required".to_string()))?;
        match self.file_name.as_deref() {
            Some(name) if is_pdf_file_name(name) => Ok(file),
            _ => Err(AppError::UnsupportedMediaType),
        }
    }

    /// Blank values count as absent.
    fn target_role(&self) -> Option<&str> {
        non_blank(self.target_role.as_deref())
    }

    fn required_job_description(&self) -> Result<&str, AppError> {
        non_blank(self.job_description.as_deref())
            .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn bad_multipart(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge;
    }
    AppError::Validation(format!("invalid multipart body: {}", err.body_text()))
}

/// Runs the document extractor off the async runtime.
async fn extract_resume_text(state: &AppState, pdf: Bytes) -> Result<String, AppError> {
    let extractor = state.extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&pdf))
        .await
        .map_err(|e| ExtractError::Unreadable(format!("extractor aborted: {e}")))??;
    info!(chars = text.len(), "Extracted resume text");
    Ok(text)
}

fn options(state: &AppState) -> PipelineOptions {
    PipelineOptions {
        log_model_output: state.config.log_model_output,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload-resume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BasicAnalysis>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let pdf = form.pdf()?;
    let resume_text = extract_resume_text(&state, pdf).await?;

    let analysis =
        pipeline::analyze_resume(state.completion.as_ref(), &resume_text, options(&state)).await?;
    Ok(Json(analysis))
}

/// POST /upload-resume/v2
///
/// ATS scoring. `role_match_score` is only returned when `target_role` is sent.
pub async fn handle_upload_resume_v2(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AtsAnalysis>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let pdf = form.pdf()?;
    let resume_text = extract_resume_text(&state, pdf).await?;

    let analysis = pipeline::score_ats(
        state.completion.as_ref(),
        &resume_text,
        form.target_role(),
        options(&state),
    )
    .await?;
    Ok(Json(analysis))
}

/// POST /match-resume-jd
pub async fn handle_match_resume_jd(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<JdMatchAnalysis>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let pdf = form.pdf()?;
    let job_description = form.required_job_description()?;
    let resume_text = extract_resume_text(&state, pdf).await?;

    let analysis = pipeline::match_job_description(
        state.completion.as_ref(),
        &resume_text,
        job_description,
        options(&state),
    )
    .await?;
    Ok(Json(analysis))
}

/// POST /rewrite-resume
///
/// Returns rewritten bullets ranked by impact, highest first.
pub async fn handle_rewrite_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RewriteResponse>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let pdf = form.pdf()?;
    let job_description = form.required_job_description()?;
    let resume_text = extract_resume_text(&state, pdf).await?;

    let response = pipeline::rewrite_bullets(
        state.completion.as_ref(),
        &resume_text,
        job_description,
        options(&state),
    )
    .await?;
    Ok(Json(response))
}
