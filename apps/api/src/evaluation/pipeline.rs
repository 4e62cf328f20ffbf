//! Evaluation pipeline — Prompt Builder → Completion Client → Response Validator.
//!
//! One completion call per evaluation. No retries: a failed call or a rejected
//! response fails the whole request.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::models::{AtsAnalysis, BasicAnalysis, JdMatchAnalysis, RewriteResponse};
use crate::evaluation::prompt_builder::{build_prompt, Prompt, PromptInput};
use crate::evaluation::validator::{
    validate_ats, validate_basic, validate_jd_match, validate_rewrite, ValidationError,
};
use crate::evaluation::Flavor;
use crate::llm_client::CompletionService;

/// Per-request switches for the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Emit the raw model output at debug level.
    pub log_model_output: bool,
}

pub async fn analyze_resume(
    llm: &dyn CompletionService,
    resume_text: &str,
    options: PipelineOptions,
) -> Result<BasicAnalysis, AppError> {
    let input = PromptInput {
        resume_text,
        ..Default::default()
    };
    run(llm, build_prompt(Flavor::Basic, &input), options, validate_basic).await
}

pub async fn score_ats(
    llm: &dyn CompletionService,
    resume_text: &str,
    target_role: Option<&str>,
    options: PipelineOptions,
) -> Result<AtsAnalysis, AppError> {
    let input = PromptInput {
        resume_text,
        target_role,
        ..Default::default()
    };
    let role_supplied = target_role.is_some();
    run(llm, build_prompt(Flavor::Ats, &input), options, |raw| {
        validate_ats(raw, role_supplied)
    })
    .await
}

pub async fn match_job_description(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
    options: PipelineOptions,
) -> Result<JdMatchAnalysis, AppError> {
    let input = PromptInput {
        resume_text,
        job_description: Some(job_description),
        ..Default::default()
    };
    run(llm, build_prompt(Flavor::JdMatch, &input), options, validate_jd_match).await
}

pub async fn rewrite_bullets(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_description: &str,
    options: PipelineOptions,
) -> Result<RewriteResponse, AppError> {
    let input = PromptInput {
        resume_text,
        job_description: Some(job_description),
        ..Default::default()
    };
    run(llm, build_prompt(Flavor::Rewrite, &input), options, validate_rewrite).await
}

async fn run<T, F>(
    llm: &dyn CompletionService,
    prompt: Prompt,
    options: PipelineOptions,
    validate: F,
) -> Result<T, AppError>
where
    F: FnOnce(&str) -> Result<T, ValidationError>,
{
    let evaluation_id = Uuid::new_v4();
    let flavor = prompt.flavor;
    info!(
        %evaluation_id,
        %flavor,
        prompt_chars = prompt.user.len(),
        "Requesting evaluation"
    );

    let raw = llm.complete(prompt.as_request()).await?;

    if options.log_model_output {
        debug!(%evaluation_id, %flavor, raw_output = %raw, "Raw model output");
    }

    let result = validate(&raw).map_err(|e| {
        warn!(%evaluation_id, %flavor, "Model output rejected: {e}");
        AppError::from(e)
    })?;

    info!(%evaluation_id, %flavor, "Evaluation complete");
    Ok(result)
}
