// src/analysis/handlers.rs

use axum::{
    extract::{Extension, Multipart},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::common::{ApiError, AppState, Validator};
use crate::services::CompletionModel;

use super::extractor;
use super::fallback;
use super::models::{AnalysisOutcome, AnalysisReport, AnalyzeResponse};
use super::parser;
use super::prompts;
use super::storage::TempUpload;
use super::validators::{ResumeUpload, ResumeUploadValidator};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error during resume analysis.";

/// POST /analyze - Analyze a resume against an optional job description
///
/// Inference and parse failures degrade to a fallback report and still return
/// 200; only validation and extraction failures reject the request. Errors
/// outside that taxonomy surface as a generic 500.
pub async fn analyze_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let state = state_lock.read().await;

    // ------------------------------------------------------------------
    // Ingestion: pull the resume file and job description out of the form
    // ------------------------------------------------------------------

    let mut resume: Option<(Option<String>, Vec<u8>)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(internal_error)? {
        match field.name() {
            Some("resume") => {
                // Keep an absent filename absent; validation decides what
                // counts as a PDF, not a default value.
                let filename = field.file_name().map(|name| name.to_string());
                let data = field.bytes().await.map_err(internal_error)?;
                resume = Some((filename, data.to_vec()));
            }
            Some("jobDescription") => {
                job_description = Some(field.text().await.map_err(internal_error)?);
            }
            _ => {}
        }
    }

    // Empty and whitespace-only job descriptions are treated as absent
    let job_description = job_description.filter(|jd| !jd.trim().is_empty());

    // ------------------------------------------------------------------
    // Validating
    // ------------------------------------------------------------------

    let upload_meta = ResumeUpload {
        file_supplied: resume.is_some(),
        filename: resume.as_ref().and_then(|(name, _)| name.clone()),
    };

    let (filename, data) = match resume {
        Some((name, data)) => (name.unwrap_or_else(|| "unnamed".to_string()), data),
        None => {
            return Err(ApiError::BadRequest("No resume file uploaded.".to_string()));
        }
    };

    // The document is persisted before type validation (upload time), so a
    // rejected upload still goes through the scoped deletion path.
    let upload = TempUpload::write(&state.uploads_dir, &data)
        .await
        .map_err(internal_error)?;

    let validation = ResumeUploadValidator.validate(&upload_meta);
    if !validation.is_valid {
        warn!(filename = %filename, "Rejected resume upload");
        let message = validation
            .first_message()
            .unwrap_or("Only PDF files are allowed.")
            .to_string();
        upload.remove().await;
        return Err(ApiError::BadRequest(message));
    }

    // ------------------------------------------------------------------
    // Extracting: temp file is released right after this stage, always
    // ------------------------------------------------------------------

    let pdf_bytes = tokio::fs::read(upload.path()).await.map_err(internal_error)?;
    let extracted = extractor::extract_text(pdf_bytes).await;
    upload.remove().await;

    let resume_text = match extracted {
        Ok(text) => text,
        Err(e) => {
            warn!(filename = %filename, error = %e, "Text extraction failed");
            return Err(ApiError::BadRequest(e.to_string()));
        }
    };

    // ------------------------------------------------------------------
    // Composing / Inferring / Parsing, with degrade-in-place fallback
    // ------------------------------------------------------------------

    let (report, outcome) = run_model_analysis(
        state.gemini_service.as_ref(),
        &resume_text,
        job_description.as_deref(),
    )
    .await;

    // ------------------------------------------------------------------
    // Assembling
    // ------------------------------------------------------------------

    info!(
        filename = %filename,
        outcome = ?outcome,
        ats_score = report.ats_score,
        "Resume analysis completed"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        message: outcome.message().to_string(),
        analysis: Some(report),
    }))
}

/// Run the inference and parsing stages over already-extracted resume text.
///
/// Cannot fail: both stages degrade to their deterministic fallback report,
/// tagged with the outcome used for logging and message selection.
pub(crate) async fn run_model_analysis(
    model: &dyn CompletionModel,
    resume_text: &str,
    job_description: Option<&str>,
) -> (AnalysisReport, AnalysisOutcome) {
    let has_job_description = job_description
        .map(|jd| !jd.trim().is_empty())
        .unwrap_or(false);

    let prompt = prompts::build_analysis_prompt(resume_text, job_description);

    match model.generate_content(&prompt).await {
        Ok(completion) => match parser::parse_analysis(&completion) {
            Ok(report) => (report, AnalysisOutcome::Succeeded),
            Err(e) => {
                warn!(error = %e, "Model completion failed validation, using fallback analysis");
                let outcome = if has_job_description {
                    AnalysisOutcome::FallbackParseFailed
                } else {
                    AnalysisOutcome::FallbackNoJobDescription
                };
                (fallback::parse_failure_report(has_job_description), outcome)
            }
        },
        Err(e) => {
            warn!(error = %e, "Inference service unavailable, using fallback analysis");
            let outcome = if has_job_description {
                AnalysisOutcome::FallbackInferenceFailed
            } else {
                AnalysisOutcome::FallbackNoJobDescription
            };
            (
                fallback::inference_failure_report(has_job_description),
                outcome,
            )
        }
    }
}

/// Boundary guard for failures outside the pipeline's error taxonomy
fn internal_error<E: std::fmt::Display>(e: E) -> ApiError {
    error!(error = %e, "Unexpected error during resume analysis");
    ApiError::InternalServer(INTERNAL_ERROR_MESSAGE.to_string())
}
