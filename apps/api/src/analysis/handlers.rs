//! Axum route handlers for the resume analyzer.

use anyhow::anyhow;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::analysis::analyzer::{analyze_resume, FeedbackSource};
use crate::analysis::models::{EvaluationRequest, Feedback, UploadedDocument};
use crate::analysis::validation::FILE_TOO_LARGE;
use crate::errors::AppError;
use crate::state::AppState;

/// Request body cap for uploads. Above the document limit so that most oversized
/// files reach validation; bodies over this cap get the same message.
pub const MAX_UPLOAD_BODY_BYTES: usize = 12 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub feedback: Feedback,
}

/// POST /api/utilities/resume-analyzer
///
/// Multipart fields: `companyName`, `jobTitle`, `jobDescription`, `file`.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let multipart =
        multipart.map_err(|e| anyhow!("Resume analyzer expects multipart/form-data: {e}"))?;
    let request = read_evaluation_request(multipart).await?;

    let outcome = analyze_resume(state.llm.as_ref(), &state.schema, request).await?;
    if let FeedbackSource::Fallback { reason } = outcome.source {
        debug!(
            "Analysis {} answered with fallback feedback ({reason})",
            outcome.analysis_id
        );
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        feedback: outcome.feedback,
    }))
}

/// Collects the form fields. Absent text fields stay empty so validation can
/// report them; unknown fields are ignored.
async fn read_evaluation_request(mut multipart: Multipart) -> Result<EvaluationRequest, AppError> {
    let mut request = EvaluationRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "multipart body"))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "companyName" | "jobTitle" | "jobDescription" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, &name))?;
                match name.as_str() {
                    "companyName" => request.company_name = value,
                    "jobTitle" => request.job_title = value,
                    _ => request.job_description = value,
                }
            }
            "file" => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(String::from);
                let media_type = field.content_type().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "uploaded file"))?;
                let document = UploadedDocument {
                    file_name,
                    media_type,
                    bytes,
                };
                // Browsers send an empty, unnamed part when no file was chosen.
                if document.file_name.is_some() || !document.is_empty() {
                    request.document = Some(document);
                }
            }
            _ => {}
        }
    }

    Ok(request)
}

/// A body over the transport limit is an oversized upload, so it is reported
/// like the validator would. Any other read failure is unexpected.
fn multipart_error(error: MultipartError, reading: &str) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Validation(FILE_TOO_LARGE.to_string())
    } else {
        AppError::Internal(anyhow!("Failed to read {reading}: {error}"))
    }
}
