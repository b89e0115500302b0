//! Resume Analysis — orchestrates the feedback pipeline.
//!
//! Flow: validate → build instruction → invoke backend → parse → respond.
//!
//! Validation failures are the only errors a caller ever sees. Once input is
//! valid, every backend or parse failure is replaced by the fallback feedback,
//! so the caller always receives a well-formed evaluation.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::failure::AnalysisFailure;
use crate::analysis::fallback::fallback_feedback;
use crate::analysis::invoker::invoke_model;
use crate::analysis::models::{EvaluationRequest, Feedback};
use crate::analysis::parser::parse_feedback;
use crate::analysis::prompts::build_instruction;
use crate::analysis::schema::SchemaContract;
use crate::analysis::validation::{validate_request, ValidationResult};
use crate::errors::AppError;
use crate::llm_client::GenerativeBackend;

/// Where the returned feedback came from. Internal only: never serialized into
/// the response, so callers cannot tell a fallback from a genuine low score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSource {
    Model,
    Fallback { reason: &'static str },
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis_id: Uuid,
    pub feedback: Feedback,
    pub source: FeedbackSource,
}

/// Runs the full analysis pipeline for one request.
///
/// Steps:
/// 1. validate_request() → every violation at once, or continue
/// 2. build_instruction() → instruction text with the contract embedded
/// 3. invoke_model() → raw backend text (single attempt)
/// 4. parse_feedback() → Feedback, all or nothing
/// 5. any failure in 3–4 → fallback_feedback()
pub async fn analyze_resume(
    backend: &dyn GenerativeBackend,
    contract: &SchemaContract,
    request: EvaluationRequest,
) -> Result<AnalysisOutcome, AppError> {
    let analysis_id = Uuid::new_v4();

    // Step 1: Validate
    let document = match validate_request(&request) {
        ValidationResult::Valid(document) => document,
        invalid @ ValidationResult::Invalid(_) => {
            info!("Analysis {analysis_id} rejected: {invalid:?}");
            return Err(AppError::Validation(invalid.message().unwrap_or_default()));
        }
    };

    info!("Analysis {analysis_id} started: document={} bytes", document.len());
    debug!(
        "Analysis {analysis_id} context: company={:?}, title={:?}",
        request.company_name, request.job_title
    );

    // Step 2: Prompt
    let instruction = build_instruction(&request, contract);

    // Steps 3–4: Invoke and parse
    let generated = async {
        let raw = invoke_model(backend, contract, instruction, document).await?;
        Ok::<_, AnalysisFailure>(parse_feedback(contract, &raw)?)
    }
    .await;

    // Step 5: Degrade
    let outcome = match generated {
        Ok(feedback) => {
            info!(
                "Analysis {analysis_id} completed: overall_score={}",
                feedback.overall_score
            );
            for (name, section) in feedback.sections.iter() {
                debug!(
                    "Analysis {analysis_id} {}: score={}, tips={}",
                    name.key(),
                    section.score,
                    section.tips.len()
                );
            }
            AnalysisOutcome {
                analysis_id,
                feedback,
                source: FeedbackSource::Model,
            }
        }
        Err(failure) => {
            warn!(
                kind = failure.kind(),
                "Analysis {analysis_id} fell back to default feedback: {failure}"
            );
            AnalysisOutcome {
                analysis_id,
                feedback: fallback_feedback(),
                source: FeedbackSource::Fallback {
                    reason: failure.kind(),
                },
            }
        }
    };

    Ok(outcome)
}
