use thiserror::Error;

use crate::llm_client::LlmError;

/// Why backend text could not become a `Feedback`.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// Every way the generation half of the pipeline can fail.
///
/// All variants end in the same fallback feedback; they stay distinct for logs.
#[derive(Debug, Error)]
pub enum AnalysisFailure {
    #[error("backend call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("backend returned no text")]
    EmptyResponse,

    #[error("backend output rejected: {0}")]
    Parse(#[from] ParseFailure),
}

impl AnalysisFailure {
    /// Stable short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisFailure::Upstream(_) => "upstream",
            AnalysisFailure::EmptyResponse => "empty_response",
            AnalysisFailure::Parse(ParseFailure::Malformed(_)) => "malformed_json",
            AnalysisFailure::Parse(ParseFailure::ShapeMismatch(_)) => "shape_mismatch",
        }
    }
}
