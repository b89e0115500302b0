use tracing::debug;

use crate::analysis::failure::AnalysisFailure;
use crate::analysis::models::UploadedDocument;
use crate::analysis::schema::SchemaContract;
use crate::llm_client::{GenerationRequest, GenerativeBackend, InlineDocument};

/// Sends the instruction and the resume to the backend in a single attempt,
/// requesting JSON constrained by `contract`.
///
/// Returns the raw text; interpreting it is the parser's job.
pub async fn invoke_model(
    backend: &dyn GenerativeBackend,
    contract: &SchemaContract,
    instruction: String,
    document: &UploadedDocument,
) -> Result<String, AnalysisFailure> {
    let request = GenerationRequest {
        instruction,
        document: Some(InlineDocument {
            mime_type: document.media_type_essence(),
            data: document.bytes.clone(),
        }),
        response_schema: Some(contract.to_response_schema().clone()),
    };

    debug!(
        "Invoking {} with {} byte document",
        backend.model(),
        document.len()
    );

    match backend.generate(&request).await? {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AnalysisFailure::EmptyResponse),
    }
}
