use std::sync::Arc;

use crate::analysis::schema::SchemaContract;
use crate::llm_client::GenerativeBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production, scripted in tests.
    pub llm: Arc<dyn GenerativeBackend>,
    /// Feedback contract, built once at startup and shared by every analysis.
    pub schema: Arc<SchemaContract>,
}
