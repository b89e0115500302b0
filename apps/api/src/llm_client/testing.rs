//! Test doubles for the generative backend: a scripted in-process backend and
//! helpers for running `LlmClient` against a local HTTP server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;

use super::{GenerationRequest, GenerativeBackend, LlmError};
use crate::config::Config;

/// Client configuration pointing at `api_base` with the given timeout.
pub fn test_config(api_base: String, llm_timeout_secs: u64) -> Config {
    Config {
        google_api_key: "test-key".to_string(),
        model: "gemini-test".to_string(),
        api_base,
        llm_timeout_secs,
        port: 0,
        rust_log: "info".to_string(),
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

/// Backend that accepts the request but answers only after `delay`.
pub fn slow_backend(delay: std::time::Duration) -> Router {
    Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        axum::Json(serde_json::json!({ "candidates": [] }))
    })
}

enum Script {
    Text(String),
    NoText,
    Fail,
}

/// Answers every call the same way and remembers the last request it saw.
pub struct ScriptedBackend {
    script: Script,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl ScriptedBackend {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Backend that returns `text` verbatim.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Script::Text(text.into()))
    }

    /// Backend that answers without any text payload.
    pub fn empty() -> Self {
        Self::new(Script::NoText)
    }

    /// Backend that is unreachable.
    pub fn failing() -> Self {
        Self::new(Script::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.script {
            Script::Text(text) => Ok(Some(text.clone())),
            Script::NoText => Ok(None),
            Script::Fail => Err(LlmError::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            }),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}
