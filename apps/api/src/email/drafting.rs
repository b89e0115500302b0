//! Email drafting — resolves a request against its template and asks the
//! backend for an HTML email body.

use serde::Deserialize;
use tracing::{info, warn};

use crate::email::prompts::build_email_prompt;
use crate::email::templates::EmailTemplate;
use crate::errors::AppError;
use crate::llm_client::{strip_code_fences, GenerationRequest, GenerativeBackend};

const DEFAULT_TONE: &str = "formal";
const DEFAULT_TYPE: &str = "business";
const DEFAULT_SENDER: &str = "a professional";
const DEFAULT_COMPANY: &str = "an organization";
const DEFAULT_RECIPIENT: &str = "a client";

/// Request body for email drafting. Every field is optional, but at least one
/// key point or a template is required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEmailRequest {
    pub tone: Option<String>,
    #[serde(rename = "type")]
    pub email_type: Option<String>,
    pub recipient: Option<String>,
    pub sender: Option<String>,
    pub company: Option<String>,
    pub key_points: Option<Vec<String>>,
    pub template: Option<EmailTemplate>,
}

/// A request with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmail {
    pub template: Option<EmailTemplate>,
    pub tone: String,
    pub email_type: String,
    pub sender: String,
    pub company: String,
    pub recipient: String,
    pub key_points: Vec<String>,
}

/// Blank strings count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl DraftEmailRequest {
    /// Applies defaults: request value, then template preset, then the house default.
    pub fn resolve(self) -> Result<ResolvedEmail, AppError> {
        let key_points: Vec<String> = self
            .key_points
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        let preset = self.template.map(EmailTemplate::preset);
        if key_points.is_empty() && preset.is_none() {
            return Err(AppError::Validation(
                "Please provide key points or select a template.".to_string(),
            ));
        }

        let key_points = match &preset {
            Some(preset) if key_points.is_empty() => {
                preset.key_points.iter().map(|p| p.to_string()).collect()
            }
            _ => key_points,
        };

        Ok(ResolvedEmail {
            template: self.template,
            tone: non_blank(self.tone)
                .or_else(|| preset.as_ref().map(|p| p.tone.to_string()))
                .unwrap_or_else(|| DEFAULT_TONE.to_string()),
            email_type: non_blank(self.email_type)
                .or_else(|| preset.as_ref().map(|p| p.email_type.to_string()))
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            sender: non_blank(self.sender).unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            company: non_blank(self.company).unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
            recipient: non_blank(self.recipient).unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            key_points,
        })
    }
}

/// Drafts an HTML email. Backend failures surface as errors; there is no fallback.
pub async fn draft_email(
    backend: &dyn GenerativeBackend,
    request: DraftEmailRequest,
) -> Result<String, AppError> {
    let email = request.resolve()?;
    info!(
        "Drafting {} {} email (template={:?}, {} key points)",
        email.tone,
        email.email_type,
        email.template.map(EmailTemplate::key),
        email.key_points.len()
    );

    let generation = GenerationRequest {
        instruction: build_email_prompt(&email),
        ..Default::default()
    };

    let text = backend.generate(&generation).await.map_err(|e| {
        warn!("Email generation failed: {e}");
        AppError::Llm("Email generation failed.".to_string())
    })?;

    match text.as_deref().map(strip_code_fences) {
        Some(html) if !html.is_empty() => Ok(html.to_string()),
        _ => Err(AppError::Llm("No HTML generated.".to_string())),
    }
}
