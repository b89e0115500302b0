use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::email::drafting::{draft_email, DraftEmailRequest};
use crate::email::templates::EmailTemplate;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DraftEmailResponse {
    pub success: bool,
    pub html: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub tone: &'static str,
    #[serde(rename = "type")]
    pub email_type: &'static str,
    pub key_points: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub success: bool,
    pub templates: Vec<TemplateSummary>,
}

/// POST /api/utilities/email-template-generator
pub async fn handle_draft_email(
    State(state): State<AppState>,
    body: Result<Json<DraftEmailRequest>, JsonRejection>,
) -> Result<Json<DraftEmailResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let html = draft_email(state.llm.as_ref(), request).await?;
    Ok(Json(DraftEmailResponse {
        success: true,
        html,
    }))
}

/// GET /api/utilities/email-template-generator/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    let templates = EmailTemplate::ALL
        .iter()
        .map(|template| {
            let preset = template.preset();
            TemplateSummary {
                key: template.key(),
                label: preset.label,
                tone: preset.tone,
                email_type: preset.email_type,
                key_points: preset.key_points,
            }
        })
        .collect();

    Json(TemplateListResponse {
        success: true,
        templates,
    })
}
