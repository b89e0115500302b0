// Prompt construction for email drafting.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::email::drafting::ResolvedEmail;
use crate::llm_client::prompts::HTML_ONLY_INSTRUCTION;

pub const EMAIL_PERSONA: &str = "You are an expert HTML email copywriter and designer.";

/// Renders the drafting instruction for a fully resolved request.
pub fn build_email_prompt(email: &ResolvedEmail) -> String {
    let template_context = email
        .template
        .map(|t| format!("This is a {} email. {}\n\n", t.key(), t.preset().description))
        .unwrap_or_default();

    let key_points: Vec<String> = email
        .key_points
        .iter()
        .enumerate()
        .map(|(i, point)| format!("{}. {}", i + 1, point))
        .collect();

    format!(
        r#"{persona}

{template_context}Write a {tone} {email_type} email in **HTML format** from {sender} at {company} to {recipient}.

The email must include these key points naturally:
{key_points}

Formatting instructions:
- Include a styled header (company name or branding), greeting, email body, and closing signature.
{html_only}
"#,
        persona = EMAIL_PERSONA,
        tone = email.tone,
        email_type = email.email_type,
        sender = email.sender,
        company = email.company,
        recipient = email.recipient,
        key_points = key_points.join("\n"),
        html_only = HTML_ONLY_INSTRUCTION,
    )
}
