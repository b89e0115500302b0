// Prompt construction for resume analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::analysis::models::{EvaluationRequest, SectionName};
use crate::analysis::schema::SchemaContract;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Persona and task statement that opens every analysis instruction.
pub const ANALYSIS_PERSONA: &str =
    "You are an expert ATS (Applicant Tracking System) and resume analysis specialist.";

/// Renders the instruction sent alongside the resume.
///
/// Caller text is embedded verbatim. It is descriptive content, so nothing is escaped.
pub fn build_instruction(request: &EvaluationRequest, contract: &SchemaContract) -> String {
    let categories: Vec<String> = SectionName::ALL
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {} (key \"{}\")", i + 1, name.label(), name.key()))
        .collect();

    format!(
        r#"{persona}

CONTEXT:
- Company: {company}
- Position: {title}
- Job Description: {description}

TASK:
Analyze the uploaded resume in PDF format and provide a structured evaluation for this position.

EVALUATION CATEGORIES:
{categories}

REQUIREMENTS:
- Score each category from 0–100 and give an overall score from 0–100.
- Provide 3–4 concise, actionable tips for each section.
- Distinguish between positive feedback (kind "positive") and improvement feedback (kind "improvement").
- Add a short explanation to a tip when it helps the candidate act on it.

OUTPUT FORMAT:
{json_only}
The JSON must match this shape exactly, with every field shown and no others:
{schema}
"#,
        persona = ANALYSIS_PERSONA,
        company = request.company_name,
        title = request.job_title,
        description = request.job_description,
        categories = categories.join("\n"),
        json_only = JSON_ONLY_INSTRUCTION,
        schema = contract.describe(),
    )
}
