// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces more than one service appends.

/// Output rule for every schema-constrained call.
pub const JSON_ONLY_INSTRUCTION: &str = "Return ONLY valid JSON. \
    Do NOT use markdown code fences. \
    Do NOT include any commentary, explanations or apologies outside the JSON object.";

/// Output rule for every HTML-producing call.
pub const HTML_ONLY_INSTRUCTION: &str = "\
- Output only clean, responsive HTML using inline CSS.
- Do not include <html>, <head>, or <body> tags — just the content section.
- Do not wrap the HTML in markdown code fences.
- Avoid external CSS, JS, or placeholders like [company].";
