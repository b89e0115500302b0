// Email drafting: turns key points or a named template into an HTML email body.
// Unlike resume analysis there is no fallback; backend failures reach the caller.

pub mod drafting;
pub mod handlers;
pub mod prompts;
pub mod templates;
