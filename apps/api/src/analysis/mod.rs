// Resume analysis: structured feedback on an uploaded resume for a target role.
// Implements: input validation, schema contract, prompt building, backend
// invocation, response parsing and the fallback evaluation.
// All backend calls go through llm_client.

pub mod analyzer;
pub mod failure;
pub mod fallback;
pub mod handlers;
pub mod invoker;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod schema;
pub mod validation;
