use crate::analysis::models::{EvaluationRequest, UploadedDocument};

/// Largest accepted upload. Caps per-request memory; the whole file is buffered.
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Reported for any oversized upload, whether caught here or by the transport limit.
pub const FILE_TOO_LARGE: &str = "File size must be less than 10MB";

#[derive(Debug, Clone)]
pub enum ValidationResult<'a> {
    /// Carries the attached document, which every valid request has.
    Valid(&'a UploadedDocument),
    /// One message per failed rule, in rule order.
    Invalid(Vec<String>),
}

impl ValidationResult<'_> {
    /// All violations joined into the single message shown to the caller.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(violations) => Some(violations.join(", ")),
        }
    }
}

/// Checks every rule and reports every violation; never stops at the first one.
///
/// Rules:
/// - company name, job title and job description must contain non-whitespace text
/// - a document must be attached
/// - the document must be declared as `application/pdf`
/// - the document must be at most `MAX_DOCUMENT_BYTES` (inclusive)
pub fn validate_request(request: &EvaluationRequest) -> ValidationResult<'_> {
    let mut violations = Vec::new();

    if request.company_name.trim().is_empty() {
        violations.push("Company name is required".to_string());
    }
    if request.job_title.trim().is_empty() {
        violations.push("Job title is required".to_string());
    }
    if request.job_description.trim().is_empty() {
        violations.push("Job description is required".to_string());
    }

    let document = match &request.document {
        None => {
            violations.push("Resume file is required".to_string());
            None
        }
        Some(document) => {
            if document.media_type_essence() != PDF_MEDIA_TYPE {
                violations.push("Only PDF files are supported".to_string());
            }
            if document.len() > MAX_DOCUMENT_BYTES {
                violations.push(FILE_TOO_LARGE.to_string());
            }
            Some(document)
        }
    };

    match document {
        Some(document) if violations.is_empty() => ValidationResult::Valid(document),
        _ => ValidationResult::Invalid(violations),
    }
}
