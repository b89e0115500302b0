use bytes::Bytes;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// The uploaded resume, buffered in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    /// Media type declared by the client, as received.
    pub media_type: String,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Declared media type without parameters, lowercased.
    pub fn media_type_essence(&self) -> String {
        self.media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }
}

/// One resume evaluation request. Created per call and dropped when the call completes.
#[derive(Debug, Clone, Default)]
pub struct EvaluationRequest {
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    pub document: Option<UploadedDocument>,
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Whether a tip praises something or asks for a change.
/// `good` / `improve` are accepted on input for older prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipKind {
    #[serde(alias = "good")]
    Positive,
    #[serde(alias = "improve")]
    Improvement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTip {
    pub kind: TipKind,
    pub statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One category's score (0–100) and its tips (never empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSection {
    pub score: u8,
    pub tips: Vec<FeedbackTip>,
}

/// The five evaluation categories, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Compatibility,
    ToneAndStyle,
    Content,
    Structure,
    Skills,
}

impl SectionName {
    pub const ALL: [SectionName; 5] = [
        SectionName::Compatibility,
        SectionName::ToneAndStyle,
        SectionName::Content,
        SectionName::Structure,
        SectionName::Skills,
    ];

    /// JSON key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            SectionName::Compatibility => "compatibility",
            SectionName::ToneAndStyle => "toneAndStyle",
            SectionName::Content => "content",
            SectionName::Structure => "structure",
            SectionName::Skills => "skills",
        }
    }

    /// Human-readable category name used in the instruction.
    pub fn label(self) -> &'static str {
        match self {
            SectionName::Compatibility => "ATS (Applicant Tracking System) Compatibility",
            SectionName::ToneAndStyle => "Tone & Style",
            SectionName::Content => "Content Relevance",
            SectionName::Structure => "Structure & Formatting",
            SectionName::Skills => "Skills Presentation",
        }
    }
}

/// All five sections. A named field per section, so none can be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSections {
    pub compatibility: FeedbackSection,
    pub tone_and_style: FeedbackSection,
    pub content: FeedbackSection,
    pub structure: FeedbackSection,
    pub skills: FeedbackSection,
}

impl FeedbackSections {
    /// Builds every section from `build`, called once per section in order.
    pub fn from_fn(mut build: impl FnMut(SectionName) -> FeedbackSection) -> Self {
        Self {
            compatibility: build(SectionName::Compatibility),
            tone_and_style: build(SectionName::ToneAndStyle),
            content: build(SectionName::Content),
            structure: build(SectionName::Structure),
            skills: build(SectionName::Skills),
        }
    }

    pub fn get(&self, name: SectionName) -> &FeedbackSection {
        match name {
            SectionName::Compatibility => &self.compatibility,
            SectionName::ToneAndStyle => &self.tone_and_style,
            SectionName::Content => &self.content,
            SectionName::Structure => &self.structure,
            SectionName::Skills => &self.skills,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &FeedbackSection)> {
        SectionName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

/// The evaluation returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall_score: u8,
    pub sections: FeedbackSections,
}
