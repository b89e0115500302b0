use crate::analysis::models::{Feedback, FeedbackSection, FeedbackSections, FeedbackTip, TipKind};

/// The fixed, zero-scored evaluation returned whenever generation or parsing fails.
///
/// Pure and total: every call yields an identical value.
pub fn fallback_feedback() -> Feedback {
    Feedback {
        overall_score: 0,
        sections: FeedbackSections::from_fn(|name| FeedbackSection {
            score: 0,
            tips: vec![FeedbackTip {
                kind: TipKind::Improvement,
                statement: format!("Unable to analyze {}.", name.key()),
                explanation: None,
            }],
        }),
    }
}
