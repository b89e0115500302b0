use serde_json::Value;

use crate::analysis::failure::ParseFailure;
use crate::analysis::models::Feedback;
use crate::analysis::schema::SchemaContract;
use crate::llm_client::strip_code_fences;

/// Turns raw backend text into a `Feedback`, or explains why it cannot.
///
/// All or nothing: the value must satisfy the contract in full before it is
/// converted. Nothing is defaulted, clamped or repaired.
pub fn parse_feedback(contract: &SchemaContract, raw: &str) -> Result<Feedback, ParseFailure> {
    let value: Value = serde_json::from_str(strip_code_fences(raw))?;

    contract
        .validate(&value)
        .map_err(|v| ParseFailure::ShapeMismatch(v.to_string()))?;

    serde_json::from_value(value).map_err(|e| ParseFailure::ShapeMismatch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{SectionName, TipKind};
    use serde_json::json;

    fn model_output() -> Value {
        let section = |score: u8| {
            json!({
                "score": score,
                "tips": [
                    { "kind": "good", "statement": "Clear headings", "explanation": "Easy to scan" },
                    { "kind": "improve", "statement": "Add metrics" },
                    { "kind": "improvement", "statement": "Trim the summary", "explanation": "Keep it to 3 lines" }
                ]
            })
        };
        json!({
            "overallScore": 74,
            "sections": {
                "compatibility": section(81),
                "toneAndStyle": section(70),
                "content": section(65),
                "structure": section(90),
                "skills": section(60)
            }
        })
    }

    #[test]
    fn test_conformant_output_parses() {
        let feedback =
            parse_feedback(&SchemaContract::feedback(), &model_output().to_string()).unwrap();
        assert_eq!(feedback.overall_score, 74);
        assert_eq!(feedback.sections.get(SectionName::Structure).score, 90);
        let tips = &feedback.sections.compatibility.tips;
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[0].kind, TipKind::Positive);
        assert_eq!(tips[1].kind, TipKind::Improvement);
        assert_eq!(tips[1].explanation, None);
    }

    #[test]
    fn test_fenced_output_parses() {
        let raw = format!("```json\n{}\n```", model_output());
        assert!(parse_feedback(&SchemaContract::feedback(), &raw).is_ok());
    }

    #[test]
    fn test_malformed_json_is_malformed() {
        let result = parse_feedback(&SchemaContract::feedback(), "{\"overallScore\": 74,");
        assert!(matches!(result, Err(ParseFailure::Malformed(_))));
    }

    #[test]
    fn test_prose_is_malformed() {
        let result = parse_feedback(&SchemaContract::feedback(), "I cannot read this file.");
        assert!(matches!(result, Err(ParseFailure::Malformed(_))));
    }

    #[test]
    fn test_missing_section_is_shape_mismatch() {
        let mut value = model_output();
        value["sections"].as_object_mut().unwrap().remove("toneAndStyle");
        match parse_feedback(&SchemaContract::feedback(), &value.to_string()) {
            Err(ParseFailure::ShapeMismatch(reason)) => {
                assert!(reason.contains("$.sections.toneAndStyle"), "{reason}");
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_score_is_not_clamped() {
        let mut value = model_output();
        value["sections"]["skills"]["score"] = json!(250);
        let result = parse_feedback(&SchemaContract::feedback(), &value.to_string());
        assert!(matches!(result, Err(ParseFailure::ShapeMismatch(_))));
    }

    #[test]
    fn test_array_root_is_shape_mismatch() {
        let result = parse_feedback(&SchemaContract::feedback(), "[]");
        assert!(matches!(result, Err(ParseFailure::ShapeMismatch(_))));
    }
}
