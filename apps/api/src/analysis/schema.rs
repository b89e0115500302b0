//! Schema contract — the declarative description of the `Feedback` shape.
//!
//! One value, built at startup and shared read-only. It is rendered three ways:
//! as pseudo-JSON for the instruction text, as the backend's response-schema
//! format, and as a checker applied to whatever the backend returns.

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::analysis::models::SectionName;

const SCORE_MIN: i64 = 0;
const SCORE_MAX: i64 = 100;
const MIN_TIPS: usize = 1;

/// An allowed enum value plus spellings accepted on input only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl EnumValue {
    fn accepts(&self, candidate: &str) -> bool {
        self.canonical == candidate || self.aliases.contains(&candidate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub node: SchemaNode,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Closed object: undeclared fields are violations.
    Object { properties: Vec<Property> },
    Array { items: Box<SchemaNode>, min_items: usize },
    String { allowed: Option<Vec<EnumValue>> },
    /// Inclusive bounds.
    Integer { minimum: i64, maximum: i64 },
}

/// First mismatch found while checking a value, with its JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct SchemaViolation {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct SchemaContract {
    root: SchemaNode,
    description: String,
    response_schema: Value,
}

impl SchemaContract {
    /// The contract every resume evaluation must satisfy.
    pub fn feedback() -> Self {
        let tip = SchemaNode::Object {
            properties: vec![
                required(
                    "kind",
                    SchemaNode::String {
                        allowed: Some(vec![
                            EnumValue {
                                canonical: "positive",
                                aliases: &["good"],
                            },
                            EnumValue {
                                canonical: "improvement",
                                aliases: &["improve"],
                            },
                        ]),
                    },
                ),
                required("statement", SchemaNode::String { allowed: None }),
                optional("explanation", SchemaNode::String { allowed: None }),
            ],
        };

        let section = SchemaNode::Object {
            properties: vec![
                required("score", score()),
                required(
                    "tips",
                    SchemaNode::Array {
                        items: Box::new(tip),
                        min_items: MIN_TIPS,
                    },
                ),
            ],
        };

        let sections = SchemaNode::Object {
            properties: SectionName::ALL
                .iter()
                .map(|name| required(name.key(), section.clone()))
                .collect(),
        };

        Self::new(SchemaNode::Object {
            properties: vec![
                required("overallScore", score()),
                required("sections", sections),
            ],
        })
    }

    pub fn new(root: SchemaNode) -> Self {
        let mut description = String::new();
        describe_node(&root, 0, &mut description);
        let response_schema = response_schema_node(&root);
        Self {
            root,
            description,
            response_schema,
        }
    }

    /// Indented pseudo-JSON rendering, embedded in the instruction text.
    pub fn describe(&self) -> &str {
        &self.description
    }

    /// Rendering in the backend's response-schema format
    /// (`type` / `properties` / `required` / `enum` / `items` / bounds).
    pub fn to_response_schema(&self) -> &Value {
        &self.response_schema
    }

    /// Checks `value` against the contract, stopping at the first violation.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        validate_node(&self.root, value, "$")
    }
}

fn required(name: &'static str, node: SchemaNode) -> Property {
    Property {
        name,
        node,
        required: true,
    }
}

fn optional(name: &'static str, node: SchemaNode) -> Property {
    Property {
        name,
        node,
        required: false,
    }
}

fn score() -> SchemaNode {
    SchemaNode::Integer {
        minimum: SCORE_MIN,
        maximum: SCORE_MAX,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Renderings
// ────────────────────────────────────────────────────────────────────────────

fn describe_node(node: &SchemaNode, indent: usize, out: &mut String) {
    match node {
        SchemaNode::Object { properties } => {
            out.push_str("{\n");
            for (i, prop) in properties.iter().enumerate() {
                out.push_str(&" ".repeat(indent + 2));
                out.push_str(&format!("\"{}\": ", prop.name));
                describe_node(&prop.node, indent + 2, out);
                if !prop.required {
                    out.push_str(" (optional)");
                }
                if i + 1 < properties.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&" ".repeat(indent));
            out.push('}');
        }
        SchemaNode::Array { items, min_items } => {
            out.push_str("[\n");
            out.push_str(&" ".repeat(indent + 2));
            describe_node(items, indent + 2, out);
            out.push('\n');
            out.push_str(&" ".repeat(indent));
            out.push(']');
            if *min_items > 0 {
                out.push_str(&format!(" (at least {min_items})"));
            }
        }
        SchemaNode::String { allowed: None } => out.push_str("string"),
        SchemaNode::String {
            allowed: Some(values),
        } => {
            let rendered: Vec<String> = values
                .iter()
                .map(|v| format!("\"{}\"", v.canonical))
                .collect();
            out.push_str(&rendered.join(" | "));
        }
        SchemaNode::Integer { minimum, maximum } => {
            out.push_str(&format!("integer ({minimum}-{maximum})"));
        }
    }
}

fn response_schema_node(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Object { properties } => {
            let mut props = Map::new();
            for prop in properties {
                props.insert(prop.name.to_string(), response_schema_node(&prop.node));
            }
            let required: Vec<&str> = properties
                .iter()
                .filter(|p| p.required)
                .map(|p| p.name)
                .collect();
            let ordering: Vec<&str> = properties.iter().map(|p| p.name).collect();
            json!({
                "type": "OBJECT",
                "properties": props,
                "required": required,
                "propertyOrdering": ordering,
            })
        }
        SchemaNode::Array { items, min_items } => json!({
            "type": "ARRAY",
            "items": response_schema_node(items),
            "minItems": min_items,
        }),
        SchemaNode::String { allowed: None } => json!({ "type": "STRING" }),
        SchemaNode::String {
            allowed: Some(values),
        } => {
            let canonical: Vec<&str> = values.iter().map(|v| v.canonical).collect();
            json!({ "type": "STRING", "format": "enum", "enum": canonical })
        }
        SchemaNode::Integer { minimum, maximum } => json!({
            "type": "INTEGER",
            "minimum": minimum,
            "maximum": maximum,
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn violation(path: &str, reason: impl Into<String>) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn validate_node(node: &SchemaNode, value: &Value, path: &str) -> Result<(), SchemaViolation> {
    match node {
        SchemaNode::Object { properties } => {
            let object = value.as_object().ok_or_else(|| {
                violation(path, format!("expected object, found {}", type_name(value)))
            })?;

            for prop in properties {
                let child_path = format!("{path}.{}", prop.name);
                match object.get(prop.name) {
                    // An explicit null on an optional field reads as absent.
                    None | Some(Value::Null) if !prop.required => {}
                    None => return Err(violation(&child_path, "missing required field")),
                    Some(child) => validate_node(&prop.node, child, &child_path)?,
                }
            }

            if let Some(extra) = object
                .keys()
                .find(|key| !properties.iter().any(|p| p.name == key.as_str()))
            {
                return Err(violation(&format!("{path}.{extra}"), "unexpected field"));
            }
            Ok(())
        }
        SchemaNode::Array { items, min_items } => {
            let array = value.as_array().ok_or_else(|| {
                violation(path, format!("expected array, found {}", type_name(value)))
            })?;
            if array.len() < *min_items {
                return Err(violation(
                    path,
                    format!("expected at least {min_items} items, found {}", array.len()),
                ));
            }
            for (i, item) in array.iter().enumerate() {
                validate_node(items, item, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        SchemaNode::String { allowed } => {
            let text = value.as_str().ok_or_else(|| {
                violation(path, format!("expected string, found {}", type_name(value)))
            })?;
            match allowed {
                Some(values) if !values.iter().any(|v| v.accepts(text)) => {
                    Err(violation(path, format!("'{text}' is not an allowed value")))
                }
                _ => Ok(()),
            }
        }
        SchemaNode::Integer { minimum, maximum } => {
            let number = value
                .as_i64()
                .ok_or_else(|| violation(path, format!("expected integer, found {value}")))?;
            if number < *minimum || number > *maximum {
                return Err(violation(
                    path,
                    format!("{number} is outside {minimum}-{maximum}"),
                ));
            }
            Ok(())
        }
    }
}
