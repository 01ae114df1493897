//! Request schema for `POST /embed`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of an embedding request.
///
/// Both fields are optional; absent or `null` fields become empty strings.
/// Any other non-string value is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedRequest {
    #[serde(deserialize_with = "field_text")]
    pub name: String,
    #[serde(deserialize_with = "field_text")]
    pub description: String,
}

fn field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

impl EmbedRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The text sent to the provider: name and description joined by one
    /// space, with surrounding whitespace trimmed. Empty when both are blank.
    pub fn derived_input(&self) -> String {
        format!("{} {}", self.name, self.description)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> EmbedRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_derived_input_joins_with_single_space() {
        let req = EmbedRequest::new("Widget", "A small gadget");
        assert_eq!(req.derived_input(), "Widget A small gadget");
    }

    #[test]
    fn test_derived_input_trims_only_the_ends() {
        let req = EmbedRequest::new("  Widget ", " A  small gadget\n");
        assert_eq!(req.derived_input(), "Widget   A  small gadget");
    }

    #[test]
    fn test_single_field() {
        assert_eq!(parse(r#"{"name": "X"}"#).derived_input(), "X");
        assert_eq!(parse(r#"{"description": "only this"}"#).derived_input(), "only this");
    }

    #[test]
    fn test_blank_inputs_derive_empty() {
        assert_eq!(parse("{}").derived_input(), "");
        assert_eq!(parse(r#"{"name": "  "}"#).derived_input(), "");
        assert_eq!(parse(r#"{"name": "", "description": "\t"}"#).derived_input(), "");
        assert_eq!(parse(r#"{"name": null, "description": null}"#).derived_input(), "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let req = parse(r#"{"name": "Widget", "price": 3}"#);
        assert_eq!(req, EmbedRequest::new("Widget", ""));
    }

    #[test]
    fn test_scalar_fields_become_text() {
        let req = parse(r#"{"name": "Widget", "description": 123}"#);
        assert_eq!(req.derived_input(), "Widget 123");

        assert_eq!(parse(r#"{"name": true, "description": 1.5}"#).derived_input(), "true 1.5");
        assert_eq!(parse(r#"{"name": ["a", 1]}"#).derived_input(), r#"["a",1]"#);
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(serde_json::from_str::<EmbedRequest>(r#""Widget""#).is_err());
        assert!(serde_json::from_str::<EmbedRequest>("42").is_err());
    }
}
