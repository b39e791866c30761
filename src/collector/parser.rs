//! Mbean payload decoding
//!
//! The coordinator answers `GET /v1/jmx/mbean/{objectName}` with a JSON
//! envelope whose only consumed field is the attribute list. Attribute
//! values are loosely typed on the wire, so they are kept as a tagged union
//! and normalized through [`AttributeValue::coerce`] alone.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CoerceError, CollectorError};

/// Decoded mbean envelope. The class name is informational; additional
/// envelope fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MbeanPayload {
    #[serde(rename = "className", default)]
    pub class_name: Option<String>,
    pub attributes: Vec<MbeanAttribute>,
}

/// One (name, value) pair as received from the coordinator.
#[derive(Debug, Clone, Deserialize)]
pub struct MbeanAttribute {
    pub name: String,
    #[serde(default)]
    pub value: AttributeValue,
}

/// Attribute value as found on the wire.
///
/// The coordinator encodes the same logical metric sometimes as a numeric
/// literal and sometimes as a numeric string. Every other shape is kept
/// as-is so the dispatcher can name it in its diagnostic; a malformed value
/// never fails the surrounding payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(Value),
}

impl Default for AttributeValue {
    fn default() -> Self {
        AttributeValue::Other(Value::Null)
    }
}

impl AttributeValue {
    /// Normalize to f64.
    ///
    /// Total over every wire shape: numbers pass through, strings get a
    /// strict base-10 float parse, everything else is a [`CoerceError`].
    pub fn coerce(&self) -> Result<f64, CoerceError> {
        match self {
            AttributeValue::Number(n) => Ok(*n),
            AttributeValue::Text(s) => s
                .parse::<f64>()
                .map_err(|_| CoerceError::NonNumericString(s.clone())),
            AttributeValue::Bool(_) => Err(CoerceError::UnsupportedType("boolean")),
            AttributeValue::Other(v) => Err(CoerceError::UnsupportedType(shape_name(v))),
        }
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a response body into a payload.
///
/// An empty or absent body is a decode failure like any other malformed
/// input, never a silent empty payload.
pub fn parse_payload(body: &str) -> Result<MbeanPayload, CollectorError> {
    serde_json::from_str(body).map_err(|e| CollectorError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number_passes_through() {
        assert_eq!(AttributeValue::Number(3.14).coerce(), Ok(3.14));
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(AttributeValue::Text("42.5".to_string()).coerce(), Ok(42.5));
        assert_eq!(AttributeValue::Text("-1e3".to_string()).coerce(), Ok(-1000.0));
    }

    #[test]
    fn test_coerce_non_numeric_string_fails() {
        let err = AttributeValue::Text("not-a-number".to_string())
            .coerce()
            .unwrap_err();
        assert_eq!(err, CoerceError::NonNumericString("not-a-number".to_string()));
    }

    #[test]
    fn test_coerce_unsupported_shapes_fail() {
        assert_eq!(
            AttributeValue::Bool(true).coerce(),
            Err(CoerceError::UnsupportedType("boolean"))
        );
        assert_eq!(
            AttributeValue::Other(Value::Null).coerce(),
            Err(CoerceError::UnsupportedType("null"))
        );
        assert_eq!(
            AttributeValue::Other(json!([1, 2])).coerce(),
            Err(CoerceError::UnsupportedType("array"))
        );
        assert_eq!(
            AttributeValue::Other(json!({"used": 1})).coerce(),
            Err(CoerceError::UnsupportedType("object"))
        );
    }

    #[test]
    fn test_parse_payload() {
        let body = r#"{
            "className": "com.facebook.presto.execution.QueryManager",
            "attributes": [
                {"name": "RunningQueries", "value": 7},
                {"name": "ExecutionTime", "value": "42.5"}
            ]
        }"#;

        let payload = parse_payload(body).unwrap();
        assert_eq!(
            payload.class_name.as_deref(),
            Some("com.facebook.presto.execution.QueryManager")
        );
        assert_eq!(payload.attributes.len(), 2);
        assert_eq!(payload.attributes[0].name, "RunningQueries");
        assert_eq!(payload.attributes[0].value, AttributeValue::Number(7.0));
        assert_eq!(
            payload.attributes[1].value,
            AttributeValue::Text("42.5".to_string())
        );
    }

    #[test]
    fn test_parse_payload_ignores_extra_envelope_fields() {
        let body = r#"{
            "objectName": "presto.execution:name=QueryManager",
            "description": "n/a",
            "attributes": []
        }"#;

        let payload = parse_payload(body).unwrap();
        assert!(payload.class_name.is_none());
        assert!(payload.attributes.is_empty());
    }

    #[test]
    fn test_parse_payload_keeps_odd_attribute_values() {
        // One composite attribute must not fail the rest of the payload.
        let body = r#"{
            "attributes": [
                {"name": "HeapMemoryUsage", "value": {"used": 1, "max": 2}},
                {"name": "RunningQueries", "value": 3}
            ]
        }"#;

        let payload = parse_payload(body).unwrap();
        assert!(matches!(
            payload.attributes[0].value,
            AttributeValue::Other(_)
        ));
        assert_eq!(payload.attributes[1].value, AttributeValue::Number(3.0));
    }

    #[test]
    fn test_parse_payload_missing_value_becomes_null() {
        let body = r#"{"attributes": [{"name": "Orphan"}]}"#;

        let payload = parse_payload(body).unwrap();
        assert_eq!(
            payload.attributes[0].value.coerce(),
            Err(CoerceError::UnsupportedType("null"))
        );
    }

    #[test]
    fn test_parse_empty_body_fails() {
        assert!(matches!(parse_payload(""), Err(CollectorError::Decode(_))));
    }

    #[test]
    fn test_parse_wrong_shape_fails() {
        // Array instead of envelope object
        assert!(matches!(
            parse_payload("[1, 2, 3]"),
            Err(CollectorError::Decode(_))
        ));
        // Envelope without an attribute list
        assert!(matches!(
            parse_payload(r#"{"className": "x"}"#),
            Err(CollectorError::Decode(_))
        ));
    }
}
