// ABOUTME: Decoding of the appliance's JSON replies.
// ABOUTME: Turns a non-empty `error` field into a domain error, otherwise returns the payload.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Reserved field carrying the appliance's rejection message.
pub const ERROR_FIELD: &str = "error";

/// Successful reply: the JSON object minus its `error` field.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    fields: Map<String, Value>,
}

impl Response {
    /// The conventional `data` payload, if the operation returned one.
    pub fn data(&self) -> Option<&Value> {
        self.fields.get("data")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Response> for Value {
    fn from(response: Response) -> Self {
        Value::Object(response.fields)
    }
}

/// Decode raw stdout into a [`Response`].
pub fn decode(raw: &[u8]) -> Result<Response> {
    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| Error::Protocol(format!("invalid JSON reply: {e}")))?;

    let Value::Object(mut fields) = value else {
        return Err(Error::Protocol(format!(
            "expected a JSON object, got {}",
            json_type(&value)
        )));
    };

    if let Some(message) = fields.remove(ERROR_FIELD).and_then(error_message) {
        return Err(Error::Domain(message));
    }

    Ok(Response { fields })
}

/// Message carried by a set `error` field; `None` for empty/falsy values.
fn error_message(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(ref n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(ref a) if a.is_empty() => None,
        Value::Object(ref o) if o.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_error_returns_payload() {
        let response = decode(br#"{"error": "", "data": [1, 2]}"#).unwrap();
        assert_eq!(response.data(), Some(&json!([1, 2])));
        assert!(response.get(ERROR_FIELD).is_none());
    }

    #[test]
    fn null_error_is_success() {
        let response = decode(br#"{"error": null}"#).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn absent_error_is_success() {
        let response = decode(br#"{"data": {"name": "tank"}}"#).unwrap();
        assert_eq!(response.data(), Some(&json!({"name": "tank"})));
    }

    #[test]
    fn non_empty_error_is_domain_error() {
        let err = decode(br#"{"error": "pool already exists", "data": 1}"#).unwrap_err();
        assert_eq!(err.domain_message(), Some("pool already exists"));
    }

    #[test]
    fn structured_error_renders_as_json() {
        let err = decode(br#"{"error": {"code": 5}}"#).unwrap_err();
        assert_eq!(err.domain_message(), Some(r#"{"code":5}"#));
    }

    #[test]
    fn falsy_error_values_are_success() {
        for raw in [
            &br#"{"error": false}"#[..],
            &br#"{"error": []}"#[..],
            &br#"{"error": {}}"#[..],
            &br#"{"error": 0}"#[..],
            &br#"{"error": 0.0}"#[..],
        ] {
            assert!(decode(raw).is_ok());
        }
    }

    #[test]
    fn nonzero_error_code_is_domain_error() {
        let err = decode(br#"{"error": 17}"#).unwrap_err();
        assert!(matches!(err, Error::Domain(ref m) if m == "17"), "{err:?}");
    }

    #[test]
    fn into_inner_yields_fields_without_error_key() {
        let fields = decode(br#"{"error": "", "data": [1, 2]}"#)
            .unwrap()
            .into_inner();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn malformed_json_is_protocol_error() {
        let err = decode(b"Usage: create_pool [OPTIONS]").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn non_object_is_protocol_error() {
        let err = decode(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::Protocol(ref m) if m.contains("array")));
    }

    #[test]
    fn invalid_utf8_is_protocol_error() {
        let err = decode(&[0xff, 0xfe, b'{', b'}']).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }
}
