use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::MessageError;

/// JSON-RPC protocol version marker
///
/// Only version 2.0 exists; the enum keeps the `jsonrpc` field type-safe while
/// serializing to the literal string `"2.0"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonRpcVersion {
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

impl fmt::Display for JsonRpcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::JSONRPC_VERSION)
    }
}

/// Identifier correlating a request with its response
///
/// The specification allows strings and integer numbers. Fractional numbers
/// and empty strings are rejected by [`RequestId::from_value`] and by the
/// message constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

impl RequestId {
    /// Convert a raw decoded JSON value into an identifier.
    pub fn from_value(value: &Value) -> Result<Self, MessageError> {
        match value {
            Value::Number(n) => n.as_i64().map(RequestId::Number).ok_or_else(|| {
                MessageError::InvalidIdentifier(format!(
                    "id should be a string or an integer number, \"{n}\" given"
                ))
            }),
            Value::String(s) if !s.is_empty() => Ok(RequestId::String(s.clone())),
            Value::String(_) => Err(MessageError::InvalidIdentifier(
                "id should not be an empty string".to_string(),
            )),
            other => Err(MessageError::InvalidIdentifier(format!(
                "id should be a string or an integer number, \"{other}\" given"
            ))),
        }
    }

    /// Check that a typed identifier still satisfies the wire constraints.
    ///
    /// The only value representable by the type but invalid on the wire is an
    /// empty string.
    pub(crate) fn validate(&self) -> Result<(), MessageError> {
        match self {
            RequestId::String(s) if s.is_empty() => Err(MessageError::InvalidIdentifier(
                "id should not be an empty string".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::String(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_serializes_to_literal() {
        let json = serde_json::to_string(&JsonRpcVersion::V2_0).unwrap();
        assert_eq!(json, "\"2.0\"");
    }

    #[test]
    fn test_id_from_integer_and_string() {
        assert_eq!(
            RequestId::from_value(&json!(0)).unwrap(),
            RequestId::Number(0)
        );
        assert_eq!(
            RequestId::from_value(&json!(-1)).unwrap(),
            RequestId::Number(-1)
        );
        assert_eq!(
            RequestId::from_value(&json!("x")).unwrap(),
            RequestId::String("x".to_string())
        );
    }

    #[test]
    fn test_id_rejects_fractional_numbers() {
        assert!(matches!(
            RequestId::from_value(&json!(1.5)),
            Err(MessageError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_id_rejects_empty_string_and_other_types() {
        for value in [json!(""), json!(true), json!(null), json!([1]), json!({})] {
            assert!(matches!(
                RequestId::from_value(&value),
                Err(MessageError::InvalidIdentifier(_))
            ));
        }
    }

    #[test]
    fn test_id_untagged_serialization() {
        assert_eq!(serde_json::to_value(RequestId::Number(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(RequestId::from("req1")).unwrap(),
            json!("req1")
        );
    }
}
