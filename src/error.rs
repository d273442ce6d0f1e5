use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::error_codes;
use crate::types::{JsonRpcVersion, RequestId};

/// Fallback text for codes missing from the registry
const FALLBACK_ERROR_MESSAGE: &str = "Internal Server Error";

/// Fixed registry mapping canonical codes to their message text
const ERROR_REGISTRY: &[(i64, &str)] = &[
    (error_codes::PARSE_ERROR, "Parse error"),
    (error_codes::INVALID_REQUEST, "Invalid request"),
    (error_codes::METHOD_NOT_FOUND, "Method not found"),
    (error_codes::INVALID_PARAMS, "Invalid params"),
    (error_codes::INTERNAL_ERROR, "Internal error"),
];

/// JSON-RPC error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonRpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    ServerError(i64), // -32099 to -32000
}

impl JsonRpcErrorCode {
    pub fn code(&self) -> i64 {
        match self {
            JsonRpcErrorCode::ParseError => error_codes::PARSE_ERROR,
            JsonRpcErrorCode::InvalidRequest => error_codes::INVALID_REQUEST,
            JsonRpcErrorCode::MethodNotFound => error_codes::METHOD_NOT_FOUND,
            JsonRpcErrorCode::InvalidParams => error_codes::INVALID_PARAMS,
            JsonRpcErrorCode::InternalError => error_codes::INTERNAL_ERROR,
            JsonRpcErrorCode::ServerError(code) => *code,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            JsonRpcErrorCode::ServerError(_) => "Server error",
            _ => default_message(self.code()),
        }
    }

    /// Map a wire code back to its variant, if it is one the protocol defines.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            error_codes::PARSE_ERROR => Some(JsonRpcErrorCode::ParseError),
            error_codes::INVALID_REQUEST => Some(JsonRpcErrorCode::InvalidRequest),
            error_codes::METHOD_NOT_FOUND => Some(JsonRpcErrorCode::MethodNotFound),
            error_codes::INVALID_PARAMS => Some(JsonRpcErrorCode::InvalidParams),
            error_codes::INTERNAL_ERROR => Some(JsonRpcErrorCode::InternalError),
            code if (error_codes::SERVER_ERROR_START..=error_codes::SERVER_ERROR_END)
                .contains(&code) =>
            {
                Some(JsonRpcErrorCode::ServerError(code))
            }
            _ => None,
        }
    }
}

impl fmt::Display for JsonRpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Resolve the canonical message for a code, scanning the fixed registry.
fn default_message(code: i64) -> &'static str {
    ERROR_REGISTRY
        .iter()
        .find(|(registered, _)| *registered == code)
        .map(|(_, message)| *message)
        .unwrap_or(FALLBACK_ERROR_MESSAGE)
}

/// Failures raised by the message constructors
///
/// Construction is all-or-nothing: every violation raises immediately to the
/// direct caller, there is no partial message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("invalid message id: {0}")]
    InvalidIdentifier(String),
    #[error("invalid method name: {0}")]
    InvalidMethod(String),
    #[error("invalid params: {0}")]
    InvalidParams(String),
    #[error("response result is not defined")]
    MissingResult,
    #[error("invalid error code: {0}")]
    InvalidErrorCode(String),
    #[error("error message should be a string")]
    InvalidErrorMessage,
}

/// JSON-RPC Error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcErrorObject {
    pub fn new(code: JsonRpcErrorCode, message: Option<String>, data: Option<Value>) -> Self {
        Self {
            code: code.code(),
            message: message.unwrap_or_else(|| code.message().to_string()),
            data,
        }
    }

    /// Build an error object from a bare wire code, resolving the message
    /// through the registry.
    pub fn from_code(code: i64, data: Option<Value>) -> Self {
        Self {
            code,
            message: default_message(code).to_string(),
            data,
        }
    }

    /// Build an error object from a raw decoded value: either a bare integer
    /// code or an object carrying `code` and an optional `message`.
    ///
    /// `data`, when supplied, is attached to the object's `data` field. Any
    /// JSON value is accepted there, structured or not.
    pub fn from_value(raw: &Value, data: Option<Value>) -> Result<Self, MessageError> {
        let (code_value, message) = match raw {
            Value::Number(_) => (raw, None),
            Value::Object(fields) => {
                let message = match fields.get("message") {
                    None => None,
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(_) => return Err(MessageError::InvalidErrorMessage),
                };
                (fields.get("code").unwrap_or(&Value::Null), message)
            }
            other => {
                return Err(MessageError::InvalidErrorCode(format!(
                    "error code should be an integer number or an object with \
                     \"code\" and \"message\" properties, \"{other}\" given"
                )));
            }
        };
        let code = code_value.as_i64().ok_or_else(|| {
            MessageError::InvalidErrorCode(format!(
                "error code should be an integer value, \"{code_value}\" given"
            ))
        })?;

        Ok(Self {
            code,
            message: message.unwrap_or_else(|| default_message(code).to_string()),
            data,
        })
    }
}

/// JSON-RPC Error response
///
/// `id` is `None` for failures detected before any identifier is known (for
/// example a global parse error); it serializes as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: Option<RequestId>,
    pub error: JsonRpcErrorObject,
}

impl JsonRpcError {
    pub fn new(id: Option<RequestId>, error: JsonRpcErrorObject) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            error,
        }
    }

    /// Build an error response from a wire code, validating the identifier and
    /// resolving the message through the registry.
    pub fn with_code(
        id: Option<RequestId>,
        code: i64,
        details: Option<Value>,
    ) -> Result<Self, MessageError> {
        if let Some(id) = &id {
            id.validate()?;
        }
        Ok(Self::new(id, JsonRpcErrorObject::from_code(code, details)))
    }

    pub fn parse_error() -> Self {
        Self::new(None, JsonRpcErrorObject::from_code(error_codes::PARSE_ERROR, None))
    }

    pub fn invalid_request(id: Option<RequestId>) -> Self {
        Self::new(id, JsonRpcErrorObject::from_code(error_codes::INVALID_REQUEST, None))
    }

    pub fn method_not_found(id: RequestId, method: &str) -> Self {
        Self::new(
            Some(id),
            JsonRpcErrorObject {
                code: error_codes::METHOD_NOT_FOUND,
                message: format!("Method \"{method}\" not found"),
                data: None,
            },
        )
    }

    pub fn invalid_params(id: Option<RequestId>) -> Self {
        Self::new(id, JsonRpcErrorObject::from_code(error_codes::INVALID_PARAMS, None))
    }

    pub fn internal_error(id: Option<RequestId>) -> Self {
        Self::new(id, JsonRpcErrorObject::from_code(error_codes::INTERNAL_ERROR, None))
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JSON-RPC Error {}: {}",
            self.error.code, self.error.message
        )
    }
}

impl std::error::Error for JsonRpcError {}

/// Classification failure
///
/// Carries the protocol error response to send back to the peer. Batch
/// classification stores it inline in place of the failed element, so it is a
/// plain value as much as an error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to parse JSON-RPC message: {error}")]
pub struct ParserError {
    /// Error response describing why classification failed
    pub error: JsonRpcError,
}

impl ParserError {
    pub fn new(error: JsonRpcError) -> Self {
        Self { error }
    }

    /// Wire code of the underlying protocol error
    pub fn code(&self) -> i64 {
        self.error.error.code
    }

    /// Identifier the failure is associated with, when one was recoverable
    pub fn id(&self) -> Option<&RequestId> {
        self.error.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        assert_eq!(JsonRpcErrorCode::ParseError.code(), -32700);
        assert_eq!(JsonRpcErrorCode::MethodNotFound.code(), -32601);
        assert_eq!(JsonRpcErrorCode::from_code(-32602), Some(JsonRpcErrorCode::InvalidParams));
        assert_eq!(
            JsonRpcErrorCode::from_code(-32050),
            Some(JsonRpcErrorCode::ServerError(-32050))
        );
        assert_eq!(JsonRpcErrorCode::from_code(42), None);
    }

    #[test]
    fn test_registry_lookup_with_fallback() {
        let known = JsonRpcErrorObject::from_code(-32600, None);
        assert_eq!(known.message, "Invalid request");

        let unknown = JsonRpcErrorObject::from_code(123, None);
        assert_eq!(unknown.message, "Internal Server Error");
    }

    #[test]
    fn test_error_object_from_typed_code() {
        let defaulted = JsonRpcErrorObject::new(JsonRpcErrorCode::InvalidParams, None, None);
        assert_eq!(defaulted.code, -32602);
        assert_eq!(defaulted.message, "Invalid params");

        let custom = JsonRpcErrorObject::new(
            JsonRpcErrorCode::ServerError(-32000),
            Some("backend down".to_string()),
            None,
        );
        assert_eq!(custom.code, -32000);
        assert_eq!(custom.message, "backend down");
    }

    #[test]
    fn test_error_object_from_bare_code_value() {
        let error = JsonRpcErrorObject::from_value(&json!(-32700), None).unwrap();
        assert_eq!(error.code, -32700);
        assert_eq!(error.message, "Parse error");
        assert_eq!(error.data, None);
    }

    #[test]
    fn test_error_object_from_object_value() {
        let error = JsonRpcErrorObject::from_value(
            &json!({"code": 123, "message": "custom"}),
            Some(json!({"detail": true})),
        )
        .unwrap();
        assert_eq!(error.code, 123);
        assert_eq!(error.message, "custom");
        assert_eq!(error.data, Some(json!({"detail": true})));
    }

    #[test]
    fn test_error_object_rejects_non_integer_codes() {
        for raw in [json!(2.3), json!("abc"), json!(true), json!([1, 2]), json!({})] {
            assert!(matches!(
                JsonRpcErrorObject::from_value(&raw, None),
                Err(MessageError::InvalidErrorCode(_))
            ));
        }
        assert!(matches!(
            JsonRpcErrorObject::from_value(&json!({"code": "abc"}), None),
            Err(MessageError::InvalidErrorCode(_))
        ));
    }

    #[test]
    fn test_error_object_rejects_non_string_message() {
        assert_eq!(
            JsonRpcErrorObject::from_value(&json!({"code": 1, "message": 5}), None),
            Err(MessageError::InvalidErrorMessage)
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = JsonRpcError::parse_error();
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {"code": -32700, "message": "Parse error"}
            })
        );
    }

    #[test]
    fn test_with_code_rejects_empty_string_id() {
        assert!(matches!(
            JsonRpcError::with_code(Some(RequestId::from("")), 123, None),
            Err(MessageError::InvalidIdentifier(_))
        ));
        assert!(JsonRpcError::with_code(None, 123, None).is_ok());
        assert!(JsonRpcError::with_code(Some(RequestId::Number(1)), 123, None).is_ok());
    }

    #[test]
    fn test_method_not_found_serialization() {
        let error = JsonRpcError::method_not_found(RequestId::Number(1), "test");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("Method \\\"test\\\" not found"));
    }
}
