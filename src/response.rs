use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MessageError;
use crate::types::{JsonRpcVersion, RequestId};

/// A successful JSON-RPC response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    /// Create a new response.
    ///
    /// `result` is `None` when the caller has no result at all, which is a
    /// [`MessageError::MissingResult`] failure. An explicit `null`, `0`,
    /// `false` or `""` is a valid result and succeeds.
    pub fn new(id: RequestId, result: Option<Value>) -> Result<Self, MessageError> {
        id.validate()?;
        let result = result.ok_or(MessageError::MissingResult)?;
        Ok(Self {
            version: JsonRpcVersion::V2_0,
            id,
            result,
        })
    }

    /// Create a response from an always-present result value
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json, to_string};

    #[test]
    fn test_response_serialization() {
        let response = JsonRpcResponse::success(RequestId::Number(1), json!({"result": "success"}));

        let json_str = to_string(&response).unwrap();
        let parsed: JsonRpcResponse = from_str(&json_str).unwrap();

        assert_eq!(parsed.id, RequestId::Number(1));
        assert_eq!(parsed.result, json!({"result": "success"}));
    }

    #[test]
    fn test_missing_result_fails() {
        assert_eq!(
            JsonRpcResponse::new(RequestId::Number(1), None),
            Err(MessageError::MissingResult)
        );
    }

    #[test]
    fn test_falsy_results_are_valid() {
        for result in [json!(null), json!(0), json!(false), json!("")] {
            let response = JsonRpcResponse::new(RequestId::Number(1), Some(result.clone())).unwrap();
            assert_eq!(response.result, result);
        }
    }

    #[test]
    fn test_response_rejects_empty_string_id() {
        assert!(matches!(
            JsonRpcResponse::new(RequestId::from(""), Some(json!(1))),
            Err(MessageError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_response_wire_shape() {
        let response = JsonRpcResponse::success(RequestId::from("abc"), json!([1, 2]));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"jsonrpc": "2.0", "id": "abc", "result": [1, 2]})
        );
    }
}
