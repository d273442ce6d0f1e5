use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::INTERNAL_METHOD_PREFIX;
use crate::error::MessageError;
use crate::types::{JsonRpcVersion, RequestId};

/// Parameters for a JSON-RPC request
///
/// The specification restricts `params` to structured values; the type makes a
/// scalar unrepresentable. Use [`RequestParams::try_from`] to validate a raw
/// decoded value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// Positional parameters as an array
    Array(Vec<Value>),
    /// Named parameters as an object
    Object(HashMap<String, Value>),
}

impl RequestParams {
    /// Get a parameter by name (for object params)
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            RequestParams::Object(map) => map.get(key),
            RequestParams::Array(_) => None, // Can't get by name from array
        }
    }

    /// Get a parameter by index (for array params only)
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            RequestParams::Array(vec) => vec.get(index),
            RequestParams::Object(_) => None, // Can't get by index from object
        }
    }

    /// Check if parameters are empty
    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Object(map) => map.is_empty(),
            RequestParams::Array(vec) => vec.is_empty(),
        }
    }

    /// Convert to a serde_json::Value for serialization
    pub fn to_value(&self) -> Value {
        match self {
            RequestParams::Object(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            RequestParams::Array(arr) => Value::Array(arr.clone()),
        }
    }
}

impl TryFrom<Value> for RequestParams {
    type Error = MessageError;

    fn try_from(value: Value) -> Result<Self, MessageError> {
        match value {
            Value::Array(items) => Ok(RequestParams::Array(items)),
            Value::Object(map) => Ok(RequestParams::Object(map.into_iter().collect())),
            other => Err(MessageError::InvalidParams(format!(
                "params must be a structured value (an array or an object), \"{other}\" given"
            ))),
        }
    }
}

impl From<HashMap<String, Value>> for RequestParams {
    fn from(map: HashMap<String, Value>) -> Self {
        RequestParams::Object(map)
    }
}

impl From<Vec<Value>> for RequestParams {
    fn from(vec: Vec<Value>) -> Self {
        RequestParams::Array(vec)
    }
}

/// Validate a method name and normalize the internal prefix.
///
/// Internal methods gain the reserved prefix when missing; non-internal
/// methods must not carry it at all.
pub(crate) fn normalize_method(method: &str, internal: bool) -> Result<String, MessageError> {
    if method.trim().is_empty() {
        return Err(MessageError::InvalidMethod(
            "method name should not be empty".to_string(),
        ));
    }
    let prefixed = method.starts_with(INTERNAL_METHOD_PREFIX);
    if internal {
        if prefixed {
            Ok(method.to_string())
        } else {
            Ok(format!("{INTERNAL_METHOD_PREFIX}{method}"))
        }
    } else if prefixed {
        Err(MessageError::InvalidMethod(format!(
            "invalid method name \"{method}\": only internal methods can be prefixed \
             with \"{INTERNAL_METHOD_PREFIX}\""
        )))
    } else {
        Ok(method.to_string())
    }
}

/// A JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcRequest {
    /// Create a new request for an application-defined method
    pub fn new(
        id: RequestId,
        method: &str,
        params: Option<RequestParams>,
    ) -> Result<Self, MessageError> {
        Self::build(id, method, params, false)
    }

    /// Create a new request for an internal method, prepending the reserved
    /// prefix when missing
    pub fn new_internal(
        id: RequestId,
        method: &str,
        params: Option<RequestParams>,
    ) -> Result<Self, MessageError> {
        Self::build(id, method, params, true)
    }

    fn build(
        id: RequestId,
        method: &str,
        params: Option<RequestParams>,
        internal: bool,
    ) -> Result<Self, MessageError> {
        id.validate()?;
        Ok(Self {
            version: JsonRpcVersion::V2_0,
            id,
            method: normalize_method(method, internal)?,
            params,
        })
    }

    /// Create a new request with object parameters
    pub fn new_with_object_params(
        id: RequestId,
        method: &str,
        params: HashMap<String, Value>,
    ) -> Result<Self, MessageError> {
        Self::new(id, method, Some(RequestParams::Object(params)))
    }

    /// Create a new request with array parameters
    pub fn new_with_array_params(
        id: RequestId,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Self, MessageError> {
        Self::new(id, method, Some(RequestParams::Array(params)))
    }

    /// Whether the method carries the reserved internal prefix
    pub fn is_internal(&self) -> bool {
        self.method.starts_with(INTERNAL_METHOD_PREFIX)
    }

    /// Get a parameter by name (if params are an object)
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    /// Get a parameter by index (if params are an array)
    pub fn get_param_index(&self, index: usize) -> Option<&Value> {
        self.params.as_ref()?.get_index(index)
    }
}
