use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::INTERNAL_METHOD_PREFIX;
use crate::error::MessageError;
use crate::request::{RequestParams, normalize_method};
use crate::types::JsonRpcVersion;

/// A JSON-RPC notification (request without an id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<RequestParams>,
}

impl JsonRpcNotification {
    /// Create a new notification for an application-defined method
    pub fn new(method: &str, params: Option<RequestParams>) -> Result<Self, MessageError> {
        Self::build(method, params, false)
    }

    /// Create a new notification for an internal method, prepending the
    /// reserved prefix when missing
    pub fn new_internal(method: &str, params: Option<RequestParams>) -> Result<Self, MessageError> {
        Self::build(method, params, true)
    }

    fn build(
        method: &str,
        params: Option<RequestParams>,
        internal: bool,
    ) -> Result<Self, MessageError> {
        Ok(Self {
            version: JsonRpcVersion::V2_0,
            method: normalize_method(method, internal)?,
            params,
        })
    }

    /// Create a new notification with object parameters
    pub fn new_with_object_params(
        method: &str,
        params: HashMap<String, Value>,
    ) -> Result<Self, MessageError> {
        Self::new(method, Some(RequestParams::Object(params)))
    }

    /// Create a new notification with array parameters
    pub fn new_with_array_params(method: &str, params: Vec<Value>) -> Result<Self, MessageError> {
        Self::new(method, Some(RequestParams::Array(params)))
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
