//! Classification of wire text and decoded JSON values into typed messages.
//!
//! The classifier is a single pass over the decoded value: arrays take the
//! batch path, objects take the single-message path, anything else is an
//! invalid request. All failure payloads are built through
//! [`JsonRpcError`], so they are themselves valid protocol error responses
//! ready to be encoded back to the peer.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::JSONRPC_VERSION;
use crate::error::{JsonRpcError, ParserError};
use crate::message::JsonRpcMessage;
use crate::notification::JsonRpcNotification;
use crate::request::{JsonRpcRequest, RequestParams};
use crate::response::JsonRpcResponse;
use crate::types::{JsonRpcVersion, RequestId};

/// Parse a JSON-RPC message from wire text.
///
/// Decodes the text and defers to [`from_value`]. Syntactically invalid JSON
/// fails with a `-32700` Parse error carrying a `null` id.
pub fn parse(input: &str) -> Result<JsonRpcMessage, ParserError> {
    let value: Value = serde_json::from_str(input).map_err(|err| {
        debug!("message is not valid JSON: {err}");
        ParserError::new(JsonRpcError::parse_error())
    })?;
    from_value(value)
}

/// Classify an already-decoded JSON value as a JSON-RPC message.
pub fn from_value(value: Value) -> Result<JsonRpcMessage, ParserError> {
    match value {
        Value::Array(items) => classify_batch(items),
        other => classify_single(other),
    }
}

/// Batch path: every element is classified independently and in order, and a
/// per-element failure is stored in place of the element instead of aborting
/// its siblings. Only an empty batch fails the whole call.
fn classify_batch(items: Vec<Value>) -> Result<JsonRpcMessage, ParserError> {
    if items.is_empty() {
        debug!("rejecting empty batch");
        return Err(ParserError::new(JsonRpcError::invalid_request(None)));
    }
    trace!(len = items.len(), "classifying batch");
    Ok(JsonRpcMessage::Batch(
        items.into_iter().map(classify_single).collect(),
    ))
}

fn classify_single(value: Value) -> Result<JsonRpcMessage, ParserError> {
    match value {
        Value::Object(fields) => classify_object(fields),
        _ => {
            debug!("message is not an object or an array");
            Err(ParserError::new(JsonRpcError::invalid_request(None)))
        }
    }
}

fn classify_object(mut fields: Map<String, Value>) -> Result<JsonRpcMessage, ParserError> {
    // The only supported version is JSON-RPC 2.0. A mismatch is deliberately
    // reported as an internal error, not an invalid request; consumers depend
    // on the exact code.
    if fields.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        debug!("unsupported protocol version");
        return Err(ParserError::new(JsonRpcError::internal_error(message_id(
            &fields,
        ))));
    }

    if fields.get("method").is_some_and(is_truthy) {
        return classify_call(fields);
    }
    classify_reply(fields)
}

/// Request/notification path, split by the presence of an id.
///
/// Params are validated before the method name is typed: a call with both a
/// malformed method and malformed params reports the params failure.
fn classify_call(mut fields: Map<String, Value>) -> Result<JsonRpcMessage, ParserError> {
    let params = match fields.remove("params") {
        None => None,
        Some(raw) => Some(RequestParams::try_from(raw).map_err(|err| {
            debug!("rejecting call params: {err}");
            ParserError::new(JsonRpcError::invalid_params(message_id(&fields)))
        })?),
    };

    let method = match fields.remove("method") {
        Some(Value::String(method)) => method,
        _ => {
            debug!("method name is not a string");
            return Err(ParserError::new(JsonRpcError::invalid_request(
                message_id(&fields),
            )));
        }
    };

    let id = match fields.get("id") {
        Some(value) if is_truthy(value) => Some(RequestId::from_value(value).map_err(|err| {
            debug!("rejecting call id: {err}");
            ParserError::new(JsonRpcError::invalid_request(None))
        })?),
        _ => None,
    };

    trace!(method = %method, request = id.is_some(), "classified call");
    let message = match id {
        Some(id) => JsonRpcMessage::from(JsonRpcRequest {
            version: JsonRpcVersion::V2_0,
            id,
            method,
            params,
        }),
        None => JsonRpcMessage::from(JsonRpcNotification {
            version: JsonRpcVersion::V2_0,
            method,
            params,
        }),
    };
    Ok(message)
}

/// Response/error-response path: an id plus exactly one of `result`/`error`.
fn classify_reply(mut fields: Map<String, Value>) -> Result<JsonRpcMessage, ParserError> {
    let id = match fields.get("id") {
        Some(value) if is_truthy(value) => RequestId::from_value(value).map_err(|err| {
            debug!("rejecting reply id: {err}");
            ParserError::new(JsonRpcError::invalid_request(None))
        })?,
        _ => {
            debug!("reply carries no id");
            return Err(ParserError::new(JsonRpcError::invalid_request(None)));
        }
    };

    let has_result = fields.get("result").is_some_and(is_truthy);
    let has_error = fields.get("error").is_some_and(is_truthy);
    if has_result == has_error {
        debug!("reply must carry exactly one of result and error");
        return Err(ParserError::new(JsonRpcError::invalid_request(Some(id))));
    }

    if has_result {
        let result = fields.remove("result").unwrap_or(Value::Null);
        trace!(id = %id, "classified response");
        Ok(JsonRpcMessage::Response(JsonRpcResponse {
            version: JsonRpcVersion::V2_0,
            id,
            result,
        }))
    } else {
        // Passed through as supplied; only presence was checked.
        let error = fields.remove("error").unwrap_or(Value::Null);
        trace!(id = %id, "classified error response");
        Ok(JsonRpcMessage::Error { id, error })
    }
}

/// Identifier used for a failure payload: the message's own id when it is
/// present, truthy and representable, otherwise null.
fn message_id(fields: &Map<String, Value>) -> Option<RequestId> {
    fields
        .get("id")
        .filter(|value| is_truthy(value))
        .and_then(|value| RequestId::from_value(value).ok())
}

/// Presence tests on `id`, `method`, `result` and `error` are truthiness
/// tests: null, false, 0 and "" count as absent, arrays and objects always
/// count as present, empty or not.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
