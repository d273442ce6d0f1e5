use serde_json::Value;

use crate::error::ParserError;
use crate::notification::JsonRpcNotification;
use crate::request::JsonRpcRequest;
use crate::response::JsonRpcResponse;
use crate::types::RequestId;

/// One element of a classified batch: a message, or the failure that replaced
/// it when the element could not be classified
pub type BatchItem = Result<JsonRpcMessage, ParserError>;

/// A classified JSON-RPC message
///
/// Produced by [`crate::parse`] / [`crate::from_value`]. Internal variants are
/// distinguished purely by the reserved method prefix; the wire format is
/// identical to their plain counterparts.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonRpcMessage {
    /// Call expecting a response
    Request(JsonRpcRequest),
    /// Call on a reserved `rpc.`-prefixed method
    InternalRequest(JsonRpcRequest),
    /// Call expecting no response
    Notification(JsonRpcNotification),
    /// Notification on a reserved `rpc.`-prefixed method
    InternalNotification(JsonRpcNotification),
    /// Successful reply
    Response(JsonRpcResponse),
    /// Error reply; the error object is passed through exactly as supplied on
    /// the wire, without re-validation
    Error { id: RequestId, error: Value },
    /// Array of independently classified messages, failures kept in place
    Batch(Vec<BatchItem>),
}

impl JsonRpcMessage {
    /// Identifier of the message, for the kinds that carry one
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            JsonRpcMessage::Request(request) | JsonRpcMessage::InternalRequest(request) => {
                Some(&request.id)
            }
            JsonRpcMessage::Response(response) => Some(&response.id),
            JsonRpcMessage::Error { id, .. } => Some(id),
            JsonRpcMessage::Notification(_)
            | JsonRpcMessage::InternalNotification(_)
            | JsonRpcMessage::Batch(_) => None,
        }
    }

    /// Method name, for request- and notification-shaped messages
    pub fn method(&self) -> Option<&str> {
        match self {
            JsonRpcMessage::Request(request) | JsonRpcMessage::InternalRequest(request) => {
                Some(&request.method)
            }
            JsonRpcMessage::Notification(notification)
            | JsonRpcMessage::InternalNotification(notification) => Some(&notification.method),
            _ => None,
        }
    }

    /// Whether this is one of the internal (reserved-prefix) kinds
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            JsonRpcMessage::InternalRequest(_) | JsonRpcMessage::InternalNotification(_)
        )
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, JsonRpcMessage::Batch(_))
    }
}

impl From<JsonRpcRequest> for JsonRpcMessage {
    fn from(request: JsonRpcRequest) -> Self {
        if request.is_internal() {
            JsonRpcMessage::InternalRequest(request)
        } else {
            JsonRpcMessage::Request(request)
        }
    }
}

impl From<JsonRpcNotification> for JsonRpcMessage {
    fn from(notification: JsonRpcNotification) -> Self {
        if notification.is_internal() {
            JsonRpcMessage::InternalNotification(notification)
        } else {
            JsonRpcMessage::Notification(notification)
        }
    }
}

impl From<JsonRpcResponse> for JsonRpcMessage {
    fn from(response: JsonRpcResponse) -> Self {
        JsonRpcMessage::Response(response)
    }
}
