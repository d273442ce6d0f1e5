//! # JSON-RPC Message Layer Prelude
//!
//! This module provides convenient re-exports of the most commonly used types
//! from the library.
//!
//! ```rust
//! use jsonrpc_parse::prelude::*;
//! ```

// Core JSON-RPC types
pub use crate::error::{
    JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject, MessageError, ParserError,
};
pub use crate::message::{BatchItem, JsonRpcMessage};
pub use crate::notification::JsonRpcNotification;
pub use crate::parser::{from_value, parse};
pub use crate::request::{JsonRpcRequest, RequestParams};
pub use crate::response::JsonRpcResponse;
pub use crate::types::{JsonRpcVersion, RequestId};

// Standard error codes
pub use crate::error_codes::*;
