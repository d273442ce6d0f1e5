//! # JSON-RPC 2.0 Message Layer
//!
//! A pure, transport-agnostic JSON-RPC 2.0 message layer. This crate classifies
//! decoded JSON values into the protocol's message kinds and constructs
//! spec-compliant messages from typed inputs, without any transport or dispatch
//! code.
//!
//! ## Features
//! - Full JSON-RPC 2.0 message shape validation
//! - Transport agnostic (works with HTTP, WebSocket, TCP, etc.)
//! - Batch classification with partial-failure semantics
//! - Reserved `"rpc."` prefix for internal methods
//! - Comprehensive error handling with canonical error codes
//!
//! ## Classifying inbound messages
//!
//! ```rust
//! use jsonrpc_parse::{parse, JsonRpcMessage};
//!
//! let message = parse(r#"{"jsonrpc":"2.0","id":1,"method":"sum","params":[1,2]}"#)?;
//! match message {
//!     JsonRpcMessage::Request(request) => assert_eq!(request.method, "sum"),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), jsonrpc_parse::ParserError>(())
//! ```

pub mod error;
pub mod message;
pub mod notification;
pub mod parser;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use error::{JsonRpcError, JsonRpcErrorCode, JsonRpcErrorObject, MessageError, ParserError};
pub use message::{BatchItem, JsonRpcMessage};
pub use notification::JsonRpcNotification;
pub use parser::{from_value, parse};
pub use request::{JsonRpcRequest, RequestParams};
pub use response::JsonRpcResponse;
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Reserved prefix carried by the method name of every internal message
pub const INTERNAL_METHOD_PREFIX: &str = "rpc.";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Server error range: -32099 to -32000
    pub const SERVER_ERROR_START: i64 = -32099;
    pub const SERVER_ERROR_END: i64 = -32000;
}
