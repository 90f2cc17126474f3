//! Wire shapes of the three node dialects.

mod node_response;
mod rest_request;
mod rpc_request;

pub use node_response::NodeResponse;
pub(crate) use node_response::{RestResponse, WsResponse};
pub use rest_request::{RestRequest, WsRequest};
pub use rpc_request::RpcRequest;

/// API version sent with REST and WebSocket requests.
pub const API_VERSION: &str = "1.0.0";
