//! Wallet daemon RPC abstraction layer.
//!
//! Defines the [`WalletRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::RpcRequest;

use async_trait::async_trait;

use crate::error::CoreError;

/// Minimal trait covering the single exchange the probe tooling needs.
///
/// Implementations own connection management and response body decoding.
/// They make no assumption about the shape of the decoded value: a
/// daemon-side error object is a successful call from the transport's point
/// of view and is returned verbatim, never raised. Each call is stateless
/// and independent; ordering between calls is entirely the caller's.
#[async_trait]
pub trait WalletRpc: Send + Sync {
    /// Send one request and return the decoded response body as-is.
    async fn call(&self, request: &RpcRequest) -> Result<serde_json::Value, CoreError>;
}
