use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::super::types::RpcRequest;
use super::super::WalletRpc;
use super::connection::parse_connection;

/// Wallet daemon JSON-RPC client over HTTP(S).
///
/// Stateless apart from the connection pool inside `reqwest::Client`:
/// nothing is cached or retained between calls, so a shared instance can
/// issue concurrent calls without locking, and two identical calls against
/// a stateless server produce identical results.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: String,
}

impl HttpRpcClient {
    /// Create a new client for an HTTP URL.
    ///
    /// `connection` accepts `http://...` or `https://...`; other schemes are
    /// rejected up front.
    ///
    /// `timeout` is the caller-imposed deadline for each exchange, covering
    /// connect, send, and the full body read. `None` leaves the exchange
    /// unbounded; a caller that needs cancellation against a hung daemon
    /// must either set it here or wrap individual calls in its own deadline.
    pub fn new(connection: &str, timeout: Option<Duration>) -> Result<Self, CoreError> {
        let url = parse_connection(connection)?;

        let mut builder = reqwest::Client::builder().tcp_nodelay(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .expect("reqwest client builder uses valid static config");

        Ok(Self { client, url })
    }
}

#[async_trait]
impl WalletRpc for HttpRpcClient {
    async fn call(&self, request: &RpcRequest) -> Result<serde_json::Value, CoreError> {
        debug!(
            rpc.method = %request.method,
            rpc.params = request.params.len(),
            "rpc call"
        );

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(RpcError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.method = %request.method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = %request.method, body = %body, "rpc response body");

        // The daemon is free to pair any HTTP status with a JSON body; the
        // status line is not part of the protocol surface. Whatever decodes
        // is returned verbatim, daemon error objects included.
        let decoded = serde_json::from_str(&body)
            .map_err(|e| RpcError::Decode(format!("decode RPC response: {e}; body={body}")))?;

        Ok(decoded)
    }
}
