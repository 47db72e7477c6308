//! Request types for the wallet daemon's JSON-RPC surface.
//!
//! Responses are deliberately untyped (`serde_json::Value`): the daemon
//! defines the response shapes and the probe passes them through verbatim,
//! so only the request side gets structure here.

use serde::Serialize;
use serde_json::{Map, Value};

/// A single wallet daemon RPC request.
///
/// The daemon's wire format is a bare `{"method": ..., "params": {...}}`
/// object; there is no JSON-RPC 2.0 envelope and no request id.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Map<String, Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// `login` request opening a wallet session.
    ///
    /// The address and keys are opaque caller-supplied strings; the client
    /// never parses or validates them. A successful response carries a
    /// session token under `result.token`.
    pub fn login(address: &str, send_secret_key: &str, view_secret_key: &str) -> Self {
        let mut params = Map::new();
        params.insert("address".to_owned(), Value::String(address.to_owned()));
        params.insert(
            "sendSecretKey".to_owned(),
            Value::String(send_secret_key.to_owned()),
        );
        params.insert(
            "viewSecretKey".to_owned(),
            Value::String(view_secret_key.to_owned()),
        );
        Self::new("login", params)
    }

    /// `getBalance` request for an existing session token.
    pub fn get_balance(token: &str) -> Self {
        let mut params = Map::new();
        params.insert("token".to_owned(), Value::String(token.to_owned()));
        Self::new("getBalance", params)
    }
}
