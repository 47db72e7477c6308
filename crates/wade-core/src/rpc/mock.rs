use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::CoreError;

use super::types::RpcRequest;
use super::WalletRpc;

/// A mock wallet daemon for testing. Returns canned response bodies from a
/// `HashMap` keyed by method name, populated via the builder pattern, and
/// records every request it receives so tests can assert on sequencing.
pub struct MockRpc {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            responses: HashMap::new(),
        }
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests
            .lock()
            .expect("mock request log must not be poisoned")
            .clone()
    }
}

pub struct MockRpcBuilder {
    responses: HashMap<String, Value>,
}

impl MockRpcBuilder {
    pub fn with_response(mut self, method: &str, response: Value) -> Self {
        self.responses.insert(method.to_owned(), response);
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            responses: self.responses,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WalletRpc for MockRpc {
    async fn call(&self, request: &RpcRequest) -> Result<Value, CoreError> {
        self.requests
            .lock()
            .expect("mock request log must not be poisoned")
            .push(request.clone());

        // Methods without a canned response get the daemon's own "method
        // not found" error object, which callers see as a normal body.
        Ok(self.responses.get(&request.method).cloned().unwrap_or_else(
            || json!({"error": {"code": -32601, "message": "Method not found"}}),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_response_is_returned_for_matching_method() {
        let rpc = MockRpc::builder()
            .with_response("login", json!({"result": {"token": "abc123"}}))
            .build();

        let body = rpc
            .call(&RpcRequest::login("addr", "send", "view"))
            .await
            .unwrap();
        assert_eq!(body, json!({"result": {"token": "abc123"}}));
    }

    #[tokio::test]
    async fn unknown_method_yields_error_object_not_failure() {
        let rpc = MockRpc::builder().build();

        let body = rpc
            .call(&RpcRequest::new("getStatus", serde_json::Map::new()))
            .await
            .unwrap();
        assert_eq!(body["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn requests_are_recorded_in_call_order() {
        let rpc = MockRpc::builder().build();

        rpc.call(&RpcRequest::login("addr", "send", "view"))
            .await
            .unwrap();
        rpc.call(&RpcRequest::get_balance("abc123")).await.unwrap();

        let seen = rpc.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].method, "login");
        assert_eq!(seen[1].method, "getBalance");
    }
}
