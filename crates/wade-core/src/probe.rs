//! Scripted probe sequences against a wallet daemon.
//!
//! The transport passes response bodies through untouched, so anything that
//! interprets them (pulling the session token out of a login response and
//! chaining it into the balance lookup) lives here, on the caller side of
//! the [`WalletRpc`] seam.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::rpc::{RpcRequest, WalletRpc};

/// Raw responses collected by [`run_smoke`].
#[derive(Debug)]
pub struct SmokeOutcome {
    /// The login response body, verbatim.
    pub login: Value,
    /// The getBalance response body, verbatim. `None` when the login
    /// response carried no session token (wrong credentials, daemon error
    /// object, unexpected shape) so the balance call was never issued.
    pub balance: Option<Value>,
}

/// Log in with the supplied credentials, then query the balance with the
/// session token if the daemon issued one.
///
/// The two calls are strictly sequential; transport and decode failures
/// propagate immediately, while daemon-side error objects end up in the
/// outcome untouched.
pub async fn run_smoke(
    rpc: &dyn WalletRpc,
    address: &str,
    send_secret_key: &str,
    view_secret_key: &str,
) -> Result<SmokeOutcome, CoreError> {
    let login = rpc
        .call(&RpcRequest::login(
            address,
            send_secret_key,
            view_secret_key,
        ))
        .await?;

    let Some(token) = extract_token(&login) else {
        warn!("login response carried no session token; skipping balance call");
        return Ok(SmokeOutcome {
            login,
            balance: None,
        });
    };
    debug!(token_len = token.len(), "session token issued");

    let balance = rpc.call(&RpcRequest::get_balance(token)).await?;
    Ok(SmokeOutcome {
        login,
        balance: Some(balance),
    })
}

/// Pull the opaque session token out of a raw login response.
pub fn extract_token(login_response: &Value) -> Option<&str> {
    login_response.get("result")?.get("token")?.as_str()
}
