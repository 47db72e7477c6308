/// Failure of a single RPC exchange.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The HTTP round trip itself failed: connection refused, DNS failure,
    /// or an expired caller-imposed deadline.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The daemon answered, but the response body was not valid JSON.
    #[error("invalid JSON in RPC response: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),
}
