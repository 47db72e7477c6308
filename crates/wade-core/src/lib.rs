pub mod error;
pub mod probe;
pub mod rpc;

pub use error::{CoreError, RpcError};
