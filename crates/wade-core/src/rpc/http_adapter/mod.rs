//! HTTP implementation of the wallet daemon RPC abstraction.

mod client;
mod connection;

pub use client::HttpRpcClient;
