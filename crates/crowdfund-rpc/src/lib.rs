//! Ledger RPC access for the crowdfunding client.
//!
//! [`RpcConnection`] is the seam every network operation goes through.
//! [`HttpRpcClient`] speaks JSON-RPC 2.0 to a ledger node; [`InMemoryLedger`]
//! is a deterministic stand-in for tests and embedding.

pub mod config;
pub mod connection;
pub mod error;
pub mod http;
pub mod jsonrpc;
pub mod memory;
pub mod types;

pub use config::{Commitment, RpcConfig};
pub use connection::RpcConnection;
pub use error::{RpcError, RpcResult};
pub use http::HttpRpcClient;
pub use memory::{InMemoryLedger, TransactionExecutor};
pub use types::{AccountData, SignatureStatus};
