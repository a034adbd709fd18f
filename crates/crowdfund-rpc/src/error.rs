use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("remote error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("blockhash not found: {0}")]
    BlockhashNotFound(String),

    #[error("transaction {signature} failed: {reason}")]
    TransactionFailed { signature: String, reason: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl RpcError {
    /// Classify a JSON-RPC error object reported by the node.
    pub fn from_remote(code: i64, message: String) -> Self {
        if message.contains("Blockhash not found") {
            Self::BlockhashNotFound(message)
        } else {
            Self::Remote { code, message }
        }
    }

    /// Returns `true` when the rejection was caused by a stale blockhash and
    /// a rebuilt transaction may succeed.
    pub fn is_stale_blockhash(&self) -> bool {
        matches!(self, Self::BlockhashNotFound(_))
    }
}

pub type RpcResult<T> = Result<T, RpcError>;
