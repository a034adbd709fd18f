use std::time::Duration;

use crowdfund_codec::DecodeError;
use crowdfund_instruction::InstructionError;
use crowdfund_rpc::RpcError;
use crowdfund_signer::SignerError;
use crowdfund_types::{Pubkey, TypeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("signer is not connected")]
    NotConnected,

    #[error("account {address} is not decodable: {source}")]
    Decode {
        address: Pubkey,
        #[source]
        source: DecodeError,
    },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] TypeError),

    #[error("invalid instruction: {0}")]
    Instruction(#[from] InstructionError),

    #[error("transaction is {size} bytes, limit is {limit}")]
    TransactionTooLarge { size: u64, limit: usize },

    #[error("network error: {0}")]
    Network(#[from] RpcError),

    #[error("signing failed: {0}")]
    Signing(#[from] SignerError),

    #[error("confirmation not observed within {0:?}")]
    ConfirmationTimeout(Duration),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse classification for callers deciding how to react to a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An account buffer was malformed or truncated.
    Decode,
    /// No signer was available; nothing was sent.
    Precondition,
    /// Transport failure or remote rejection.
    Network,
    /// The caller's wait for confirmation ran out.
    ConfirmationTimeout,
    /// Local input or configuration checks failed; nothing was sent.
    Validation,
    /// The signer refused or failed to sign.
    Signing,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConnected | Self::Signing(SignerError::NotConnected) => ErrorKind::Precondition,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidInput(_)
            | Self::Instruction(_)
            | Self::TransactionTooLarge { .. }
            | Self::Config(_) => ErrorKind::Validation,
            Self::Network(_) | Self::Internal(_) => ErrorKind::Network,
            Self::Signing(_) => ErrorKind::Signing,
            Self::ConfirmationTimeout(_) => ErrorKind::ConfirmationTimeout,
        }
    }

    /// Returns `true` when the ledger rejected the transaction's blockhash as
    /// stale and a rebuilt transaction may succeed.
    pub fn is_stale_blockhash(&self) -> bool {
        matches!(self, Self::Network(err) if err.is_stale_blockhash())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
