use thiserror::Error;

/// Errors from signing a transaction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("signer is not connected")]
    NotConnected,

    #[error("signer {signer} is not a required signer of the transaction")]
    NotRequired { signer: String },

    #[error("signing rejected: {0}")]
    Rejected(String),
}

pub type SignerResult<T> = Result<T, SignerError>;
