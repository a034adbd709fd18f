//! Signer capability for the crowdfunding client.
//!
//! A signer exposes the public key that pays for and authorizes a
//! transaction, and turns an unsigned transaction into a signed one. Wallet
//! integrations implement [`TransactionSigner`]; [`KeypairSigner`] holds a
//! local key pair and [`DisconnectedSigner`] stands in for a wallet that has
//! not been connected yet.

pub mod error;
pub mod signer;

pub use error::{SignerError, SignerResult};
pub use signer::{DisconnectedSigner, KeypairSigner, TransactionSigner};
