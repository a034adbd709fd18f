//! High-level client for the crowdfunding program.
//!
//! This is the entry point for applications. [`CrowdfundClient`] wraps an
//! [`RpcConnection`] and a [`ClientConfig`] and exposes campaign creation,
//! donation, and reads. The lower layers are public too:
//! [`TransactionSubmitter`] turns instructions into confirmed transactions,
//! and [`AccountDiscovery`] scans the program's accounts.

pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod retry;
pub mod submitter;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{CreatedCampaign, CrowdfundClient, Donation};
pub use config::{ClientConfig, DiscoveryConfig};
pub use discovery::AccountDiscovery;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use retry::RetryPolicy;
pub use submitter::TransactionSubmitter;

// Re-export key types
pub use crowdfund_rpc::{Commitment, HttpRpcClient, InMemoryLedger, RpcConfig, RpcConnection};
pub use crowdfund_signer::{DisconnectedSigner, KeypairSigner, TransactionSigner};
pub use crowdfund_types::{Campaign, CampaignDraft, Category, DonationRecord, Pubkey};
pub use solana_sdk::signature::Signature;
