//! Foundation types for the crowdfunding client.
//!
//! This crate holds the record model shared by every other crate in the
//! workspace. Records are always reads of remote, externally mutated ledger
//! accounts; nothing here talks to the network.
//!
//! # Key Types
//!
//! - [`Campaign`]: Validated, immutable campaign record
//! - [`CampaignParts`]: Plain field bag used to build or take apart a [`Campaign`]
//! - [`CampaignDraft`]: Application input for creating a campaign
//! - [`Category`]: Fixed eight-entry campaign category list
//! - [`DonationRecord`]: Per-donation tracking record
//! - [`units`]: SOL / lamport conversion

pub mod campaign;
pub mod category;
pub mod donation;
pub mod error;
pub mod units;

pub use campaign::{Campaign, CampaignDraft, CampaignParts};
pub use category::Category;
pub use donation::DonationRecord;
pub use error::TypeError;
pub use units::{lamports_to_sol, parse_sol, sol_to_lamports, LAMPORTS_PER_SOL};

pub use solana_sdk::pubkey::Pubkey;
