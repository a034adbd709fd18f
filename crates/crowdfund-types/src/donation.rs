use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Per-donation tracking record written by the program into the tracking
/// account passed to a donate instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub donor: Pubkey,
    /// Lamports transferred.
    pub amount: u64,
    /// Unix seconds.
    pub donated_at: i64,
    pub campaign: Pubkey,
}

impl DonationRecord {
    /// Encoded size: donor, amount, timestamp, campaign.
    pub const LEN: usize = 32 + 8 + 8 + 32;
}
