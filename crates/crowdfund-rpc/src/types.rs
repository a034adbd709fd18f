use solana_sdk::pubkey::Pubkey;

use crate::config::Commitment;

/// A ledger account as returned by the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountData {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
    pub executable: bool,
}

impl AccountData {
    /// A non-executable account owned by `owner`.
    pub fn new(owner: Pubkey, lamports: u64, data: Vec<u8>) -> Self {
        Self {
            lamports,
            owner,
            data,
            executable: false,
        }
    }
}

/// Processing state of a broadcast transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureStatus {
    pub slot: u64,
    /// `None` while the node has seen the transaction but reports no level.
    pub confirmation_status: Option<Commitment>,
    /// Execution error reported by the ledger, if the transaction failed.
    pub err: Option<String>,
}

impl SignatureStatus {
    /// Whether the transaction has reached at least `required`.
    pub fn satisfies(&self, required: Commitment) -> bool {
        self.confirmation_status.is_some_and(|level| level >= required)
    }
}
