use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::config::Commitment;
use crate::error::RpcResult;
use crate::types::{AccountData, SignatureStatus};

/// Network operations the client needs from a ledger node.
///
/// Implementations hold no client-visible mutable state; independent calls
/// may run concurrently.
#[async_trait]
pub trait RpcConnection: Send + Sync {
    /// Commitment this connection reads and confirms at.
    fn commitment(&self) -> Commitment;

    /// Most recent blockhash bounding a new transaction's validity window.
    async fn get_latest_blockhash(&self) -> RpcResult<Hash>;

    /// Broadcast a signed transaction. Rejections are returned as-is.
    async fn send_transaction(&self, transaction: &Transaction) -> RpcResult<Signature>;

    /// Current status of a broadcast transaction, or `None` if the node has
    /// not seen it yet.
    async fn get_signature_status(&self, signature: &Signature) -> RpcResult<Option<SignatureStatus>>;

    /// Fetch one account. `None` if it does not exist.
    async fn get_account(&self, address: &Pubkey) -> RpcResult<Option<AccountData>>;

    /// All accounts owned by `program_id`, optionally only those whose data is
    /// exactly `data_size` bytes.
    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        data_size: Option<u64>,
    ) -> RpcResult<Vec<(Pubkey, AccountData)>>;
}

#[async_trait]
impl<T: RpcConnection + ?Sized> RpcConnection for Arc<T> {
    fn commitment(&self) -> Commitment {
        (**self).commitment()
    }

    async fn get_latest_blockhash(&self) -> RpcResult<Hash> {
        (**self).get_latest_blockhash().await
    }

    async fn send_transaction(&self, transaction: &Transaction) -> RpcResult<Signature> {
        (**self).send_transaction(transaction).await
    }

    async fn get_signature_status(&self, signature: &Signature) -> RpcResult<Option<SignatureStatus>> {
        (**self).get_signature_status(signature).await
    }

    async fn get_account(&self, address: &Pubkey) -> RpcResult<Option<AccountData>> {
        (**self).get_account(address).await
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        data_size: Option<u64>,
    ) -> RpcResult<Vec<(Pubkey, AccountData)>> {
        (**self).get_program_accounts(program_id, data_size).await
    }
}
