use std::time::Duration;

use crowdfund_rpc::{RpcConnection, RpcError};
use crowdfund_signer::TransactionSigner;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::packet::PACKET_DATA_SIZE;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::error::{ClientError, ClientResult};

/// Assembles instructions into a transaction, has it signed, broadcasts it,
/// and waits for confirmation at the connection's commitment.
///
/// Waiting has no deadline of its own. See [`submit_with_timeout`] and
/// [`submit_with_retry`] for bounded and retrying variants.
///
/// [`submit_with_timeout`]: TransactionSubmitter::submit_with_timeout
/// [`submit_with_retry`]: TransactionSubmitter::submit_with_retry
pub struct TransactionSubmitter<'a, R: ?Sized> {
    rpc: &'a R,
    poll_interval: Duration,
}

impl<'a, R: RpcConnection + ?Sized> TransactionSubmitter<'a, R> {
    pub fn new(rpc: &'a R, poll_interval: Duration) -> Self {
        Self { rpc, poll_interval }
    }

    /// Submit `instructions` paid for by `signer` and return the transaction
    /// signature once confirmed.
    ///
    /// A disconnected signer or an oversized transaction fails before any
    /// network call. Broadcast rejections are returned unmodified and never
    /// retried here.
    pub async fn submit(
        &self,
        instructions: &[Instruction],
        signer: &dyn TransactionSigner,
    ) -> ClientResult<Signature> {
        let payer = signer.pubkey().ok_or(ClientError::NotConnected)?;
        let mut transaction = Transaction::new_unsigned(Message::new(instructions, Some(&payer)));
        check_packet_size(&transaction)?;

        let blockhash = self.rpc.get_latest_blockhash().await?;
        transaction.message.recent_blockhash = blockhash;
        tracing::debug!(%payer, %blockhash, instructions = instructions.len(), "transaction assembled");

        let signed = signer.sign_transaction(transaction).await?;
        let signature = self.rpc.send_transaction(&signed).await?;
        tracing::debug!(%signature, "transaction broadcast");

        self.confirm(&signature).await?;
        tracing::info!(%signature, commitment = %self.rpc.commitment(), "transaction confirmed");
        Ok(signature)
    }

    /// Poll until `signature` reaches the connection's commitment or the
    /// ledger reports an execution error.
    pub async fn confirm(&self, signature: &Signature) -> ClientResult<()> {
        let required = self.rpc.commitment();
        loop {
            if let Some(status) = self.rpc.get_signature_status(signature).await? {
                if let Some(reason) = status.err {
                    tracing::warn!(%signature, %reason, "transaction failed");
                    return Err(RpcError::TransactionFailed {
                        signature: signature.to_string(),
                        reason,
                    }
                    .into());
                }
                if status.satisfies(required) {
                    return Ok(());
                }
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Reject transactions that would not fit in a single ledger packet.
fn check_packet_size(transaction: &Transaction) -> ClientResult<()> {
    let size = bincode::serialized_size(transaction).map_err(|e| ClientError::Internal(e.to_string()))?;
    if size > PACKET_DATA_SIZE as u64 {
        return Err(ClientError::TransactionTooLarge {
            size,
            limit: PACKET_DATA_SIZE,
        });
    }
    Ok(())
}
