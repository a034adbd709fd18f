use std::time::Duration;

use crowdfund_rpc::RpcConnection;
use crowdfund_signer::TransactionSigner;
use solana_sdk::instruction::Instruction;
use solana_sdk::signature::Signature;

use crate::error::{ClientError, ClientResult};
use crate::submitter::TransactionSubmitter;

/// How often to rebuild and resubmit after a stale-blockhash rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total submissions, including the first. Zero behaves like one.
    pub max_attempts: u32,
    /// Pause before each resubmission.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

impl<R: RpcConnection + ?Sized> TransactionSubmitter<'_, R> {
    /// [`submit`](Self::submit) with a deadline on the whole call.
    ///
    /// On expiry the local wait is abandoned. A transaction that was already
    /// broadcast may still land.
    pub async fn submit_with_timeout(
        &self,
        instructions: &[Instruction],
        signer: &dyn TransactionSigner,
        timeout: Duration,
    ) -> ClientResult<Signature> {
        tokio::time::timeout(timeout, self.submit(instructions, signer))
            .await
            .map_err(|_| ClientError::ConfirmationTimeout(timeout))?
    }

    /// [`submit`](Self::submit), rebuilding the transaction with a fresh
    /// blockhash whenever the ledger rejects the previous one as stale.
    ///
    /// Any other error is returned at once.
    pub async fn submit_with_retry(
        &self,
        instructions: &[Instruction],
        signer: &dyn TransactionSigner,
        policy: &RetryPolicy,
    ) -> ClientResult<Signature> {
        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.submit(instructions, signer).await {
                Err(err) if err.is_stale_blockhash() && attempt < max_attempts => {
                    tracing::warn!(attempt, max_attempts, error = %err, "stale blockhash, resubmitting");
                    tokio::time::sleep(policy.backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}
