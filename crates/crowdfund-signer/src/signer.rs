use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;

use crate::error::{SignerError, SignerResult};

/// External signing capability.
///
/// `pubkey` returns `None` while no key pair is available; callers treat
/// that as a precondition failure and make no network calls.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    fn pubkey(&self) -> Option<Pubkey>;

    /// Sign `transaction` against the blockhash already set in its message.
    async fn sign_transaction(&self, transaction: Transaction) -> SignerResult<Transaction>;

    fn is_connected(&self) -> bool {
        self.pubkey().is_some()
    }
}

/// Signer backed by a key pair held in memory.
pub struct KeypairSigner(Keypair);

impl KeypairSigner {
    pub fn new(keypair: Keypair) -> Self {
        Self(keypair)
    }

    /// Generate a fresh random key pair.
    pub fn generate() -> Self {
        Self(Keypair::new())
    }

    pub fn keypair(&self) -> &Keypair {
        &self.0
    }
}

#[async_trait]
impl TransactionSigner for KeypairSigner {
    fn pubkey(&self) -> Option<Pubkey> {
        Some(self.0.pubkey())
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> SignerResult<Transaction> {
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&self.0], blockhash)
            .map_err(|err| match err {
                solana_sdk::signer::SignerError::KeypairPubkeyMismatch => SignerError::NotRequired {
                    signer: self.0.pubkey().to_string(),
                },
                other => SignerError::Rejected(other.to_string()),
            })?;
        Ok(transaction)
    }
}

impl std::fmt::Debug for KeypairSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeypairSigner({}, <redacted>)", self.0.pubkey())
    }
}

/// A wallet with no key pair available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedSigner;

#[async_trait]
impl TransactionSigner for DisconnectedSigner {
    fn pubkey(&self) -> Option<Pubkey> {
        None
    }

    async fn sign_transaction(&self, _transaction: Transaction) -> SignerResult<Transaction> {
        Err(SignerError::NotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::hash::Hash;
    use solana_sdk::system_instruction;

    fn unsigned(payer: &Pubkey) -> Transaction {
        let ix = system_instruction::transfer(payer, &Pubkey::new_unique(), 42);
        let mut tx = Transaction::new_with_payer(&[ix], Some(payer));
        tx.message.recent_blockhash = Hash::new_unique();
        tx
    }

    #[tokio::test]
    async fn keypair_signs_for_payer() {
        let signer = KeypairSigner::generate();
        let payer = signer.pubkey().unwrap();
        let tx = signer.sign_transaction(unsigned(&payer)).await.unwrap();
        assert!(tx.is_signed());
        assert!(tx.verify().is_ok());
    }

    #[tokio::test]
    async fn keypair_keeps_blockhash() {
        let signer = KeypairSigner::generate();
        let tx = unsigned(&signer.pubkey().unwrap());
        let hash = tx.message.recent_blockhash;
        let signed = signer.sign_transaction(tx).await.unwrap();
        assert_eq!(signed.message.recent_blockhash, hash);
    }

    #[tokio::test]
    async fn keypair_rejects_foreign_transaction() {
        let signer = KeypairSigner::generate();
        let err = signer
            .sign_transaction(unsigned(&Pubkey::new_unique()))
            .await
            .unwrap_err();
        assert!(matches!(err, SignerError::NotRequired { .. }));
    }

    #[tokio::test]
    async fn disconnected_has_no_key() {
        let signer = DisconnectedSigner;
        assert!(signer.pubkey().is_none());
        assert!(!signer.is_connected());
        let err = signer
            .sign_transaction(unsigned(&Pubkey::new_unique()))
            .await
            .unwrap_err();
        assert_eq!(err, SignerError::NotConnected);
    }

    #[test]
    fn debug_redacts_keypair() {
        let signer = KeypairSigner::generate();
        let debug = format!("{signer:?}");
        assert!(debug.contains("redacted"));
        assert!(debug.contains(&signer.keypair().pubkey().to_string()));
    }
}
