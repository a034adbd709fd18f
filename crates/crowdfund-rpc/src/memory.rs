use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::config::Commitment;
use crate::connection::RpcConnection;
use crate::error::{RpcError, RpcResult};
use crate::types::{AccountData, SignatureStatus};

/// Applies a landed transaction to the account map. An `Err` marks the
/// transaction as failed on-ledger; the accounts are left untouched.
pub type TransactionExecutor =
    Box<dyn Fn(&Transaction, &mut BTreeMap<Pubkey, AccountData>) -> Result<(), String> + Send + Sync>;

struct PendingStatus {
    polls_remaining: usize,
    status: SignatureStatus,
}

#[derive(Default)]
struct LedgerState {
    accounts: BTreeMap<Pubkey, AccountData>,
    valid_blockhashes: HashSet<Hash>,
    slot: u64,
    sent: Vec<Transaction>,
    statuses: HashMap<Signature, PendingStatus>,
    send_failures: VecDeque<RpcError>,
    confirmation_delay: usize,
}

/// In-memory ledger implementing [`RpcConnection`].
///
/// Intended for tests and embedding. Every trait call is counted, issued
/// blockhashes are tracked so stale ones are rejected, and an optional
/// executor applies landed transactions to the account map.
pub struct InMemoryLedger {
    commitment: Commitment,
    state: RwLock<LedgerState>,
    executor: Option<TransactionExecutor>,
    calls: AtomicUsize,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            commitment: Commitment::Confirmed,
            state: RwLock::new(LedgerState::default()),
            executor: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    /// Run `executor` against every transaction that lands.
    pub fn with_executor(mut self, executor: TransactionExecutor) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Number of [`RpcConnection`] calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn insert_account(&self, address: Pubkey, account: AccountData) {
        self.state
            .write()
            .expect("lock poisoned")
            .accounts
            .insert(address, account);
    }

    pub fn account(&self, address: &Pubkey) -> Option<AccountData> {
        self.state
            .read()
            .expect("lock poisoned")
            .accounts
            .get(address)
            .cloned()
    }

    /// Transactions accepted by `send_transaction`, in order.
    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.state.read().expect("lock poisoned").sent.clone()
    }

    /// Make every blockhash issued so far stale.
    pub fn expire_blockhashes(&self) {
        self.state
            .write()
            .expect("lock poisoned")
            .valid_blockhashes
            .clear();
    }

    /// Queue an error for the next `send_transaction` call.
    pub fn fail_next_send(&self, error: RpcError) {
        self.state
            .write()
            .expect("lock poisoned")
            .send_failures
            .push_back(error);
    }

    /// Report new transactions as unseen for `polls` status queries before
    /// they confirm.
    pub fn set_confirmation_delay(&self, polls: usize) {
        self.state.write().expect("lock poisoned").confirmation_delay = polls;
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RpcConnection for InMemoryLedger {
    fn commitment(&self) -> Commitment {
        self.commitment
    }

    async fn get_latest_blockhash(&self) -> RpcResult<Hash> {
        self.record_call();
        let mut state = self.state.write().expect("lock poisoned");
        state.slot += 1;
        let hash = Hash::new_unique();
        state.valid_blockhashes.insert(hash);
        Ok(hash)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> RpcResult<Signature> {
        self.record_call();
        let mut state = self.state.write().expect("lock poisoned");
        if let Some(error) = state.send_failures.pop_front() {
            return Err(error);
        }
        if !state
            .valid_blockhashes
            .contains(&transaction.message.recent_blockhash)
        {
            return Err(RpcError::BlockhashNotFound(
                "Transaction simulation failed: Blockhash not found".into(),
            ));
        }
        if transaction.verify().is_err() {
            return Err(RpcError::Remote {
                code: -32003,
                message: "Transaction signature verification failure".into(),
            });
        }
        let signature = *transaction
            .signatures
            .first()
            .ok_or_else(|| RpcError::InvalidResponse("transaction has no signatures".into()))?;

        let err = match &self.executor {
            Some(execute) => {
                let mut accounts = state.accounts.clone();
                match execute(transaction, &mut accounts) {
                    Ok(()) => {
                        state.accounts = accounts;
                        None
                    }
                    Err(reason) => Some(reason),
                }
            }
            None => None,
        };

        state.slot += 1;
        let pending = PendingStatus {
            polls_remaining: state.confirmation_delay,
            status: SignatureStatus {
                slot: state.slot,
                confirmation_status: Some(Commitment::Finalized),
                err,
            },
        };
        state.statuses.insert(signature, pending);
        state.sent.push(transaction.clone());
        Ok(signature)
    }

    async fn get_signature_status(&self, signature: &Signature) -> RpcResult<Option<SignatureStatus>> {
        self.record_call();
        let mut state = self.state.write().expect("lock poisoned");
        let Some(pending) = state.statuses.get_mut(signature) else {
            return Ok(None);
        };
        if pending.polls_remaining > 0 {
            pending.polls_remaining -= 1;
            return Ok(None);
        }
        Ok(Some(pending.status.clone()))
    }

    async fn get_account(&self, address: &Pubkey) -> RpcResult<Option<AccountData>> {
        self.record_call();
        Ok(self.account(address))
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        data_size: Option<u64>,
    ) -> RpcResult<Vec<(Pubkey, AccountData)>> {
        self.record_call();
        let state = self.state.read().expect("lock poisoned");
        Ok(state
            .accounts
            .iter()
            .filter(|(_, account)| account.owner == *program_id)
            .filter(|(_, account)| data_size.map_or(true, |size| account.data.len() as u64 == size))
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::signature::{Keypair, Signer};
    use solana_sdk::system_instruction;

    use super::*;

    fn transfer(payer: &Keypair, blockhash: Hash) -> Transaction {
        let ix = system_instruction::transfer(&payer.pubkey(), &Pubkey::new_unique(), 1);
        Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer], blockhash)
    }

    #[tokio::test]
    async fn send_and_confirm() {
        let ledger = InMemoryLedger::new();
        let payer = Keypair::new();
        let hash = ledger.get_latest_blockhash().await.unwrap();
        let sig = ledger.send_transaction(&transfer(&payer, hash)).await.unwrap();
        let status = ledger.get_signature_status(&sig).await.unwrap().unwrap();
        assert!(status.satisfies(Commitment::Confirmed));
        assert!(status.err.is_none());
        assert_eq!(ledger.sent_transactions().len(), 1);
        assert_eq!(ledger.call_count(), 3);
    }

    #[tokio::test]
    async fn unknown_blockhash_rejected() {
        let ledger = InMemoryLedger::new();
        let err = ledger
            .send_transaction(&transfer(&Keypair::new(), Hash::new_unique()))
            .await
            .unwrap_err();
        assert!(err.is_stale_blockhash());
    }

    #[tokio::test]
    async fn expired_blockhash_rejected() {
        let ledger = InMemoryLedger::new();
        let hash = ledger.get_latest_blockhash().await.unwrap();
        ledger.expire_blockhashes();
        let err = ledger
            .send_transaction(&transfer(&Keypair::new(), hash))
            .await
            .unwrap_err();
        assert!(err.is_stale_blockhash());
    }

    #[tokio::test]
    async fn unsigned_transaction_rejected() {
        let ledger = InMemoryLedger::new();
        let payer = Keypair::new();
        let hash = ledger.get_latest_blockhash().await.unwrap();
        let ix = system_instruction::transfer(&payer.pubkey(), &Pubkey::new_unique(), 1);
        let mut tx = Transaction::new_with_payer(&[ix], Some(&payer.pubkey()));
        tx.message.recent_blockhash = hash;
        let err = ledger.send_transaction(&tx).await.unwrap_err();
        assert!(matches!(err, RpcError::Remote { code: -32003, .. }));
    }

    #[tokio::test]
    async fn queued_failure_returned_once() {
        let ledger = InMemoryLedger::new();
        ledger.fail_next_send(RpcError::Remote { code: -32002, message: "insufficient funds".into() });
        let payer = Keypair::new();
        let hash = ledger.get_latest_blockhash().await.unwrap();
        assert!(ledger.send_transaction(&transfer(&payer, hash)).await.is_err());
        assert!(ledger.send_transaction(&transfer(&payer, hash)).await.is_ok());
    }

    #[tokio::test]
    async fn confirmation_delay_hides_status() {
        let ledger = InMemoryLedger::new();
        ledger.set_confirmation_delay(2);
        let hash = ledger.get_latest_blockhash().await.unwrap();
        let sig = ledger.send_transaction(&transfer(&Keypair::new(), hash)).await.unwrap();
        assert!(ledger.get_signature_status(&sig).await.unwrap().is_none());
        assert!(ledger.get_signature_status(&sig).await.unwrap().is_none());
        assert!(ledger.get_signature_status(&sig).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn executor_failure_recorded_in_status() {
        let ledger = InMemoryLedger::new().with_executor(Box::new(|_, _| Err("custom program error: 0x1".into())));
        let hash = ledger.get_latest_blockhash().await.unwrap();
        let sig = ledger.send_transaction(&transfer(&Keypair::new(), hash)).await.unwrap();
        let status = ledger.get_signature_status(&sig).await.unwrap().unwrap();
        assert_eq!(status.err.as_deref(), Some("custom program error: 0x1"));
    }

    #[tokio::test]
    async fn program_accounts_filter_by_owner_and_size() {
        let ledger = InMemoryLedger::new();
        let program = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        ledger.insert_account(a, AccountData::new(program, 1, vec![0; 10]));
        ledger.insert_account(b, AccountData::new(program, 1, vec![0; 20]));
        ledger.insert_account(Pubkey::new_unique(), AccountData::new(Pubkey::new_unique(), 1, vec![0; 10]));

        assert_eq!(ledger.get_program_accounts(&program, None).await.unwrap().len(), 2);
        let sized = ledger.get_program_accounts(&program, Some(20)).await.unwrap();
        assert_eq!(sized.len(), 1);
        assert_eq!(sized[0].0, b);
    }
}
