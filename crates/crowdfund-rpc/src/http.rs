use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::config::{Commitment, RpcConfig};
use crate::connection::RpcConnection;
use crate::error::{RpcError, RpcResult};
use crate::jsonrpc::{
    BlockhashValue, JsonRpcRequest, JsonRpcResponse, UiAccount, UiKeyedAccount, UiSignatureStatus,
    WithContext,
};
use crate::types::{AccountData, SignatureStatus};

/// JSON-RPC client for a ledger node.
///
/// Configuration is fixed at construction. One instance can serve many
/// concurrent requests; each call is an independent HTTP round-trip.
pub struct HttpRpcClient {
    http: reqwest::Client,
    config: RpcConfig,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    pub fn new(config: RpcConfig) -> RpcResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> RpcResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);
        tracing::debug!(method, id, endpoint = %self.config.endpoint, "rpc request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(RpcError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: JsonRpcResponse<T> = serde_json::from_str(&body)
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))?;
        if let Some(error) = envelope.error {
            tracing::debug!(method, id, code = error.code, message = %error.message, "rpc error");
            return Err(RpcError::from_remote(error.code, error.message));
        }
        envelope
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: missing result")))
    }
}

#[async_trait]
impl RpcConnection for HttpRpcClient {
    fn commitment(&self) -> Commitment {
        self.config.commitment
    }

    async fn get_latest_blockhash(&self) -> RpcResult<Hash> {
        let params = json!([{ "commitment": self.config.commitment.as_str() }]);
        let resp: WithContext<BlockhashValue> = self.call("getLatestBlockhash", params).await?;
        parse(&resp.value.blockhash, "blockhash")
    }

    async fn send_transaction(&self, transaction: &Transaction) -> RpcResult<Signature> {
        let wire = bincode::serialize(transaction).map_err(|e| RpcError::Serialization(e.to_string()))?;
        let params = json!([
            BASE64.encode(wire),
            {
                "encoding": "base64",
                "preflightCommitment": self.config.commitment.as_str(),
            }
        ]);
        let signature: String = self.call("sendTransaction", params).await?;
        parse(&signature, "signature")
    }

    async fn get_signature_status(&self, signature: &Signature) -> RpcResult<Option<SignatureStatus>> {
        let params = json!([[signature.to_string()], { "searchTransactionHistory": true }]);
        let resp: WithContext<Vec<Option<UiSignatureStatus>>> =
            self.call("getSignatureStatuses", params).await?;
        let status = resp.value.into_iter().next().flatten();
        Ok(status.map(convert_status))
    }

    async fn get_account(&self, address: &Pubkey) -> RpcResult<Option<AccountData>> {
        let params = json!([
            address.to_string(),
            {
                "encoding": "base64",
                "commitment": self.config.commitment.as_str(),
            }
        ]);
        let resp: WithContext<Option<UiAccount>> = self.call("getAccountInfo", params).await?;
        resp.value.map(convert_account).transpose()
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        data_size: Option<u64>,
    ) -> RpcResult<Vec<(Pubkey, AccountData)>> {
        let mut options = json!({
            "encoding": "base64",
            "commitment": self.config.commitment.as_str(),
        });
        if let Some(size) = data_size {
            options["filters"] = json!([{ "dataSize": size }]);
        }
        let params = json!([program_id.to_string(), options]);
        let accounts: Vec<UiKeyedAccount> = self.call("getProgramAccounts", params).await?;
        accounts
            .into_iter()
            .map(|keyed| Ok((parse(&keyed.pubkey, "pubkey")?, convert_account(keyed.account)?)))
            .collect()
    }
}

fn parse<T: FromStr>(s: &str, what: &str) -> RpcResult<T> {
    s.parse()
        .map_err(|_| RpcError::InvalidResponse(format!("malformed {what}: {s}")))
}

fn convert_account(account: UiAccount) -> RpcResult<AccountData> {
    let (payload, encoding) = account.data;
    if encoding != "base64" {
        return Err(RpcError::InvalidResponse(format!("unexpected account encoding {encoding}")));
    }
    let data = BASE64
        .decode(payload)
        .map_err(|e| RpcError::InvalidResponse(format!("account data: {e}")))?;
    Ok(AccountData {
        lamports: account.lamports,
        owner: parse(&account.owner, "owner")?,
        data,
        executable: account.executable,
    })
}

fn convert_status(status: UiSignatureStatus) -> SignatureStatus {
    let confirmation_status = match status.confirmation_status.as_deref() {
        Some("processed") => Some(Commitment::Processed),
        Some("confirmed") => Some(Commitment::Confirmed),
        Some("finalized") => Some(Commitment::Finalized),
        // Older nodes omit the level; no confirmation count means rooted.
        None if status.confirmations.is_none() => Some(Commitment::Finalized),
        _ => None,
    };
    SignatureStatus {
        slot: status.slot,
        confirmation_status,
        err: status.err.map(|e| e.to_string()),
    }
}
