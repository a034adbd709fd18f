//! JSON-RPC 2.0 envelopes and the ledger node's response shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Debug, Clone)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Responses wrapped with the slot they were read at.
#[derive(Deserialize, Debug, Clone)]
pub struct WithContext<T> {
    pub context: Context,
    pub value: T,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Context {
    pub slot: u64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlockhashValue {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UiSignatureStatus {
    pub slot: u64,
    #[serde(default)]
    pub confirmations: Option<u64>,
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

/// Account with data in `[payload, encoding]` form.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UiAccount {
    pub lamports: u64,
    pub owner: String,
    pub data: (String, String),
    pub executable: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UiKeyedAccount {
    pub pubkey: String,
    pub account: UiAccount,
}
