use crowdfund_rpc::RpcConfig;
use crowdfund_types::Pubkey;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Client settings, fixed for the lifetime of a [`CrowdfundClient`].
///
/// [`CrowdfundClient`]: crate::CrowdfundClient
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Address of the deployed crowdfunding program.
    #[serde(with = "pubkey_serde")]
    pub program_id: Pubkey,
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

impl ClientConfig {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            rpc: RpcConfig::default(),
            discovery: DiscoveryConfig::default(),
        }
    }

    pub fn with_rpc(mut self, rpc: RpcConfig) -> Self {
        self.rpc = rpc;
        self
    }

    /// Parse a TOML document.
    ///
    /// ```toml
    /// program_id = "Crowd11111111111111111111111111111111111111"
    ///
    /// [rpc]
    /// endpoint = "https://api.devnet.solana.com"
    /// commitment = "finalized"
    /// poll_interval = 250
    /// ```
    pub fn from_toml_str(input: &str) -> ClientResult<Self> {
        toml::from_str(input).map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> ClientResult<String> {
        toml::to_string(self).map_err(|e| ClientError::Config(e.to_string()))
    }
}

/// Account scan settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Only return campaign accounts whose data is exactly this many bytes.
    /// Campaign records are variable length, so leaving this unset is the
    /// only way to see every campaign.
    pub size_filter: Option<u64>,
}

mod pubkey_serde {
    use std::str::FromStr;

    use crowdfund_types::Pubkey;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&key.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(|e| serde::de::Error::custom(format!("invalid program id {s:?}: {e}")))
    }
}
