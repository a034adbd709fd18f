use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Confidence level used when reading state and confirming transactions.
///
/// Ordered from weakest to strongest, so a status at `Finalized` also
/// satisfies a `Confirmed` requirement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings for a ledger node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub endpoint: String,
    /// Commitment for reads and confirmation.
    pub commitment: Commitment,
    /// Per-request HTTP timeout.
    #[serde(with = "duration_ms")]
    pub request_timeout: Duration,
    /// Delay between confirmation polls.
    #[serde(with = "duration_ms")]
    pub poll_interval: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8899".into(),
            commitment: Commitment::Confirmed,
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(500),
        }
    }
}

impl RpcConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RpcConfig::default();
        assert_eq!(c.endpoint, "http://127.0.0.1:8899");
        assert_eq!(c.commitment, Commitment::Confirmed);
        assert_eq!(c.request_timeout, Duration::from_secs(30));
        assert_eq!(c.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn commitment_ordering() {
        assert!(Commitment::Processed < Commitment::Confirmed);
        assert!(Commitment::Confirmed < Commitment::Finalized);
    }

    #[test]
    fn commitment_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Commitment::Finalized).unwrap(), "\"finalized\"");
        let parsed: Commitment = serde_json::from_str("\"processed\"").unwrap();
        assert_eq!(parsed, Commitment::Processed);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let c: RpcConfig =
            serde_json::from_str(r#"{"endpoint":"https://api.devnet.solana.com","poll_interval":250}"#)
                .unwrap();
        assert_eq!(c.endpoint, "https://api.devnet.solana.com");
        assert_eq!(c.poll_interval, Duration::from_millis(250));
        assert_eq!(c.commitment, Commitment::Confirmed);
    }
}
