use crowdfund_codec::{CampaignCodec, DecodeResult, DonationCodec};
use crowdfund_rpc::RpcConnection;
use crowdfund_types::{Campaign, DonationRecord, Pubkey};

use crate::error::ClientResult;

/// Scans accounts owned by the crowdfunding program.
///
/// Each scan is a single unpaginated `getProgramAccounts` query. Accounts
/// that fail to decode are logged and skipped; one bad buffer never fails
/// the scan.
pub struct AccountDiscovery<'a, R: ?Sized> {
    rpc: &'a R,
    program_id: Pubkey,
}

impl<'a, R: RpcConnection + ?Sized> AccountDiscovery<'a, R> {
    pub fn new(rpc: &'a R, program_id: Pubkey) -> Self {
        Self { rpc, program_id }
    }

    /// Every decodable campaign record, optionally restricted to accounts of
    /// exactly `size_filter` bytes.
    pub async fn list_all(&self, size_filter: Option<u64>) -> ClientResult<Vec<(Pubkey, Campaign)>> {
        self.scan(size_filter, "campaign", CampaignCodec::decode).await
    }

    /// Donation tracking records that point at `campaign`.
    pub async fn list_donations(&self, campaign: &Pubkey) -> ClientResult<Vec<(Pubkey, DonationRecord)>> {
        let records = self
            .scan(Some(DonationRecord::LEN as u64), "donation", DonationCodec::decode)
            .await?;
        Ok(records
            .into_iter()
            .filter(|(_, record)| record.campaign == *campaign)
            .collect())
    }

    async fn scan<T>(
        &self,
        size_filter: Option<u64>,
        record: &'static str,
        decode: fn(&[u8]) -> DecodeResult<T>,
    ) -> ClientResult<Vec<(Pubkey, T)>> {
        let accounts = self
            .rpc
            .get_program_accounts(&self.program_id, size_filter)
            .await?;
        let total = accounts.len();

        let decoded: Vec<_> = accounts
            .into_iter()
            .filter_map(|(address, account)| match decode(&account.data) {
                Ok(value) => Some((address, value)),
                Err(error) => {
                    tracing::warn!(%address, %error, record, "skipping undecodable account");
                    None
                }
            })
            .collect();

        tracing::debug!(
            program_id = %self.program_id,
            record,
            total,
            decoded = decoded.len(),
            "program account scan complete"
        );
        Ok(decoded)
    }
}
