use chrono::Utc;
use crowdfund_codec::CampaignCodec;
use crowdfund_instruction as instruction;
use crowdfund_rpc::{HttpRpcClient, RpcConnection};
use crowdfund_signer::TransactionSigner;
use crowdfund_types::{parse_sol, Campaign, CampaignDraft, DonationRecord, Pubkey};
use solana_sdk::signature::{Keypair, Signature, Signer};

use crate::config::ClientConfig;
use crate::discovery::AccountDiscovery;
use crate::error::{ClientError, ClientResult};
use crate::submitter::TransactionSubmitter;

/// Result of a confirmed create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedCampaign {
    pub signature: Signature,
    /// Address of the new campaign account.
    pub address: Pubkey,
}

/// Result of a confirmed donation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Donation {
    pub signature: Signature,
    /// Address of the tracking account recording this donation.
    pub tracking: Pubkey,
}

/// Application-facing crowdfunding client.
///
/// Holds the immutable [`ClientConfig`] and an [`RpcConnection`]. No other
/// state is kept between calls, so independent operations may run
/// concurrently.
pub struct CrowdfundClient<R> {
    config: ClientConfig,
    rpc: R,
}

impl CrowdfundClient<HttpRpcClient> {
    /// Build a client speaking JSON-RPC to `config.rpc.endpoint`.
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        let rpc = HttpRpcClient::new(config.rpc.clone())?;
        Ok(Self::new(config, rpc))
    }
}

impl<R: RpcConnection> CrowdfundClient<R> {
    pub fn new(config: ClientConfig, rpc: R) -> Self {
        tracing::debug!(program_id = %config.program_id, commitment = %rpc.commitment(), "crowdfund client ready");
        Self { config, rpc }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn submitter(&self) -> TransactionSubmitter<'_, R> {
        TransactionSubmitter::new(&self.rpc, self.config.rpc.poll_interval)
    }

    pub fn discovery(&self) -> AccountDiscovery<'_, R> {
        AccountDiscovery::new(&self.rpc, self.config.program_id)
    }

    // ---- Writes ----

    /// Create a campaign paid for and owned by `signer` at a freshly
    /// generated account address.
    pub async fn create_campaign(
        &self,
        signer: &dyn TransactionSigner,
        draft: CampaignDraft,
    ) -> ClientResult<CreatedCampaign> {
        let payer = signer.pubkey().ok_or(ClientError::NotConnected)?;
        let address = Keypair::new().pubkey();
        let ix = instruction::create_campaign(
            &self.config.program_id,
            &payer,
            &address,
            draft,
            Utc::now().timestamp(),
        )?;

        let signature = self.submitter().submit(&[ix], signer).await?;
        tracing::info!(%address, %signature, "campaign created");
        Ok(CreatedCampaign { signature, address })
    }

    /// Donate `lamports` from `signer` to `campaign`.
    pub async fn donate(
        &self,
        signer: &dyn TransactionSigner,
        campaign: &Pubkey,
        lamports: u64,
    ) -> ClientResult<Donation> {
        let donor = signer.pubkey().ok_or(ClientError::NotConnected)?;
        let tracking = Keypair::new().pubkey();
        let ix = instruction::donate(&self.config.program_id, &donor, campaign, &tracking, lamports)?;

        let signature = self.submitter().submit(&[ix], signer).await?;
        tracing::info!(%campaign, lamports, %signature, "donation confirmed");
        Ok(Donation { signature, tracking })
    }

    /// [`donate`](Self::donate) with a decimal SOL amount such as `"0.1"`.
    pub async fn donate_sol(
        &self,
        signer: &dyn TransactionSigner,
        campaign: &Pubkey,
        sol: &str,
    ) -> ClientResult<Donation> {
        if signer.pubkey().is_none() {
            return Err(ClientError::NotConnected);
        }
        let lamports = parse_sol(sol)?;
        self.donate(signer, campaign, lamports).await
    }

    // ---- Reads ----

    /// Fetch and decode one campaign.
    ///
    /// Returns `None` when the account does not exist or belongs to another
    /// program, and [`ClientError::Decode`] when it cannot be decoded.
    pub async fn fetch_campaign(&self, address: &Pubkey) -> ClientResult<Option<Campaign>> {
        let Some(account) = self.rpc.get_account(address).await? else {
            return Ok(None);
        };
        if account.owner != self.config.program_id {
            tracing::debug!(%address, owner = %account.owner, "account not owned by program");
            return Ok(None);
        }
        CampaignCodec::decode(&account.data)
            .map(Some)
            .map_err(|source| ClientError::Decode {
                address: *address,
                source,
            })
    }

    /// Every decodable campaign owned by the program.
    pub async fn fetch_all(&self) -> ClientResult<Vec<(Pubkey, Campaign)>> {
        self.discovery()
            .list_all(self.config.discovery.size_filter)
            .await
    }

    /// Donation tracking records for `campaign`.
    pub async fn donations_for(&self, campaign: &Pubkey) -> ClientResult<Vec<(Pubkey, DonationRecord)>> {
        self.discovery().list_donations(campaign).await
    }
}
