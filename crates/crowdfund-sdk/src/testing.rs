//! Fixtures shared by the sdk tests.

use std::collections::BTreeMap;

use crowdfund_codec::{CampaignCodec, DonationCodec};
use crowdfund_instruction::CrowdfundInstruction;
use crowdfund_rpc::{AccountData, TransactionExecutor};
use crowdfund_types::{Campaign, CampaignParts, Category, DonationRecord, Pubkey};
use solana_sdk::transaction::Transaction;

pub(crate) const T: i64 = 1_700_000_000;

const RENT: u64 = 2_000_000;

pub(crate) fn campaign_record(title: &str) -> Campaign {
    Campaign::try_from_parts(CampaignParts {
        creator: Pubkey::new_unique(),
        title: title.into(),
        description: "desc".into(),
        goal_amount: 10_000_000_000,
        amount_raised: 0,
        donors_count: 0,
        created_at: T,
        deadline: T + 2_592_000,
        is_active: true,
        category: Category::Technology,
        withdrawn: false,
    })
    .unwrap()
}

pub(crate) fn donation_record(campaign: Pubkey, amount: u64) -> DonationRecord {
    DonationRecord {
        donor: Pubkey::new_unique(),
        amount,
        donated_at: T + 60,
        campaign,
    }
}

/// Applies Create and Donate the way the deployed program does, enough for
/// the client to observe their effects.
pub(crate) fn program_executor(program_id: Pubkey) -> TransactionExecutor {
    Box::new(move |tx, accounts| execute(program_id, tx, accounts))
}

fn execute(
    program_id: Pubkey,
    tx: &Transaction,
    accounts: &mut BTreeMap<Pubkey, AccountData>,
) -> Result<(), String> {
    let keys = &tx.message.account_keys;
    for ix in &tx.message.instructions {
        if keys[ix.program_id_index as usize] != program_id {
            continue;
        }
        let metas: Vec<Pubkey> = ix.accounts.iter().map(|&i| keys[i as usize]).collect();
        match CrowdfundInstruction::unpack(&ix.data).map_err(|e| e.to_string())? {
            CrowdfundInstruction::Create(campaign) => {
                let address = metas[1];
                if accounts.contains_key(&address) {
                    return Err(format!("account {address} already in use"));
                }
                accounts.insert(address, AccountData::new(program_id, RENT, CampaignCodec::encode(&campaign)));
            }
            CrowdfundInstruction::Donate { amount } => {
                let (donor, address, tracking) = (metas[0], metas[1], metas[2]);
                let account = accounts
                    .get(&address)
                    .cloned()
                    .ok_or_else(|| format!("campaign {address} not found"))?;
                let campaign = CampaignCodec::decode(&account.data).map_err(|e| e.to_string())?;
                if !campaign.is_active() {
                    return Err("campaign is not active".into());
                }
                let mut parts = campaign.into_parts();
                parts.amount_raised += amount;
                parts.donors_count += 1;
                let donated_at = parts.created_at + 1;
                let updated = Campaign::try_from_parts(parts).map_err(|e| e.to_string())?;
                accounts.insert(
                    address,
                    AccountData::new(program_id, account.lamports + amount, CampaignCodec::encode(&updated)),
                );
                let record = DonationRecord {
                    donor,
                    amount,
                    donated_at,
                    campaign: address,
                };
                accounts.insert(tracking, AccountData::new(program_id, RENT, DonationCodec::encode(&record)));
            }
        }
    }
    Ok(())
}
