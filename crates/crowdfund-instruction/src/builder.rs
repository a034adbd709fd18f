use crowdfund_types::{CampaignDraft, Pubkey};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::system_program;

use crate::error::InstructionResult;
use crate::instruction::CrowdfundInstruction;

/// Build a Create instruction.
///
/// `payer` becomes the campaign creator. The record starts with zero
/// raised, zero donors, active, not withdrawn, and `created_at = now`.
pub fn create_campaign(
    program_id: &Pubkey,
    payer: &Pubkey,
    campaign_account: &Pubkey,
    draft: CampaignDraft,
    now: i64,
) -> InstructionResult<Instruction> {
    let campaign = draft.into_campaign(*payer, now)?;
    let data = CrowdfundInstruction::Create(campaign).pack()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*campaign_account, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

/// Build a Donate instruction moving `amount` lamports from `donor` into
/// `campaign`, recorded in `tracking`.
pub fn donate(
    program_id: &Pubkey,
    donor: &Pubkey,
    campaign: &Pubkey,
    tracking: &Pubkey,
    amount: u64,
) -> InstructionResult<Instruction> {
    let data = CrowdfundInstruction::Donate { amount }.pack()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*donor, true),
            AccountMeta::new(*campaign, false),
            AccountMeta::new(*tracking, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}
