use crowdfund_codec::CampaignCodec;
use crowdfund_types::Campaign;

use crate::error::{InstructionError, InstructionResult};

/// Leading payload bytes understood by the program.
///
/// Withdrawal exists on the program side but its client contract is not
/// pinned down, so no opcode is exposed for it.
pub mod opcode {
    pub const CREATE: u8 = 0;
    pub const DONATE: u8 = 1;
}

/// Instruction payloads sent to the crowdfunding program.
///
/// Accounts expected by each variant:
///
/// `Create`
/// 0. `[signer, writable]` payer / creator
/// 1. `[writable]` new campaign account
/// 2. `[]` system program
///
/// `Donate`
/// 0. `[signer, writable]` donor
/// 1. `[writable]` campaign account
/// 2. `[writable]` donation tracking account
/// 3. `[]` system program
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrowdfundInstruction {
    /// Initialize a campaign account with the encoded record.
    Create(Campaign),
    /// Transfer `amount` lamports into a campaign.
    Donate { amount: u64 },
}

impl CrowdfundInstruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Create(_) => opcode::CREATE,
            Self::Donate { .. } => opcode::DONATE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "Create",
            Self::Donate { .. } => "Donate",
        }
    }

    /// Serialize to `[opcode][payload]`.
    pub fn pack(&self) -> InstructionResult<Vec<u8>> {
        match self {
            Self::Create(campaign) => {
                let mut buf = Vec::with_capacity(1 + CampaignCodec::encoded_len(campaign));
                buf.push(opcode::CREATE);
                CampaignCodec::encode_into(campaign, &mut buf);
                Ok(buf)
            }
            Self::Donate { amount } => {
                let amount = signed_amount(*amount)?;
                let mut buf = Vec::with_capacity(9);
                buf.push(opcode::DONATE);
                buf.extend_from_slice(&amount.to_le_bytes());
                Ok(buf)
            }
        }
    }

    /// Parse `[opcode][payload]` back into an instruction.
    pub fn unpack(input: &[u8]) -> InstructionResult<Self> {
        let (&tag, rest) = input.split_first().ok_or(InstructionError::Empty)?;
        match tag {
            opcode::CREATE => Ok(Self::Create(CampaignCodec::decode(rest)?)),
            opcode::DONATE => {
                let bytes: [u8; 8] = rest.try_into().map_err(|_| InstructionError::InvalidPayload {
                    opcode: "Donate",
                    reason: format!("expected 8 bytes, got {}", rest.len()),
                })?;
                let amount = i64::from_le_bytes(bytes);
                if amount <= 0 {
                    return Err(InstructionError::InvalidPayload {
                        opcode: "Donate",
                        reason: format!("non-positive amount {amount}"),
                    });
                }
                Ok(Self::Donate { amount: amount as u64 })
            }
            other => Err(InstructionError::UnknownOpcode(other)),
        }
    }
}

/// Donation amounts travel as a signed 64-bit integer.
pub(crate) fn signed_amount(amount: u64) -> InstructionResult<i64> {
    if amount == 0 {
        return Err(InstructionError::ZeroAmount);
    }
    i64::try_from(amount).map_err(|_| InstructionError::AmountTooLarge(amount))
}
