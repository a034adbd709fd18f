use crowdfund_codec::DecodeError;
use crowdfund_types::TypeError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstructionError {
    #[error("donation amount must be greater than zero")]
    ZeroAmount,

    #[error("amount {0} does not fit the signed 64-bit payload")]
    AmountTooLarge(u64),

    #[error("empty instruction data")]
    Empty,

    #[error("unknown opcode: {0}")]
    UnknownOpcode(u8),

    #[error("invalid {opcode} payload: {reason}")]
    InvalidPayload { opcode: &'static str, reason: String },

    #[error("invalid campaign: {0}")]
    InvalidCampaign(#[from] TypeError),

    #[error("campaign payload: {0}")]
    Decode(#[from] DecodeError),
}

pub type InstructionResult<T> = Result<T, InstructionError>;
