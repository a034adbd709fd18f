use thiserror::Error;

/// Errors produced by type construction and unit conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("deadline {deadline} must be after created_at {created_at}")]
    DeadlineNotAfterCreation { created_at: i64, deadline: i64 },

    #[error("goal amount must be greater than zero")]
    ZeroGoal,

    #[error("unknown category index: {0}")]
    UnknownCategory(u8),

    #[error("unknown category name: {0}")]
    UnknownCategoryName(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("amount overflows the lamport range: {0}")]
    AmountOverflow(String),
}
