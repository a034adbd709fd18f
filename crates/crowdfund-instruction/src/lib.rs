//! Instruction construction for the crowdfunding program.
//!
//! The account order and signer/writable flags produced here are a contract
//! with the deployed program. A mismatch is not caught locally; the program
//! rejects the transaction with an opaque error.

pub mod builder;
pub mod error;
pub mod instruction;

pub use builder::{create_campaign, donate};
pub use error::{InstructionError, InstructionResult};
pub use instruction::{opcode, CrowdfundInstruction};
