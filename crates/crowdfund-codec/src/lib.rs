//! Account codec for the crowdfunding program.
//!
//! Campaign layout, all integers little-endian:
//!
//! ```text
//! creator        32 bytes
//! title          u32 length + UTF-8 bytes
//! description    u32 length + UTF-8 bytes
//! goal_amount    u64
//! amount_raised  u64
//! donors_count   u32
//! created_at     i64
//! deadline       i64
//! is_active      u8 (0 or 1)
//! category       u8 (0..=7)
//! withdrawn      u8 (0 or 1)
//! ```
//!
//! Donation tracking layout: donor (32), amount u64, donated_at i64,
//! campaign (32).
//!
//! Decoding never reads past the buffer and rejects trailing bytes.

pub mod campaign;
pub mod donation;
pub mod error;
mod reader;

pub use campaign::CampaignCodec;
pub use donation::DonationCodec;
pub use error::{DecodeError, DecodeResult};
