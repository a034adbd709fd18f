use crowdfund_types::{DonationRecord, Pubkey};

use crate::error::DecodeResult;
use crate::reader::Reader;

/// Codec for donation tracking account data.
pub struct DonationCodec;

impl DonationCodec {
    pub fn encode(record: &DonationRecord) -> Vec<u8> {
        let mut buf = Vec::with_capacity(DonationRecord::LEN);
        buf.extend_from_slice(record.donor.as_ref());
        buf.extend_from_slice(&record.amount.to_le_bytes());
        buf.extend_from_slice(&record.donated_at.to_le_bytes());
        buf.extend_from_slice(record.campaign.as_ref());
        buf
    }

    pub fn decode(data: &[u8]) -> DecodeResult<DonationRecord> {
        let mut r = Reader::new(data);
        let record = DonationRecord {
            donor: Pubkey::new_from_array(r.bytes32("donor")?),
            amount: r.u64("amount")?,
            donated_at: r.i64("donated_at")?,
            campaign: Pubkey::new_from_array(r.bytes32("campaign")?),
        };
        r.finish()?;
        Ok(record)
    }
}
