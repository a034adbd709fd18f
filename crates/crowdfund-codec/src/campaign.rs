use crowdfund_types::{Campaign, CampaignParts, Category, Pubkey};

use crate::error::{DecodeError, DecodeResult};
use crate::reader::{put_string, Reader};

/// Fixed-size portion of an encoded campaign: everything except the two
/// string bodies.
pub const FIXED_LEN: usize = 32 + 4 + 4 + 8 + 8 + 4 + 8 + 8 + 1 + 1 + 1;

/// Codec for campaign account data.
pub struct CampaignCodec;

impl CampaignCodec {
    /// Encode a campaign. Never fails; callers bound text lengths when the
    /// target account or transaction has a size limit.
    pub fn encode(campaign: &Campaign) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::encoded_len(campaign));
        Self::encode_into(campaign, &mut buf);
        buf
    }

    /// Append the encoding of `campaign` to `buf`.
    pub fn encode_into(campaign: &Campaign, buf: &mut Vec<u8>) {
        buf.extend_from_slice(campaign.creator().as_ref());
        put_string(buf, campaign.title());
        put_string(buf, campaign.description());
        buf.extend_from_slice(&campaign.goal_amount().to_le_bytes());
        buf.extend_from_slice(&campaign.amount_raised().to_le_bytes());
        buf.extend_from_slice(&campaign.donors_count().to_le_bytes());
        buf.extend_from_slice(&campaign.created_at().to_le_bytes());
        buf.extend_from_slice(&campaign.deadline().to_le_bytes());
        buf.push(u8::from(campaign.is_active()));
        buf.push(campaign.category().index());
        buf.push(u8::from(campaign.withdrawn()));
    }

    /// Exact size of the encoding.
    pub fn encoded_len(campaign: &Campaign) -> usize {
        FIXED_LEN + campaign.title().len() + campaign.description().len()
    }

    /// Decode a full account buffer. Trailing bytes are an error.
    pub fn decode(data: &[u8]) -> DecodeResult<Campaign> {
        let mut r = Reader::new(data);
        let campaign = Self::read(&mut r)?;
        r.finish()?;
        Ok(campaign)
    }

    fn read(r: &mut Reader<'_>) -> DecodeResult<Campaign> {
        let creator = Pubkey::new_from_array(r.bytes32("creator")?);
        let title = r.string("title")?;
        let description = r.string("description")?;
        let goal_amount = r.u64("goal_amount")?;
        let amount_raised = r.u64("amount_raised")?;
        let donors_count = r.u32("donors_count")?;
        let created_at = r.i64("created_at")?;
        let deadline = r.i64("deadline")?;
        let is_active = r.bool("is_active")?;
        let category_index = r.u8("category")?;
        let category =
            Category::from_index(category_index).ok_or(DecodeError::UnknownCategory(category_index))?;
        let withdrawn = r.bool("withdrawn")?;

        let campaign = Campaign::try_from_parts(CampaignParts {
            creator,
            title,
            description,
            goal_amount,
            amount_raised,
            donors_count,
            created_at,
            deadline,
            is_active,
            category,
            withdrawn,
        })?;
        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdfund_types::TypeError;
    use proptest::prelude::*;

    const T: i64 = 1_700_000_000;

    fn sample() -> Campaign {
        Campaign::try_from_parts(CampaignParts {
            creator: Pubkey::new_from_array([7; 32]),
            title: "Test".into(),
            description: "Desc".into(),
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

    #[test]
    fn end_to_end_scenario() {
        let campaign = sample();
        let bytes = CampaignCodec::encode(&campaign);
        let decoded = CampaignCodec::decode(&bytes).unwrap();
        assert_eq!(decoded.creator(), &Pubkey::new_from_array([7; 32]));
        assert_eq!(decoded.title(), "Test");
        assert_eq!(decoded.description(), "Desc");
        assert_eq!(decoded.goal_amount(), 10_000_000_000);
        assert_eq!(decoded.amount_raised(), 0);
        assert_eq!(decoded.donors_count(), 0);
        assert_eq!(decoded.created_at(), T);
        assert_eq!(decoded.deadline(), T + 2_592_000);
        assert!(decoded.is_active());
        assert_eq!(decoded.category(), Category::Technology);
        assert!(!decoded.withdrawn());
        assert_eq!(decoded, campaign);
    }

    #[test]
    fn layout_is_byte_exact() {
        let bytes = CampaignCodec::encode(&sample());
        assert_eq!(bytes.len(), FIXED_LEN + 8);
        assert_eq!(bytes.len(), CampaignCodec::encoded_len(&sample()));

        assert_eq!(&bytes[0..32], &[7; 32]);
        assert_eq!(&bytes[32..36], &4u32.to_le_bytes());
        assert_eq!(&bytes[36..40], b"Test");
        assert_eq!(&bytes[40..44], &4u32.to_le_bytes());
        assert_eq!(&bytes[44..48], b"Desc");
        assert_eq!(&bytes[48..56], &10_000_000_000u64.to_le_bytes());
        assert_eq!(&bytes[56..64], &0u64.to_le_bytes());
        assert_eq!(&bytes[64..68], &0u32.to_le_bytes());
        assert_eq!(&bytes[68..76], &T.to_le_bytes());
        assert_eq!(&bytes[76..84], &(T + 2_592_000).to_le_bytes());
        assert_eq!(&bytes[84..], &[1, 0, 0]);
    }

    #[test]
    fn every_proper_prefix_fails() {
        let bytes = CampaignCodec::encode(&sample());
        for len in 0..bytes.len() {
            let err = CampaignCodec::decode(&bytes[..len]).unwrap_err();
            assert!(
                matches!(err, DecodeError::UnexpectedEnd { .. } | DecodeError::LengthOverflow { .. }),
                "prefix {len} gave {err:?}"
            );
        }
    }

    #[test]
    fn oversized_title_length_rejected() {
        let mut bytes = CampaignCodec::encode(&sample());
        bytes[32..36].copy_from_slice(&1_000u32.to_le_bytes());
        let err = CampaignCodec::decode(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::LengthOverflow { field: "title", declared: 1_000, .. }));
    }

    #[test]
    fn oversized_description_length_rejected() {
        let mut bytes = CampaignCodec::encode(&sample());
        bytes[40..44].copy_from_slice(&u32::MAX.to_le_bytes());
        let err = CampaignCodec::decode(&bytes).unwrap_err();
        assert!(matches!(err, DecodeError::LengthOverflow { field: "description", .. }));
    }

    #[test]
    fn bad_flag_bytes_rejected() {
        let mut bytes = CampaignCodec::encode(&sample());
        let last = bytes.len() - 1;
        bytes[last] = 2;
        assert_eq!(
            CampaignCodec::decode(&bytes).unwrap_err(),
            DecodeError::InvalidBool { field: "withdrawn", value: 2 }
        );

        let mut bytes = CampaignCodec::encode(&sample());
        bytes[last - 2] = 0xff;
        assert_eq!(
            CampaignCodec::decode(&bytes).unwrap_err(),
            DecodeError::InvalidBool { field: "is_active", value: 0xff }
        );
    }

    #[test]
    fn unknown_category_rejected() {
        let mut bytes = CampaignCodec::encode(&sample());
        let idx = bytes.len() - 2;
        bytes[idx] = 8;
        assert_eq!(CampaignCodec::decode(&bytes).unwrap_err(), DecodeError::UnknownCategory(8));
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut bytes = CampaignCodec::encode(&sample());
        bytes.extend_from_slice(&[0, 0]);
        assert_eq!(CampaignCodec::decode(&bytes).unwrap_err(), DecodeError::TrailingBytes(2));
    }

    #[test]
    fn inverted_timestamps_rejected() {
        let mut bytes = CampaignCodec::encode(&sample());
        bytes[76..84].copy_from_slice(&(T - 1).to_le_bytes());
        assert_eq!(
            CampaignCodec::decode(&bytes).unwrap_err(),
            DecodeError::InvalidRecord(TypeError::DeadlineNotAfterCreation {
                created_at: T,
                deadline: T - 1,
            })
        );
    }

    #[test]
    fn unicode_text_survives() {
        let mut parts = sample().into_parts();
        parts.title = "Сбор средств 🚀".into();
        parts.description = "описание".into();
        let campaign = Campaign::try_from_parts(parts).unwrap();
        let bytes = CampaignCodec::encode(&campaign);
        assert_eq!(CampaignCodec::decode(&bytes).unwrap(), campaign);
    }

    fn arb_campaign() -> impl Strategy<Value = Campaign> {
        let header = (any::<[u8; 32]>(), ".{0,40}", ".{0,200}");
        let amounts = (any::<u64>(), any::<u64>(), any::<u32>());
        let times = (i64::MIN / 2..i64::MAX / 2, 1i64..i64::MAX / 2);
        let flags = (any::<bool>(), 0u8..8, any::<bool>());
        (header, amounts, times, flags).prop_map(
            |((creator, title, description), (goal, raised, donors), (created, span), (active, cat, withdrawn))| {
                Campaign::try_from_parts(CampaignParts {
                    creator: Pubkey::new_from_array(creator),
                    title,
                    description,
                    goal_amount: goal,
                    amount_raised: raised,
                    donors_count: donors,
                    created_at: created,
                    deadline: created + span,
                    is_active: active,
                    category: Category::from_index(cat).unwrap(),
                    withdrawn,
                })
                .unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(campaign in arb_campaign()) {
            let bytes = CampaignCodec::encode(&campaign);
            prop_assert_eq!(bytes.len(), CampaignCodec::encoded_len(&campaign));
            prop_assert_eq!(CampaignCodec::decode(&bytes).unwrap(), campaign);
        }

        #[test]
        fn truncation_always_fails(campaign in arb_campaign(), cut in any::<prop::sample::Index>()) {
            let bytes = CampaignCodec::encode(&campaign);
            let len = cut.index(bytes.len());
            prop_assert!(CampaignCodec::decode(&bytes[..len]).is_err());
        }

        #[test]
        fn arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = CampaignCodec::decode(&data);
        }
    }
}
