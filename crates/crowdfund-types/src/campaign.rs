use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::category::Category;
use crate::error::TypeError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Plain field bag for a campaign record.
///
/// Carries no invariants of its own. Convert into a [`Campaign`] with
/// [`Campaign::try_from_parts`] before encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignParts {
    pub creator: Pubkey,
    pub title: String,
    pub description: String,
    /// Target in lamports.
    pub goal_amount: u64,
    /// Lamports received so far. The ledger program, not this client, keeps
    /// this at or below `goal_amount`.
    pub amount_raised: u64,
    pub donors_count: u32,
    /// Unix seconds.
    pub created_at: i64,
    /// Unix seconds.
    pub deadline: i64,
    pub is_active: bool,
    pub category: Category,
    pub withdrawn: bool,
}

/// A validated campaign record.
///
/// Instances only exist when `deadline > created_at`, and the category is
/// always one of the eight known values. Fields are read through getters;
/// the record itself is never mutated locally since the authoritative copy
/// lives in a ledger account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CampaignParts", into = "CampaignParts")]
pub struct Campaign {
    creator: Pubkey,
    title: String,
    description: String,
    goal_amount: u64,
    amount_raised: u64,
    donors_count: u32,
    created_at: i64,
    deadline: i64,
    is_active: bool,
    category: Category,
    withdrawn: bool,
}

impl Campaign {
    /// Validate parts and build a record.
    pub fn try_from_parts(parts: CampaignParts) -> Result<Self, TypeError> {
        if parts.deadline <= parts.created_at {
            return Err(TypeError::DeadlineNotAfterCreation {
                created_at: parts.created_at,
                deadline: parts.deadline,
            });
        }
        Ok(Self {
            creator: parts.creator,
            title: parts.title,
            description: parts.description,
            goal_amount: parts.goal_amount,
            amount_raised: parts.amount_raised,
            donors_count: parts.donors_count,
            created_at: parts.created_at,
            deadline: parts.deadline,
            is_active: parts.is_active,
            category: parts.category,
            withdrawn: parts.withdrawn,
        })
    }

    /// Take the record apart again.
    pub fn into_parts(self) -> CampaignParts {
        CampaignParts {
            creator: self.creator,
            title: self.title,
            description: self.description,
            goal_amount: self.goal_amount,
            amount_raised: self.amount_raised,
            donors_count: self.donors_count,
            created_at: self.created_at,
            deadline: self.deadline,
            is_active: self.is_active,
            category: self.category,
            withdrawn: self.withdrawn,
        }
    }

    pub fn creator(&self) -> &Pubkey {
        &self.creator
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn goal_amount(&self) -> u64 {
        self.goal_amount
    }

    pub fn amount_raised(&self) -> u64 {
        self.amount_raised
    }

    pub fn donors_count(&self) -> u32 {
        self.donors_count
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn deadline(&self) -> i64 {
        self.deadline
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn withdrawn(&self) -> bool {
        self.withdrawn
    }

    /// Funding progress as a whole percentage, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        if self.goal_amount == 0 {
            return 0;
        }
        let pct = u128::from(self.amount_raised) * 100 / u128::from(self.goal_amount);
        pct.min(100) as u8
    }

    pub fn is_goal_reached(&self) -> bool {
        self.amount_raised >= self.goal_amount
    }

    /// Returns `true` once `now` (unix seconds) is past the deadline.
    pub fn has_ended(&self, now: i64) -> bool {
        now > self.deadline
    }

    /// Whole days until the deadline, rounded up. Never negative.
    pub fn days_left(&self, now: i64) -> u64 {
        let remaining = self.deadline.saturating_sub(now);
        if remaining <= 0 {
            return 0;
        }
        remaining.div_euclid(SECONDS_PER_DAY) as u64
            + u64::from(remaining.rem_euclid(SECONDS_PER_DAY) != 0)
    }

    /// Whether a donation sent at `now` would be accepted by the program,
    /// as far as the record alone can tell.
    pub fn accepts_donations(&self, now: i64) -> bool {
        self.is_active && !self.withdrawn && !self.has_ended(now)
    }
}

impl TryFrom<CampaignParts> for Campaign {
    type Error = TypeError;

    fn try_from(parts: CampaignParts) -> Result<Self, Self::Error> {
        Self::try_from_parts(parts)
    }
}

impl From<Campaign> for CampaignParts {
    fn from(campaign: Campaign) -> Self {
        campaign.into_parts()
    }
}

/// Application input for a new campaign.
///
/// The counters, flags, and creation time are fixed by
/// [`CampaignDraft::into_campaign`], not chosen by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    /// Target in lamports. Must be non-zero.
    pub goal_amount: u64,
    /// Unix seconds.
    pub deadline: i64,
    pub category: Category,
}

impl CampaignDraft {
    /// Build the initial record for `creator` with `created_at = now`.
    pub fn into_campaign(self, creator: Pubkey, now: i64) -> Result<Campaign, TypeError> {
        if self.goal_amount == 0 {
            return Err(TypeError::ZeroGoal);
        }
        Campaign::try_from_parts(CampaignParts {
            creator,
            title: self.title,
            description: self.description,
            goal_amount: self.goal_amount,
            amount_raised: 0,
            donors_count: 0,
            created_at: now,
            deadline: self.deadline,
            is_active: true,
            category: self.category,
            withdrawn: false,
        })
    }
}
