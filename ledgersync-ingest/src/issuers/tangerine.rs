//! Tangerine World Mastercard export.
//!
//!   Transaction date,Transaction,Name,Memo,Amount
//!   12/05/2024,DEBIT,COSTCO WHOLESALE W52,Rewards earned: 0.84 ~ Category: Groceries,84.31
//!
//! The memo column carries the cash-back credit for the purchase.

use regex::Regex;

use crate::error::IngestError;
use crate::issuers::TRANSFER_KEYWORDS;
use crate::types::{FieldLayout, IssuerProfile};

// Pending authorizations are re-exported once they post.
const EXCLUDED_KEYWORDS: [&str; 3] = [
    TRANSFER_KEYWORDS[0],
    TRANSFER_KEYWORDS[1],
    "PREAUTHORIZED",
];

pub const PROFILE: IssuerProfile = IssuerProfile {
    name: "tangerine",
    min_fields: 5,
    layout: FieldLayout {
        date: 0,
        description: 2,
        amount: 4,
        memo: Some(3),
    },
    excluded_keywords: &EXCLUDED_KEYWORDS,
    earns_rewards: true,
};

const REWARD_PATTERN: &str = r"Rewards earned: (\d+(?:\.\d+)?)";

/// Extracts the reward credit from a memo field.
#[derive(Debug, Clone)]
pub struct RewardExtractor {
    re: Regex,
}

impl RewardExtractor {
    pub fn new() -> Result<Self, IngestError> {
        Ok(Self {
            re: Regex::new(REWARD_PATTERN)?,
        })
    }

    /// Reward text as written on the statement, `"0"` when absent.
    pub fn credit<'a>(&self, memo: &'a str) -> &'a str {
        self.re
            .captures(memo)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_credit() {
        let rx = RewardExtractor::new().unwrap();
        assert_eq!(rx.credit("Rewards earned: 1.25"), "1.25");
        assert_eq!(
            rx.credit("Rewards earned: 0.84 ~ Category: Groceries"),
            "0.84"
        );
        assert_eq!(rx.credit("Category: Restaurants"), "0");
        assert_eq!(rx.credit(""), "0");
    }

    #[test]
    fn test_reward_credit_is_always_a_number() {
        let rx = RewardExtractor::new().unwrap();
        assert_eq!(rx.credit("Rewards earned: ."), "0");
        assert_eq!(rx.credit("Rewards earned: 1.25."), "1.25");
        assert_eq!(rx.credit("Rewards earned: 3"), "3");
    }

    #[test]
    fn test_profile_shape() {
        assert_eq!(PROFILE.min_fields, 5);
        assert_eq!(PROFILE.layout.memo, Some(3));
        assert!(PROFILE.excluded_keywords.contains(&"PREAUTHORIZED"));
        for kw in TRANSFER_KEYWORDS {
            assert!(PROFILE.excluded_keywords.contains(&kw));
        }
    }
}
