//! CIBC credit card export.
//!
//! Rows have no header:
//!   2024-12-03,"TIM HORTONS #2301 VANCOUVER, BC",4.35,,4500********1234
//!
//! Columns: date, description, debit, credit, card number. No rewards column.

use crate::issuers::TRANSFER_KEYWORDS;
use crate::types::{FieldLayout, IssuerProfile};

pub const PROFILE: IssuerProfile = IssuerProfile {
    name: "cibc",
    min_fields: 4,
    layout: FieldLayout {
        date: 0,
        description: 1,
        amount: 2,
        memo: None,
    },
    excluded_keywords: &TRANSFER_KEYWORDS,
    earns_rewards: false,
};
