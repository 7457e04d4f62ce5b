//! Record types flowing from the row normalizer to the sheet writer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One transaction after normalization, before column placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Display date ("Apr 06"), or the raw text when it did not parse
    pub date: String,
    /// Trimmed description as it appeared on the statement
    pub description: String,
    /// Inferred category label
    pub category: String,
    /// Non-negative amount as a spreadsheet formula ("=12.5-1.25")
    pub formula: String,
}

impl NormalizedRecord {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            formula: formula.into(),
        }
    }
}

/// Which of the two people sharing the ledger a batch belongs to.
///
/// Selects the amount column: the first user's spend goes to column D,
/// the second user's to column E.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserSlot {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
}

impl UserSlot {
    pub fn number(&self) -> u8 {
        match self {
            UserSlot::First => 1,
            UserSlot::Second => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user '{0}': expected 1 or 2")]
pub struct UserSlotError(pub String);

impl TryFrom<u8> for UserSlot {
    type Error = UserSlotError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(UserSlot::First),
            2 => Ok(UserSlot::Second),
            other => Err(UserSlotError(other.to_string())),
        }
    }
}

impl FromStr for UserSlot {
    type Err = UserSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(UserSlot::First),
            "2" => Ok(UserSlot::Second),
            other => Err(UserSlotError(other.to_string())),
        }
    }
}

impl fmt::Display for UserSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A five-cell sheet row: date, description, category, user 1 amount,
/// user 2 amount. Exactly one amount cell is populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRow {
    pub date: String,
    pub description: String,
    pub category: String,
    pub user1_amount: String,
    pub user2_amount: String,
}

impl OutputRow {
    /// Number of cells in every output row (columns A through E).
    pub const WIDTH: usize = 5;

    /// Lay a record out for `user`, putting the formula in that user's column.
    pub fn place(record: &NormalizedRecord, user: UserSlot) -> Self {
        let (user1_amount, user2_amount) = match user {
            UserSlot::First => (record.formula.clone(), String::new()),
            UserSlot::Second => (String::new(), record.formula.clone()),
        };
        Self {
            date: record.date.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            user1_amount,
            user2_amount,
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; Self::WIDTH] {
        [
            self.date.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.user1_amount.as_str(),
            self.user2_amount.as_str(),
        ]
    }

    pub fn into_cells(self) -> Vec<String> {
        vec![
            self.date,
            self.description,
            self.category,
            self.user1_amount,
            self.user2_amount,
        ]
    }
}
