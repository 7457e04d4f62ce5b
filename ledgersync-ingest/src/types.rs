use ledgersync_core::NormalizedRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IngestError;
use crate::issuers::{cibc, tangerine};

/// One CSV line as read from the statement file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new<I, S>(line: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Trimmed field at `idx`, empty when absent.
    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|s| s.trim()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Card issuers whose exports we understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Issuer {
    Tangerine,
    Cibc,
}

impl Issuer {
    pub const ALL: [Issuer; 2] = [Issuer::Tangerine, Issuer::Cibc];

    pub fn profile(&self) -> &'static IssuerProfile {
        match self {
            Issuer::Tangerine => &tangerine::PROFILE,
            Issuer::Cibc => &cibc::PROFILE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Issuer {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Issuer::ALL
            .into_iter()
            .find(|i| i.name() == wanted)
            .ok_or_else(|| IngestError::UnknownIssuer(s.to_string()))
    }
}

/// Column indices of the fields the normalizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub date: usize,
    pub description: usize,
    pub amount: usize,
    /// Free-text reward/category column, when the issuer has one
    pub memo: Option<usize>,
}

/// Per-issuer shape of an export and its exclusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuerProfile {
    pub name: &'static str,
    pub min_fields: usize,
    pub layout: FieldLayout,
    /// Uppercase substrings; a description containing any of them is dropped
    pub excluded_keywords: &'static [&'static str],
    /// Whether amounts carry a reward credit (`=cost-reward` formulas)
    pub earns_rewards: bool,
}

/// Why a row was left out of the batch. Routine, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscardReason {
    TooFewFields { found: usize, required: usize },
    MissingField(&'static str),
    ExcludedKeyword(&'static str),
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::TooFewFields { found, required } => {
                write!(f, "{found} fields, need {required}")
            }
            DiscardReason::MissingField(name) => write!(f, "empty {name}"),
            DiscardReason::ExcludedKeyword(kw) => write!(f, "excluded keyword {kw}"),
        }
    }
}

/// Result of normalizing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Kept(NormalizedRecord),
    Discarded(DiscardReason),
}
