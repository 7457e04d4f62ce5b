//! Row normalizer: keep-or-discard decision and field extraction for one row.

use ledgersync_core::{CategoryRules, NormalizedRecord, amount_formula, format_statement_date};
use log::trace;

use crate::amount::parse_spend;
use crate::error::IngestError;
use crate::issuers::tangerine::RewardExtractor;
use crate::types::{DiscardReason, Issuer, IssuerProfile, RawRow, RowOutcome};

/// Normalizes rows of one issuer's export.
#[derive(Debug, Clone)]
pub struct Normalizer {
    issuer: Issuer,
    rules: CategoryRules,
    rewards: Option<RewardExtractor>,
}

impl Normalizer {
    pub fn new(issuer: Issuer, rules: CategoryRules) -> Result<Self, IngestError> {
        let rewards = if issuer.profile().earns_rewards {
            Some(RewardExtractor::new()?)
        } else {
            None
        };
        Ok(Self {
            issuer,
            rules,
            rewards,
        })
    }

    /// Normalize one row.
    ///
    /// Discard checks run in order: field count, required fields, excluded
    /// keywords. Only an unparseable amount on a row that passed them all is an
    /// error.
    pub fn normalize(&self, row: &RawRow) -> Result<RowOutcome, IngestError> {
        let profile = self.issuer.profile();
        if let Some(reason) = discard_reason(profile, row) {
            trace!("line {}: discarded ({reason})", row.line);
            return Ok(RowOutcome::Discarded(reason));
        }

        let layout = profile.layout;
        let description = row.field(layout.description);
        let raw_amount = row.field(layout.amount);

        let spend = parse_spend(raw_amount).ok_or_else(|| IngestError::MalformedAmount {
            line: row.line,
            raw: raw_amount.to_string(),
            fields: row.fields.clone(),
        })?;

        let credit = self
            .rewards
            .as_ref()
            .map(|rx| rx.credit(layout.memo.map(|i| row.field(i)).unwrap_or("")));

        Ok(RowOutcome::Kept(NormalizedRecord::new(
            format_statement_date(row.field(layout.date)),
            description,
            self.rules.categorize(description),
            amount_formula(spend, credit),
        )))
    }
}

fn discard_reason(profile: &IssuerProfile, row: &RawRow) -> Option<DiscardReason> {
    if row.len() < profile.min_fields {
        return Some(DiscardReason::TooFewFields {
            found: row.len(),
            required: profile.min_fields,
        });
    }

    let layout = profile.layout;
    for (name, idx) in [
        ("date", layout.date),
        ("description", layout.description),
        ("amount", layout.amount),
    ] {
        if row.field(idx).is_empty() {
            return Some(DiscardReason::MissingField(name));
        }
    }

    let desc = row.field(layout.description).to_uppercase();
    profile
        .excluded_keywords
        .iter()
        .find(|kw| desc.contains(*kw))
        .map(|kw| DiscardReason::ExcludedKeyword(*kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tangerine() -> Normalizer {
        Normalizer::new(Issuer::Tangerine, CategoryRules::default()).unwrap()
    }

    fn cibc() -> Normalizer {
        Normalizer::new(Issuer::Cibc, CategoryRules::default()).unwrap()
    }

    fn kept(n: &Normalizer, fields: &[&str]) -> NormalizedRecord {
        match n.normalize(&RawRow::new(1, fields.iter().copied())).unwrap() {
            RowOutcome::Kept(r) => r,
            RowOutcome::Discarded(reason) => panic!("unexpected discard: {reason}"),
        }
    }

    fn discarded(n: &Normalizer, fields: &[&str]) -> DiscardReason {
        match n.normalize(&RawRow::new(1, fields.iter().copied())).unwrap() {
            RowOutcome::Discarded(reason) => reason,
            RowOutcome::Kept(r) => panic!("unexpected keep: {r:?}"),
        }
    }

    #[test]
    fn test_tangerine_with_reward() {
        let r = kept(
            &tangerine(),
            &["12/05/2024", "DEBIT", "SUSHI TOWN", "Rewards earned: 1.25", "$12.50"],
        );
        assert_eq!(r.date, "Dec 05");
        assert_eq!(r.description, "SUSHI TOWN");
        assert_eq!(r.category, "Restaurant");
        assert_eq!(r.formula, "=12.5-1.25");
    }

    #[test]
    fn test_tangerine_without_reward_subtracts_zero() {
        let r = kept(&tangerine(), &["2024-12-05", "DEBIT", "AMAZON.CA", "", "45"]);
        assert_eq!(r.formula, "=45.0-0");
        assert_eq!(r.category, "Other Expenses");
    }

    #[test]
    fn test_cibc_has_no_reward() {
        let r = kept(&cibc(), &["2024-12-03", " ESSO 7731 ", "$8.00", ""]);
        assert_eq!(r.date, "Dec 03");
        assert_eq!(r.description, "ESSO 7731");
        assert_eq!(r.category, "Fuel");
        assert_eq!(r.formula, "=8.0");
    }

    #[test]
    fn test_transfers_excluded_for_both_issuers() {
        for desc in ["FREEDOM MOBILE", "freedom mobile", "Rogers Wireless"] {
            assert!(matches!(
                discarded(&tangerine(), &["12/05/2024", "DEBIT", desc, "", "50.00"]),
                DiscardReason::ExcludedKeyword(_)
            ));
            assert!(matches!(
                discarded(&cibc(), &["2024-12-05", desc, "50.00", ""]),
                DiscardReason::ExcludedKeyword(_)
            ));
        }
    }

    #[test]
    fn test_transfer_exclusion_ignores_malformed_amount() {
        let reason = discarded(&cibc(), &["2024-12-05", "ROGERS", "n/a", ""]);
        assert_eq!(reason, DiscardReason::ExcludedKeyword("ROGERS"));
    }

    #[test]
    fn test_preauthorized_only_excluded_for_tangerine() {
        let reason = discarded(
            &tangerine(),
            &["12/05/2024", "DEBIT", "Preauthorized COSTCO", "", "10.00"],
        );
        assert_eq!(reason, DiscardReason::ExcludedKeyword("PREAUTHORIZED"));

        let r = kept(&cibc(), &["2024-12-05", "PREAUTHORIZED COSTCO", "10.00", ""]);
        assert_eq!(r.category, "Groceries");
    }

    #[test]
    fn test_too_few_fields() {
        let reason = discarded(&tangerine(), &["12/05/2024", "DEBIT", "X", "oops"]);
        assert_eq!(
            reason,
            DiscardReason::TooFewFields {
                found: 4,
                required: 5
            }
        );
        let reason = discarded(&cibc(), &["2024-12-05", "X", "garbage"]);
        assert_eq!(
            reason,
            DiscardReason::TooFewFields {
                found: 3,
                required: 4
            }
        );
    }

    #[test]
    fn test_missing_required_field() {
        assert_eq!(
            discarded(&tangerine(), &["  ", "DEBIT", "COSTCO", "", "1.00"]),
            DiscardReason::MissingField("date")
        );
        assert_eq!(
            discarded(&cibc(), &["2024-12-05", "COSTCO", " ", ""]),
            DiscardReason::MissingField("amount")
        );
        assert_eq!(
            discarded(&cibc(), &["2024-12-05", "", "1.00", ""]),
            DiscardReason::MissingField("description")
        );
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let r = kept(&cibc(), &["Dec 5th", "COSTCO", "1.00", ""]);
        assert_eq!(r.date, "Dec 5th");
    }

    #[test]
    fn test_malformed_amount_is_an_error() {
        let err = tangerine()
            .normalize(&RawRow::new(
                7,
                ["12/05/2024", "DEBIT", "COSTCO", "", "twelve"],
            ))
            .unwrap_err();
        match err {
            IngestError::MalformedAmount { line, raw, fields } => {
                assert_eq!(line, 7);
                assert_eq!(raw, "twelve");
                assert_eq!(fields.len(), 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_issuer_parsing() {
        assert_eq!("Tangerine".parse::<Issuer>().unwrap(), Issuer::Tangerine);
        assert_eq!(" cibc ".parse::<Issuer>().unwrap(), Issuer::Cibc);
        assert!(matches!(
            "amex".parse::<Issuer>(),
            Err(IngestError::UnknownIssuer(_))
        ));
    }
}
