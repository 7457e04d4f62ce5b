//! Statement amount parsing.

/// Parse a statement amount into the ledger's spend sign.
///
/// Thousands separators and `$` are stripped before parsing. Statements record
/// debits as positive numbers, so the parsed value is negated. Returns `None`
/// for text that is not a finite number.
pub fn parse_spend(raw: &str) -> Option<f64> {
    let cleaned = raw.replace([',', '$'], "");
    let value: f64 = cleaned.trim().parse().ok()?;
    value.is_finite().then_some(-value)
}
