//! Spreadsheet formula text for transaction amounts.
//!
//! Amounts are written as formulas (`=12.5-1.25`) rather than numbers so the
//! destination sheet evaluates the reward deduction itself.

/// Render an amount in shortest round-trip decimal form, always with a
/// fractional part: `12.5`, `8.0`, `1234.56`.
pub fn render_amount(value: f64) -> String {
    let s = value.to_string();
    if s.contains(['.', 'e', 'E']) || !value.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

/// Build the formula for a spend of `amount`.
///
/// The absolute value is used, so sign conventions of the source do not leak
/// into the sheet. With `credit` the formula is always a subtraction, even when
/// the credit is `"0"`.
pub fn amount_formula(amount: f64, credit: Option<&str>) -> String {
    let cost = render_amount(amount.abs());
    match credit {
        Some(credit) => format!("={cost}-{credit}"),
        None => format!("={cost}"),
    }
}
