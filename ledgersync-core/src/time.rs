//! Statement date display.

use chrono::NaiveDate;

/// Input layouts accepted by [`format_statement_date`], tried in order, with
/// the separator and position of the year component.
const INPUT_FORMATS: [(&str, char, YearAt); 2] = [
    ("%m/%d/%Y", '/', YearAt::Last),
    ("%Y-%m-%d", '-', YearAt::First),
];

#[derive(Clone, Copy)]
enum YearAt {
    First,
    Last,
}

/// Render a statement date as abbreviated month plus zero-padded day ("Apr 06").
///
/// Accepts `MM/DD/YYYY` and `YYYY-MM-DD` with a four-digit year. Anything else,
/// including two-digit years, is returned unchanged.
pub fn format_statement_date(raw: &str) -> String {
    INPUT_FORMATS
        .iter()
        .filter(|(_, sep, at)| has_four_digit_year(raw, *sep, *at))
        .find_map(|(fmt, _, _)| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

// chrono's %Y takes any digit count; statement years are always four digits.
fn has_four_digit_year(raw: &str, sep: char, at: YearAt) -> bool {
    let year = match at {
        YearAt::First => raw.split(sep).next(),
        YearAt::Last => raw.rsplit(sep).next(),
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_layout() {
        assert_eq!(format_statement_date("12/05/2024"), "Dec 05");
        assert_eq!(format_statement_date("04/06/2025"), "Apr 06");
    }

    #[test]
    fn test_iso_layout() {
        assert_eq!(format_statement_date("2024-12-05"), "Dec 05");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_statement_date("not-a-date"), "not-a-date");
        assert_eq!(format_statement_date("13/45/2024"), "13/45/2024");
        assert_eq!(format_statement_date(""), "");
    }

    #[test]
    fn test_two_digit_year_passes_through() {
        assert_eq!(format_statement_date("12/05/24"), "12/05/24");
        assert_eq!(format_statement_date("24-12-05"), "24-12-05");
        assert_eq!(format_statement_date("12/05/02024"), "12/05/02024");
    }

    #[test]
    fn test_unpadded_month_and_day() {
        assert_eq!(format_statement_date("1/5/2025"), "Jan 05");
    }
}
