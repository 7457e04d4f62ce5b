//! Worksheet lookup and A1 range arithmetic for appending a batch.

use ledgersync_core::OutputRow;

/// First data row of the monthly ledger tabs.
pub const DEFAULT_START_ROW: u32 = 11;

/// First worksheet title containing `keyword`, case-insensitive.
pub fn find_worksheet<'a>(titles: &'a [String], keyword: &str) -> Option<&'a str> {
    let keyword = keyword.to_lowercase();
    titles
        .iter()
        .find(|t| t.to_lowercase().contains(&keyword))
        .map(|t| t.as_str())
}

/// Row just below the last populated column A cell at or after `start_row`.
///
/// `column_a` holds the column A values read from `start_row` downwards. Blank
/// cells between populated ones are not reused, so a batch written from here
/// never lands on existing rows.
pub fn first_free_row(start_row: u32, column_a: &[String]) -> u32 {
    let offset = column_a
        .iter()
        .rposition(|v| !v.trim().is_empty())
        .map_or(0, |last| last + 1);
    start_row + offset as u32
}

/// Range covering `row_count` output rows written from `first_row`, e.g.
/// `'Dec 2024'!A11:E13`. `None` for an empty batch.
pub fn append_range(title: &str, first_row: u32, row_count: usize) -> Option<String> {
    if row_count == 0 {
        return None;
    }
    let last_row = first_row + row_count as u32 - 1;
    let last_col = (b'A' + OutputRow::WIDTH as u8 - 1) as char;
    Some(format!(
        "{}!A{first_row}:{last_col}{last_row}",
        quote_title(title)
    ))
}

/// Column A from `start_row` to the bottom of the sheet.
pub fn column_a_range(title: &str, start_row: u32) -> String {
    format!("{}!A{start_row}:A", quote_title(title))
}

fn quote_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        ["Summary", "Nov 2024", "DEC 2024", "Dec budget"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_find_worksheet_first_match() {
        let titles = titles();
        assert_eq!(find_worksheet(&titles, "dec"), Some("DEC 2024"));
        assert_eq!(find_worksheet(&titles, "Nov"), Some("Nov 2024"));
        assert_eq!(find_worksheet(&titles, "Jan"), None);
    }

    #[test]
    fn test_first_free_row() {
        let filled = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(first_free_row(11, &[]), 11);
        assert_eq!(first_free_row(11, &filled(&["Dec 01", "Dec 02"])), 13);
        assert_eq!(first_free_row(11, &filled(&["Dec 01", "Dec 02", " "])), 13);
        assert_eq!(first_free_row(11, &filled(&["", ""])), 11);
    }

    #[test]
    fn test_batch_after_gap_does_not_overwrite() {
        let column_a: Vec<String> = ["Dec 01", "", "Dec 03"]
            .into_iter()
            .map(String::from)
            .collect();
        let first = first_free_row(11, &column_a);
        assert_eq!(first, 14);
        assert_eq!(
            append_range("Dec", first, 3).as_deref(),
            Some("'Dec'!A14:E16")
        );
    }

    #[test]
    fn test_append_range() {
        assert_eq!(
            append_range("Dec 2024", 11, 3).as_deref(),
            Some("'Dec 2024'!A11:E13")
        );
        assert_eq!(append_range("Dec", 11, 1).as_deref(), Some("'Dec'!A11:E11"));
        assert_eq!(append_range("Dec", 11, 0), None);
    }

    #[test]
    fn test_titles_with_quotes() {
        assert_eq!(column_a_range("Mom's Dec", 11), "'Mom''s Dec'!A11:A");
    }
}
