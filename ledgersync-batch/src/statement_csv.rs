//! Read statement CSV exports into raw rows.
//!
//! Issuer exports disagree on headers and trailing columns, so records are
//! read flexibly and interpreted later by the issuer profile.

use anyhow::{Context, Result};
use ledgersync_ingest::RawRow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read every record of a statement file.
///
/// With `has_headers` the first record is treated as a header and dropped.
pub fn read_statement_rows(path: impl AsRef<Path>, has_headers: bool) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_statement_rows(file, has_headers).with_context(|| format!("reading {}", path.display()))
}

/// Read every record from any reader. See [`read_statement_rows`].
pub fn parse_statement_rows<R: Read>(reader: R, has_headers: bool) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(has_headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);
        rows.push(RawRow::new(line, record.iter()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TANGERINE: &str = "\
Transaction date,Transaction,Name,Memo,Amount
12/05/2024,DEBIT,COSTCO WHOLESALE W52,Rewards earned: 0.84 ~ Category: Groceries,84.31
12/06/2024,DEBIT,\"STEVE'S POKE, BAR\",Rewards earned: 0.22,21.50
";

    #[test]
    fn test_headerless_keeps_first_record() {
        let rows = parse_statement_rows(TANGERINE.as_bytes(), false).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].field(0), "Transaction date");
        assert_eq!(rows[0].line, 1);
    }

    #[test]
    fn test_header_skipped_and_lines_kept() {
        let rows = parse_statement_rows(TANGERINE.as_bytes(), true).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].field(2), "STEVE'S POKE, BAR");
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn test_flexible_field_counts() {
        let csv = "2024-12-03,TIM HORTONS,4.35,,4500********1234\n2024-12-04,SHORT\n";
        let rows = parse_statement_rows(csv.as_bytes(), false).unwrap();
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn test_read_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(TANGERINE.as_bytes()).unwrap();
        let rows = read_statement_rows(f.path(), true).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_statement_rows("/nonexistent/statement.csv", false).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/statement.csv"));
    }
}
