use anyhow::{Context, Result, bail};
use google_sheets4::Sheets;
use google_sheets4::api::ValueRange;
use hyper::client::HttpConnector;
use hyper_rustls::HttpsConnector;
use ledgersync_batch::{
    BatchAssembler, append_range, column_a_range, find_worksheet, first_free_row,
};
use ledgersync_core::OutputRow;
use log::{debug, info};
use std::path::Path;

// IMPORTANT: use the oauth2 version re-exported by google-sheets4 to avoid version mismatches.
use google_sheets4::oauth2;

/// Where a batch goes.
#[derive(Debug, Clone)]
pub struct SheetTarget<'a> {
    pub spreadsheet_id: &'a str,
    /// Matched case-insensitively against tab titles
    pub keyword: &'a str,
    pub key_file: &'a Path,
    pub start_row: u32,
}

async fn hub_from_service_account(
    key_file: &Path,
) -> Result<Sheets<HttpsConnector<HttpConnector>>> {
    let key = oauth2::read_service_account_key(key_file)
        .await
        .with_context(|| format!("reading service account key {}", key_file.display()))?;

    let auth = oauth2::ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .context("building service account authenticator")?;

    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .https_or_http()
        .enable_http1()
        .build();
    Ok(Sheets::new(hyper::Client::builder().build(connector), auth))
}

/// Write `rows` into the first free rows of the matching worksheet.
///
/// Returns the A1 range written.
pub async fn append_rows(target: &SheetTarget<'_>, rows: &[OutputRow]) -> Result<Option<String>> {
    let hub = hub_from_service_account(target.key_file).await?;

    let (_, spreadsheet) = hub
        .spreadsheets()
        .get(target.spreadsheet_id)
        .doit()
        .await
        .with_context(|| format!("opening spreadsheet {}", target.spreadsheet_id))?;

    let titles: Vec<String> = spreadsheet
        .sheets
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| s.properties.and_then(|p| p.title))
        .collect();
    let Some(title) = find_worksheet(&titles, target.keyword) else {
        bail!("No worksheet found with keyword '{}'", target.keyword);
    };
    debug!("Using worksheet '{title}'");

    let (_, column) = hub
        .spreadsheets()
        .values_get(target.spreadsheet_id, &column_a_range(title, target.start_row))
        .doit()
        .await
        .with_context(|| format!("reading column A of '{title}'"))?;
    let column_a: Vec<String> = column
        .values
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.first().map(cell_text).unwrap_or_default())
        .collect();
    let first_row = first_free_row(target.start_row, &column_a);

    let Some(range) = append_range(title, first_row, rows.len()) else {
        return Ok(None);
    };

    let values: Vec<Vec<serde_json::Value>> = BatchAssembler::to_values(rows)
        .into_iter()
        .map(|cells| cells.into_iter().map(serde_json::Value::String).collect())
        .collect();
    let req = ValueRange {
        range: Some(range.clone()),
        values: Some(values),
        ..Default::default()
    };

    hub.spreadsheets()
        .values_update(req, target.spreadsheet_id, &range)
        .value_input_option("USER_ENTERED")
        .doit()
        .await
        .with_context(|| format!("updating {range}"))?;

    info!("Wrote {} rows to {range}", rows.len());
    Ok(Some(range))
}

fn cell_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
