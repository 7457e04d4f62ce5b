//! Pipeline entry point: raw rows in, sheet-ready rows out.

use ledgersync_core::{CategoryRules, NormalizedRecord, OutputRow, UserSlot};
use ledgersync_ingest::{IngestError, Issuer, Normalizer, RawRow, RowOutcome};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assembler::BatchAssembler;

/// What to do with a row whose amount does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedAmountPolicy {
    /// Abort the whole batch.
    #[default]
    Fail,
    /// Drop the row and report it in [`PreparedBatch::skipped`].
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub rules: CategoryRules,
    pub malformed_amount: MalformedAmountPolicy,
}

/// A row dropped under [`MalformedAmountPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: usize,
    pub raw_amount: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreparedBatch {
    pub rows: Vec<OutputRow>,
    /// Rows left out by the routine exclusion rules
    pub discarded: usize,
    pub skipped: Vec<SkippedRow>,
}

impl PreparedBatch {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("line {line}: malformed amount '{raw}' in row {fields:?}")]
    MalformedAmount {
        line: usize,
        raw: String,
        fields: Vec<String>,
    },

    #[error("normalizer setup failed: {0}")]
    Ingest(#[from] IngestError),
}

/// Normalize `rows` for `issuer` and lay them out for `user`.
pub fn prepare_batch(
    rows: &[RawRow],
    issuer: Issuer,
    user: UserSlot,
    options: &PipelineOptions,
) -> Result<PreparedBatch, PipelineError> {
    let normalizer = Normalizer::new(issuer, options.rules.clone())?;

    let mut records: Vec<NormalizedRecord> = Vec::with_capacity(rows.len());
    let mut discarded = 0;
    let mut skipped = Vec::new();

    for row in rows {
        match normalizer.normalize(row) {
            Ok(RowOutcome::Kept(record)) => records.push(record),
            Ok(RowOutcome::Discarded(_)) => discarded += 1,
            Err(IngestError::MalformedAmount { line, raw, fields }) => {
                match options.malformed_amount {
                    MalformedAmountPolicy::Fail => {
                        return Err(PipelineError::MalformedAmount { line, raw, fields });
                    }
                    MalformedAmountPolicy::Skip => {
                        warn!("line {line}: skipping row with malformed amount '{raw}'");
                        skipped.push(SkippedRow {
                            line,
                            raw_amount: raw,
                            fields,
                        });
                    }
                }
            }
            Err(other) => return Err(other.into()),
        }
    }

    let rows = BatchAssembler::assemble(&records, user);
    debug!(
        "Prepared {} {} rows for user {} ({} discarded, {} skipped)",
        rows.len(),
        issuer,
        user,
        discarded,
        skipped.len()
    );

    Ok(PreparedBatch {
        rows,
        discarded,
        skipped,
    })
}
