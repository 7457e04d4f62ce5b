//! Batch assembler: places normalized records into five-column sheet rows.

use ledgersync_core::{NormalizedRecord, OutputRow, UserSlot};

pub struct BatchAssembler;

impl BatchAssembler {
    /// One output row per record, in input order.
    pub fn assemble(records: &[NormalizedRecord], user: UserSlot) -> Vec<OutputRow> {
        records.iter().map(|r| OutputRow::place(r, user)).collect()
    }

    /// Cell values in the shape spreadsheet range updates expect.
    pub fn to_values(rows: &[OutputRow]) -> Vec<Vec<String>> {
        rows.iter().map(|r| r.clone().into_cells()).collect()
    }
}
