//! ledgersync-batch: statement CSV reading, batch assembly and the sheet
//! range arithmetic used by the uploader.

pub mod assembler;
pub mod pipeline;
pub mod sheet_range;
pub mod statement_csv;

pub use assembler::BatchAssembler;
pub use pipeline::{
    MalformedAmountPolicy, PipelineError, PipelineOptions, PreparedBatch, SkippedRow,
    prepare_batch,
};
pub use sheet_range::{
    DEFAULT_START_ROW, append_range, column_a_range, find_worksheet, first_free_row,
};
pub use statement_csv::{parse_statement_rows, read_statement_rows};
