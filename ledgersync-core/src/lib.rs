//! ledgersync-core: record types, category rules and display helpers shared by
//! the ingest, batch and CLI crates.

pub mod categories;
pub mod formula;
pub mod record;
pub mod time;

pub use categories::{CategoryBucket, CategoryRules, DEFAULT_FALLBACK};
pub use formula::{amount_formula, render_amount};
pub use record::{NormalizedRecord, OutputRow, UserSlot, UserSlotError};
pub use time::format_statement_date;
