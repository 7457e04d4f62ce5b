//! ledgersync-ingest: issuer profiles and the per-row normalizer that turns raw
//! statement CSV rows into [`NormalizedRecord`](ledgersync_core::NormalizedRecord)s.

pub mod amount;
pub mod error;
pub mod issuers;
pub mod normalize;
pub mod types;

pub use error::IngestError;
pub use normalize::Normalizer;
pub use types::{DiscardReason, FieldLayout, Issuer, IssuerProfile, RawRow, RowOutcome};
