//! Export layouts, one module per issuer.

pub mod cibc;
pub mod tangerine;

/// Transfers to accounts tracked outside this ledger.
pub(crate) const TRANSFER_KEYWORDS: [&str; 2] = ["FREEDOM", "ROGERS"];
