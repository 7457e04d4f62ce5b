use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Amount text that is not a finite decimal once `,` and `$` are removed.
    #[error("line {line}: malformed amount '{raw}' in row {fields:?}")]
    MalformedAmount {
        line: usize,
        raw: String,
        fields: Vec<String>,
    },

    #[error("unknown issuer '{0}': expected tangerine or cibc")]
    UnknownIssuer(String),

    #[error("invalid reward pattern: {0}")]
    Pattern(#[from] regex::Error),
}
