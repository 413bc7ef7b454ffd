use std::path::PathBuf;

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// The catalog could not be read or parsed.
///
/// Every variant means "catalog unavailable" to callers; the variants only
/// carry the cause for logs and error messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog unavailable: malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog unavailable: missing column {0:?}")]
    MissingColumn(&'static str),

    #[error("catalog unavailable: invalid price {value:?} on line {line}")]
    InvalidPrice { line: u64, value: String },
}
