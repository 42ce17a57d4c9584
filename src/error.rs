use thiserror::Error;

/// Convenience result type for extraction operations.
pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Error type returned by the partial (fallible) extraction functions.
///
/// This is a single error enum shared across all five connectors. None of
/// these errors escape [`crate::extraction::extract_from_origin`], which
/// degrades every failure to an empty [`crate::types::DataSet`]; the enum
/// exists so the failure isolation boundary can log what actually went
/// wrong and distinguish a failure from a legitimately empty origin.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Parquet read/decode error.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// SQLite connection or query error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the API endpoint.
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The fetched content does not have a tabular shape (e.g. a JSON body
    /// that is neither an object nor an array of objects).
    #[error("format error: {message}")]
    Format { message: String },

    /// No table in the page matched the configured keyword.
    #[error("no table matching '{keyword}' found in page")]
    NoMatchingTable { keyword: String },
}
