//! Origin identifiers and the failure isolation boundary.
//!
//! Most callers should use [`extract_from_origin`], which is **total**: it
//! dispatches to the connector for the origin's kind and returns a
//! [`DataSet`] no matter what happened — any internal failure is reported
//! to the configured [`ExtractionObserver`] and degraded to
//! [`DataSet::empty`]. The fallible per-connector entry points remain
//! available via [`try_extract_from_origin`] and the format modules.

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ExtractionError, ExtractionResult};
use crate::types::DataSet;

use super::observability::{
    ExtractionContext, ExtractionObserver, ExtractionSeverity, ExtractionStats,
};
use super::{api, csv, parquet, sqlite, webpage};

/// The five supported origin kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Columnar file (Parquet).
    Parquet,
    /// Delimited text file with a header row.
    Csv,
    /// JSON HTTP(S) endpoint.
    Api,
    /// SQLite table.
    Sqlite,
    /// HTML page with keyword-matched tables.
    Webpage,
}

/// Where to extract from.
///
/// Origins are immutable values supplied by the caller's configuration
/// layer; extraction is stateless and idempotent given the same origin and
/// unchanged origin content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A Parquet file on disk.
    Parquet { path: PathBuf },
    /// A CSV file on disk.
    Csv { path: PathBuf },
    /// A JSON HTTP(S) endpoint.
    Api { endpoint: String },
    /// A table in a SQLite database file.
    SqliteTable { db_path: PathBuf, table: String },
    /// A table in a web page, selected by keyword.
    WebTable { url: String, keyword: String },
}

impl Origin {
    /// The connector kind this origin dispatches to.
    pub fn kind(&self) -> SourceKind {
        match self {
            Origin::Parquet { .. } => SourceKind::Parquet,
            Origin::Csv { .. } => SourceKind::Csv,
            Origin::Api { .. } => SourceKind::Api,
            Origin::SqliteTable { .. } => SourceKind::Sqlite,
            Origin::WebTable { .. } => SourceKind::Webpage,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Parquet { path } | Origin::Csv { path } => write!(f, "{}", path.display()),
            Origin::Api { endpoint } => write!(f, "{endpoint}"),
            Origin::SqliteTable { db_path, table } => {
                write!(f, "{}::{table}", db_path.display())
            }
            Origin::WebTable { url, keyword } => write!(f, "{url} (match '{keyword}')"),
        }
    }
}

/// Options controlling extraction behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ExtractionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ExtractionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ExtractionSeverity,
    /// Per-request deadline for the HTTP-backed connectors.
    ///
    /// `None` means no deadline. Failures caused by an elapsed deadline
    /// degrade to an empty dataset like any other failure.
    pub http_timeout: Option<Duration>,
}

impl fmt::Debug for ExtractionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: ExtractionSeverity::Critical,
            http_timeout: None,
        }
    }
}

/// Fallible extraction: dispatch to the connector for `origin`'s kind.
pub fn try_extract_from_origin(
    origin: &Origin,
    options: &ExtractionOptions,
) -> ExtractionResult<DataSet> {
    match origin {
        Origin::Parquet { path } => parquet::extract_parquet_from_path(path),
        Origin::Csv { path } => csv::extract_csv_from_path(path),
        Origin::Api { endpoint } => api::extract_api_from_endpoint(endpoint, options.http_timeout),
        Origin::SqliteTable { db_path, table } => sqlite::extract_table_from_sqlite(db_path, table),
        Origin::WebTable { url, keyword } => {
            webpage::extract_table_from_webpage(url, keyword, options.http_timeout)
        }
    }
}

/// Total extraction: always returns a well-formed [`DataSet`].
///
/// On success the observer receives `on_success` with the row count; on
/// failure it receives `on_failure` with a computed severity (and
/// `on_alert` when the severity is >= `options.alert_at_or_above`) and the
/// caller receives [`DataSet::empty`].
///
/// One exception, kept from the behavior this crate reimplements: a
/// non-success HTTP status from the API origin returns an empty dataset
/// with no observer callback at all.
pub fn extract_from_origin(origin: &Origin, options: &ExtractionOptions) -> DataSet {
    let ctx = ExtractionContext {
        kind: origin.kind(),
        origin: origin.to_string(),
    };

    match try_extract_from_origin(origin, options) {
        Ok(ds) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(&ctx, ExtractionStats { rows: ds.row_count() });
            }
            ds
        }
        Err(ExtractionError::Status { .. }) if ctx.kind == SourceKind::Api => DataSet::empty(),
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                let sev = severity_for_error(&e);
                obs.on_failure(&ctx, sev, &e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, &e);
                }
            }
            DataSet::empty()
        }
    }
}

fn severity_for_error(e: &ExtractionError) -> ExtractionSeverity {
    match e {
        ExtractionError::Io(_) => ExtractionSeverity::Critical,
        ExtractionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => ExtractionSeverity::Critical,
            _ => ExtractionSeverity::Error,
        },
        ExtractionError::Parquet(err) => {
            // Parquet errors often wrap IO, but not always in a structured
            // way; probe the source chain.
            if error_chain_contains_io(err) {
                ExtractionSeverity::Critical
            } else {
                ExtractionSeverity::Error
            }
        }
        ExtractionError::Sqlite(rusqlite::Error::SqliteFailure(err, _))
            if err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            ExtractionSeverity::Critical
        }
        ExtractionError::Sqlite(_) => ExtractionSeverity::Error,
        ExtractionError::Http(err) => {
            if err.is_connect() || err.is_timeout() {
                ExtractionSeverity::Critical
            } else {
                ExtractionSeverity::Error
            }
        }
        ExtractionError::Status { .. } => ExtractionSeverity::Error,
        ExtractionError::Format { .. } => ExtractionSeverity::Error,
        ExtractionError::NoMatchingTable { .. } => ExtractionSeverity::Error,
    }
}

fn error_chain_contains_io(e: &(dyn StdError + 'static)) -> bool {
    let mut cur: Option<&(dyn StdError + 'static)> = Some(e);
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}
