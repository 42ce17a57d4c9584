//! Source connectors and extraction entrypoints.
//!
//! Most callers should use [`extract_from_origin`] (from [`unified`]), or
//! [`ExtractionPlan::extract_all`] to fan out over a configured set of
//! origins. Both are total: every failure is contained inside the
//! connector that hit it and degrades to an empty
//! [`crate::types::DataSet`], reported through the configured
//! [`ExtractionObserver`].
//!
//! Connector-specific fallible functions are also available under:
//! - [`parquet`]
//! - [`csv`]
//! - [`api`]
//! - [`sqlite`]
//! - [`webpage`]

pub mod api;
pub mod csv;
mod infer;
pub mod observability;
pub mod parquet;
pub mod plan;
pub mod sqlite;
pub mod unified;
pub mod webpage;

pub use observability::{
    CompositeObserver, ExtractionContext, ExtractionObserver, ExtractionSeverity, ExtractionStats,
    FileObserver, StdErrObserver,
};
pub use plan::ExtractionPlan;
pub use unified::{
    extract_from_origin, try_extract_from_origin, ExtractionOptions, Origin, SourceKind,
};
