//! `rust-source-extraction` is a small library for pulling tabular data out
//! of heterogeneous origins into a common in-memory [`types::DataSet`].
//!
//! Five connectors are provided, one per origin kind:
//!
//! - **Parquet files** (`.parquet`), schema taken from the file
//! - **CSV files** with a header row, per-column type inference
//! - **JSON HTTP(S) APIs**, nested records flattened into dotted columns
//! - **SQLite tables**, full `SELECT *` materialization
//! - **HTML pages**, first `<table>` matching a keyword
//!
//! ## The extraction contract
//!
//! Every connector's public operation is *total*: it always returns a
//! well-formed [`types::DataSet`], degrading any internal failure (missing
//! file, refused connection, malformed content, missing table) to the empty
//! dataset instead of returning an error. Failures are observable through
//! an injected [`extraction::ExtractionObserver`], never through the return
//! path — downstream consumers need no fault handling of their own.
//!
//! ## Quick example: one origin
//!
//! ```no_run
//! use rust_source_extraction::extraction::{extract_from_origin, ExtractionOptions, Origin};
//!
//! let origin = Origin::Csv { path: "data/collisions.csv".into() };
//! let ds = extract_from_origin(&origin, &ExtractionOptions::default());
//! println!("rows={}", ds.row_count());
//! ```
//!
//! ## Quick example: fan out over all five origins
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rust_source_extraction::extraction::{ExtractionOptions, ExtractionPlan, StdErrObserver};
//!
//! let plan = ExtractionPlan {
//!     parquet_path: "data/trips.parquet".into(),
//!     csv_path: "data/collisions.csv".into(),
//!     api_endpoint: "https://example.org/resource/records.json".to_string(),
//!     db_path: "data/movies.sqlite".into(),
//!     table_name: "movies".to_string(),
//!     webpage_url: "https://example.org/rankings".to_string(),
//!     match_keyword: "by country".to_string(),
//! };
//!
//! let opts = ExtractionOptions {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..Default::default()
//! };
//!
//! // Always a 5-tuple, positionally aligned, however many origins failed.
//! let (parquet, csv, api, db, web) = plan.extract_all(&opts);
//! println!(
//!     "rows: {} {} {} {} {}",
//!     parquet.row_count(),
//!     csv.row_count(),
//!     api.row_count(),
//!     db.row_count(),
//!     web.row_count(),
//! );
//! ```
//!
//! ## Modules
//!
//! - [`extraction`]: connectors, origins, orchestration, observability
//! - [`types`]: the in-memory dataset types
//! - [`error`]: the error type used by the fallible entry points

pub mod error;
pub mod extraction;
pub mod types;

pub use error::{ExtractionError, ExtractionResult};
