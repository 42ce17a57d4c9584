//! Extraction orchestrator.

use std::path::PathBuf;

use crate::types::DataSet;

use super::unified::{extract_from_origin, ExtractionOptions, Origin};

/// The fixed set of origin identifiers one extraction run fans out to.
///
/// [`extract_all`](Self::extract_all) invokes every connector exactly once,
/// sequentially, in a fixed order, and returns the five results positionally
/// aligned to that order. The plan performs no merging, validation, or error
/// handling of its own: each connector already degrades its failures to an
/// empty [`DataSet`], so no extraction run can fail as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPlan {
    /// Path to the Parquet file.
    pub parquet_path: PathBuf,
    /// Path to the CSV file.
    pub csv_path: PathBuf,
    /// JSON API endpoint URL.
    pub api_endpoint: String,
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// Table to read from the database.
    pub table_name: String,
    /// Web page URL.
    pub webpage_url: String,
    /// Keyword selecting the table within the page.
    pub match_keyword: String,
}

impl ExtractionPlan {
    /// The plan's origins, in invocation order.
    pub fn origins(&self) -> [Origin; 5] {
        [
            Origin::Parquet {
                path: self.parquet_path.clone(),
            },
            Origin::Csv {
                path: self.csv_path.clone(),
            },
            Origin::Api {
                endpoint: self.api_endpoint.clone(),
            },
            Origin::SqliteTable {
                db_path: self.db_path.clone(),
                table: self.table_name.clone(),
            },
            Origin::WebTable {
                url: self.webpage_url.clone(),
                keyword: self.match_keyword.clone(),
            },
        ]
    }

    /// Run every connector once and collect the results.
    ///
    /// Returned order: parquet, csv, api, sqlite table, web table.
    pub fn extract_all(
        &self,
        options: &ExtractionOptions,
    ) -> (DataSet, DataSet, DataSet, DataSet, DataSet) {
        let [parquet, csv, api, db, web] = self
            .origins()
            .map(|origin| extract_from_origin(&origin, options));
        (parquet, csv, api, db, web)
    }
}
