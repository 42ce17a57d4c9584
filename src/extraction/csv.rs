//! Delimited-file (CSV) connector.

use std::path::Path;

use crate::error::ExtractionResult;
use crate::types::DataSet;

use super::infer::{finish_table, parse_scalar};

/// Extract a CSV file into an in-memory [`DataSet`].
///
/// The first row is the header and defines the column names; column types
/// are inferred per column, best effort (integer, float, bool, else text).
pub fn extract_csv_from_path(path: impl AsRef<Path>) -> ExtractionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    extract_csv_from_reader(&mut rdr)
}

/// Extract CSV data from an existing CSV reader.
pub fn extract_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ExtractionResult<DataSet> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = (0..headers.len())
            .map(|idx| parse_scalar(record.get(idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(finish_table(headers, rows))
}
