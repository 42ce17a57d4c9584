//! Columnar-file (Parquet) connector.

use std::collections::HashMap;
use std::path::Path;

use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::SerializedFileReader;
use parquet::record::Field as ParquetField;

use crate::error::ExtractionResult;
use crate::types::{DataSet, Value};

use super::infer::finish_table;

/// Extract a Parquet file into an in-memory [`DataSet`].
///
/// Column names come from the file's embedded schema (leaf column paths);
/// cell types follow the embedded values. Physical types without a direct
/// [`Value`] counterpart (timestamps, decimals, ...) keep their text
/// rendering.
pub fn extract_parquet_from_path(path: impl AsRef<Path>) -> ExtractionResult<DataSet> {
    let reader = SerializedFileReader::try_from(path.as_ref())?;

    let names: Vec<String> = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .columns()
        .iter()
        .map(|c| c.path().string())
        .collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for row_res in reader.into_iter() {
        let row = row_res?;

        // The record API yields (name, field) pairs; index them so columns
        // come out in schema order even if a row iterates differently.
        let mut by_name: HashMap<&str, &ParquetField> = HashMap::new();
        for (name, field) in row.get_column_iter() {
            by_name.insert(name.as_str(), field);
        }

        let out_row = names
            .iter()
            .map(|name| match by_name.get(name.as_str()) {
                Some(f) => convert_parquet_field(f),
                None => Value::Null,
            })
            .collect();
        rows.push(out_row);
    }

    Ok(finish_table(names, rows))
}

fn convert_parquet_field(f: &ParquetField) -> Value {
    match f {
        ParquetField::Null => Value::Null,
        ParquetField::Bool(b) => Value::Bool(*b),
        ParquetField::Byte(v) => Value::Int64(i64::from(*v)),
        ParquetField::Short(v) => Value::Int64(i64::from(*v)),
        ParquetField::Int(v) => Value::Int64(i64::from(*v)),
        ParquetField::Long(v) => Value::Int64(*v),
        ParquetField::UByte(v) => Value::Int64(i64::from(*v)),
        ParquetField::UShort(v) => Value::Int64(i64::from(*v)),
        ParquetField::UInt(v) => Value::Int64(i64::from(*v)),
        ParquetField::ULong(v) => match i64::try_from(*v) {
            Ok(n) => Value::Int64(n),
            Err(_) => Value::Utf8(v.to_string()),
        },
        ParquetField::Float(v) => Value::Float64(f64::from(*v)),
        ParquetField::Double(v) => Value::Float64(*v),
        ParquetField::Str(s) => Value::Utf8(s.clone()),
        other => Value::Utf8(other.to_string()),
    }
}
