//! Relational-table (SQLite) connector.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

use crate::error::ExtractionResult;
use crate::types::{DataSet, Value};

use super::infer::finish_table;

/// Extract a full SQLite table into an in-memory [`DataSet`].
///
/// The connection is scoped to this call and closed on every exit path.
/// The table name is interpolated into the statement, not bound; it must
/// come from trusted configuration, never from external input.
pub fn extract_table_from_sqlite(
    db_path: impl AsRef<Path>,
    table: &str,
) -> ExtractionResult<DataSet> {
    let conn = Connection::open_with_flags(
        db_path.as_ref(),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    let mut stmt = conn.prepare(&format!("SELECT * FROM {table}"))?;
    let names: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    let width = names.len();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    let mut result_rows = stmt.query([])?;
    while let Some(row) = result_rows.next()? {
        let mut out_row = Vec::with_capacity(width);
        for idx in 0..width {
            out_row.push(match row.get_ref(idx)? {
                ValueRef::Null => Value::Null,
                ValueRef::Integer(v) => Value::Int64(v),
                ValueRef::Real(v) => Value::Float64(v),
                ValueRef::Text(t) => Value::Utf8(String::from_utf8_lossy(t).into_owned()),
                ValueRef::Blob(b) => Value::Utf8(String::from_utf8_lossy(b).into_owned()),
            });
        }
        rows.push(out_row);
    }

    // SQLite types cells, not columns; promotion settles one type per column.
    Ok(finish_table(names, rows))
}
