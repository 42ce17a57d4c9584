//! Per-column type inference shared by the connectors.
//!
//! The origins this crate extracts from carry no caller-provided schema, so
//! each connector collects raw values and lets [`finish_table`] settle the
//! column types: a column takes the single type of its values, integer and
//! float mix to float, and anything else falls back to text.

use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Parse a text cell into the narrowest matching [`Value`].
///
/// Tried in order: Int64, Float64, Bool, Utf8. Empty or whitespace-only
/// cells become [`Value::Null`].
pub(crate) fn parse_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Int64(n);
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        return Value::Float64(n);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Value::Bool(true),
        "false" | "f" | "no" | "n" => Value::Bool(false),
        _ => Value::Utf8(trimmed.to_owned()),
    }
}

/// Build a [`DataSet`] from column names and raw rows, inferring one
/// [`DataType`] per column and coercing cells to it.
///
/// Rows shorter than the header are padded with nulls; longer rows are
/// truncated. A table with no columns collapses to [`DataSet::empty`].
pub(crate) fn finish_table(names: Vec<String>, mut rows: Vec<Vec<Value>>) -> DataSet {
    if names.is_empty() {
        return DataSet::empty();
    }

    let width = names.len();
    for row in &mut rows {
        row.resize(width, Value::Null);
    }

    let fields = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let ty = column_type(rows.iter().map(|row| &row[idx]));
            Field::new(name, ty)
        })
        .collect::<Vec<_>>();

    for row in &mut rows {
        for (cell, field) in row.iter_mut().zip(&fields) {
            coerce_in_place(cell, &field.data_type);
        }
    }

    DataSet::new(Schema::new(fields), rows)
}

fn column_type<'a>(values: impl Iterator<Item = &'a Value>) -> DataType {
    let mut ty: Option<DataType> = None;
    for v in values {
        let vt = match v {
            Value::Null => continue,
            Value::Int64(_) => DataType::Int64,
            Value::Float64(_) => DataType::Float64,
            Value::Bool(_) => DataType::Bool,
            Value::Utf8(_) => DataType::Utf8,
        };
        ty = Some(match ty {
            None => vt,
            Some(t) if t == vt => t,
            Some(DataType::Int64) if vt == DataType::Float64 => DataType::Float64,
            Some(DataType::Float64) if vt == DataType::Int64 => DataType::Float64,
            Some(_) => DataType::Utf8,
        });
        if ty == Some(DataType::Utf8) {
            break;
        }
    }
    // An all-null column still needs a concrete type.
    ty.unwrap_or(DataType::Utf8)
}

fn coerce_in_place(cell: &mut Value, ty: &DataType) {
    let coerced = match (&*cell, ty) {
        (Value::Null, _) => return,
        (Value::Int64(_), DataType::Int64)
        | (Value::Float64(_), DataType::Float64)
        | (Value::Bool(_), DataType::Bool)
        | (Value::Utf8(_), DataType::Utf8) => return,
        (Value::Int64(n), DataType::Float64) => Value::Float64(*n as f64),
        (v, DataType::Utf8) => Value::Utf8(render(v)),
        // column_type never assigns a narrower type than the values it saw
        (v, _) => Value::Utf8(render(v)),
    };
    *cell = coerced;
}

fn render(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Int64(n) => n.to_string(),
        Value::Float64(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Utf8(s) => s.clone(),
    }
}
