//! HTTP-API (JSON) connector.
//!
//! Fetches a JSON endpoint and normalizes the records into a [`DataSet`]:
//! one row per top-level record, nested objects flattened into dotted
//! column names (`user.name`). The column set is the first-seen-ordered
//! union of keys across all records; keys a record lacks become nulls.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{ExtractionError, ExtractionResult};
use crate::types::{DataSet, Value};

use super::infer::finish_table;

/// Extract a JSON HTTP(S) endpoint into an in-memory [`DataSet`].
///
/// Performs a single GET. Server certificates are validated against the
/// standard trusted-CA bundle (rustls/webpki roots). A non-success status
/// returns [`ExtractionError::Status`]; the body must be a JSON object or
/// an array of objects.
pub fn extract_api_from_endpoint(
    endpoint: &str,
    timeout: Option<Duration>,
) -> ExtractionResult<DataSet> {
    let mut builder = Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    let client = builder.build()?;

    let response = client.get(endpoint).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ExtractionError::Status {
            url: endpoint.to_owned(),
            status: status.as_u16(),
        });
    }

    let body: serde_json::Value = response.json()?;
    normalize_records(body)
}

/// Flatten a parsed JSON body into a [`DataSet`].
///
/// Exposed so response bodies can be normalized without a live endpoint.
pub fn normalize_records(body: serde_json::Value) -> ExtractionResult<DataSet> {
    let records = match body {
        serde_json::Value::Array(items) => items,
        obj @ serde_json::Value::Object(_) => vec![obj],
        _ => {
            return Err(ExtractionError::Format {
                message: "json body must be an object or an array of objects".to_string(),
            });
        }
    };

    let mut names: Vec<String> = Vec::new();
    let mut flats: Vec<Vec<(String, Value)>> = Vec::with_capacity(records.len());

    for (idx0, record) in records.iter().enumerate() {
        let obj = record.as_object().ok_or_else(|| ExtractionError::Format {
            message: format!("record {} is not a json object", idx0 + 1),
        })?;

        let mut flat = Vec::new();
        flatten_object("", obj, &mut flat);
        for (key, _) in &flat {
            if !names.iter().any(|n| n == key) {
                names.push(key.clone());
            }
        }
        flats.push(flat);
    }

    let rows = flats
        .into_iter()
        .map(|flat| {
            names
                .iter()
                .map(|name| {
                    flat.iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, v)| v.clone())
                        .unwrap_or(Value::Null)
                })
                .collect()
        })
        .collect();

    Ok(finish_table(names, rows))
}

fn flatten_object(
    prefix: &str,
    obj: &serde_json::Map<String, serde_json::Value>,
    out: &mut Vec<(String, Value)>,
) {
    for (key, v) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match v {
            serde_json::Value::Object(inner) => flatten_object(&path, inner, out),
            other => out.push((path, scalar_from_json(other))),
        }
    }
}

fn scalar_from_json(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int64(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float64(f)
            } else {
                Value::Utf8(n.to_string())
            }
        }
        serde_json::Value::String(s) => Value::Utf8(s.clone()),
        // Arrays are not expanded into rows; keep their JSON text.
        serde_json::Value::Array(_) => Value::Utf8(v.to_string()),
        serde_json::Value::Object(_) => unreachable!("objects are flattened by the caller"),
    }
}
