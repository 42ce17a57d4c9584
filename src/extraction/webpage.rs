//! HTML-table connector.
//!
//! Fetches a page and pulls out the first `<table>` whose text matches a
//! keyword, in the shape of a [`DataSet`]. Parsing is split from fetching
//! so captured pages can be extracted offline in tests.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractionError, ExtractionResult};
use crate::types::{DataSet, Value};

use super::infer::{finish_table, parse_scalar};

// Some sites reject default library user agents outright.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/139.0.0.0 Safari/537.36";

/// Fetch a page and extract the first table matching `keyword`.
pub fn extract_table_from_webpage(
    url: &str,
    keyword: &str,
    timeout: Option<Duration>,
) -> ExtractionResult<DataSet> {
    let mut builder = Client::builder().user_agent(BROWSER_USER_AGENT);
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    let client = builder.build()?;

    let response = client.get(url).send()?.error_for_status()?;
    let html = response.text()?;
    extract_table_from_html(&html, keyword)
}

/// Extract the first keyword-matching `<table>` from an HTML document.
///
/// A table matches when any of its text content (captions included)
/// contains `keyword`. The first row supplies the column names (`<th>`
/// cells preferred); remaining rows become data rows, padded or truncated
/// to the header width, with per-column type inference.
pub fn extract_table_from_html(html: &str, keyword: &str) -> ExtractionResult<DataSet> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse("table").unwrap();

    let table = document
        .select(&table_sel)
        .find(|t| table_matches_keyword(t, keyword))
        .ok_or_else(|| ExtractionError::NoMatchingTable {
            keyword: keyword.to_owned(),
        })?;

    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("th, td").unwrap();

    let mut table_rows = table.select(&row_sel);
    let header = match table_rows.next() {
        Some(tr) => tr
            .select(&cell_sel)
            .map(|cell| cell_text(&cell))
            .collect::<Vec<_>>(),
        None => Vec::new(),
    };

    let rows = table_rows
        .map(|tr| {
            tr.select(&cell_sel)
                .map(|cell| parse_scalar(&cell_text(&cell)))
                .collect::<Vec<Value>>()
        })
        .collect();

    Ok(finish_table(header, rows))
}

fn table_matches_keyword(table: &ElementRef<'_>, keyword: &str) -> bool {
    table.text().any(|t| t.contains(keyword))
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
