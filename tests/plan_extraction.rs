use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_source_extraction::extraction::{ExtractionOptions, ExtractionPlan};

fn tmp_db() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("rust-source-extraction-plan-{nanos}.sqlite"))
}

#[test]
fn all_origins_unreachable_still_returns_five_empty_results() {
    let plan = ExtractionPlan {
        parquet_path: "does/not/exist.parquet".into(),
        csv_path: "does/not/exist.csv".into(),
        api_endpoint: "http://127.0.0.1:1/records".to_string(),
        db_path: "does/not/exist.sqlite".into(),
        table_name: "movies".to_string(),
        webpage_url: "http://127.0.0.1:1/rankings".to_string(),
        match_keyword: "by country".to_string(),
    };

    let (parquet, csv, api, db, web) = plan.extract_all(&ExtractionOptions::default());
    assert!(parquet.is_empty());
    assert!(csv.is_empty());
    assert!(api.is_empty());
    assert!(db.is_empty());
    assert!(web.is_empty());
}

#[test]
fn successful_origins_land_in_their_positions() {
    let db_path = tmp_db();
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE movies (id INTEGER, title TEXT);
         INSERT INTO movies VALUES (1, 'Metropolis'), (2, 'Stalker');",
    )
    .unwrap();
    drop(conn);

    let rt = tokio::runtime::Runtime::new().unwrap();
    let (api_endpoint, webpage_url) = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/records"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}, {"id": 3}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rankings"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                std::fs::read_to_string("tests/fixtures/rankings.html").unwrap(),
            ))
            .mount(&server)
            .await;
        (
            format!("{}/records", server.uri()),
            format!("{}/rankings", server.uri()),
        )
    });

    let plan = ExtractionPlan {
        // No parquet origin available in this scenario; its slot must
        // come back empty without disturbing the other four.
        parquet_path: "does/not/exist.parquet".into(),
        csv_path: "tests/fixtures/collisions.csv".into(),
        api_endpoint,
        db_path: db_path.clone(),
        table_name: "movies".to_string(),
        webpage_url,
        match_keyword: "by country".to_string(),
    };

    let (parquet, csv, api, db, web) = plan.extract_all(&ExtractionOptions::default());
    assert!(parquet.is_empty());
    assert_eq!(csv.row_count(), 4);
    assert_eq!(api.row_count(), 3);
    assert_eq!(db.row_count(), 2);
    assert_eq!(web.row_count(), 3);

    let _ = std::fs::remove_file(&db_path);
}
