use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_source_extraction::extraction::api::extract_api_from_endpoint;
use rust_source_extraction::extraction::{extract_from_origin, ExtractionOptions, Origin};
use rust_source_extraction::types::Value;

// reqwest's blocking client must not run inside an async context, so the
// mock server gets its own runtime and the extraction happens on the test
// thread.
fn serve(response: ResponseTemplate) -> (tokio::runtime::Runtime, String) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let uri = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/records"))
            .respond_with(response)
            .mount(&server)
            .await;
        format!("{}/records", server.uri())
    });
    (rt, uri)
}

#[test]
fn ok_status_with_json_array_yields_rows_and_flattened_columns() {
    let body = json!([
        {"id": 1, "name": "Ada", "location": {"lat": 51.5, "lon": -0.12}},
        {"id": 2, "name": "Grace", "location": {"lat": 38.88, "lon": -77.09}},
        {"id": 3, "name": "Edsger", "location": {"lat": 51.44, "lon": 5.47}},
    ]);
    let (_rt, endpoint) = serve(ResponseTemplate::new(200).set_body_json(body));

    let ds = extract_api_from_endpoint(&endpoint, None).unwrap();
    assert_eq!(ds.row_count(), 3);
    assert_eq!(
        ds.column_names(),
        vec!["id", "name", "location.lat", "location.lon"]
    );
    assert_eq!(ds.rows[1][1], Value::Utf8("Grace".to_string()));
    assert_eq!(ds.rows[0][2], Value::Float64(51.5));
}

#[test]
fn non_success_status_degrades_to_empty_without_error() {
    let (_rt, endpoint) = serve(ResponseTemplate::new(503));

    let origin = Origin::Api { endpoint };
    let ds = extract_from_origin(&origin, &ExtractionOptions::default());
    assert!(ds.is_empty());
}

#[test]
fn invalid_json_body_degrades_to_empty() {
    let (_rt, endpoint) = serve(ResponseTemplate::new(200).set_body_string("<html>not json</html>"));

    let origin = Origin::Api { endpoint };
    let ds = extract_from_origin(&origin, &ExtractionOptions::default());
    assert!(ds.is_empty());
}

#[test]
fn unreachable_endpoint_degrades_to_empty() {
    let origin = Origin::Api {
        endpoint: "http://127.0.0.1:1/records".to_string(),
    };
    let ds = extract_from_origin(&origin, &ExtractionOptions::default());
    assert!(ds.is_empty());
}

#[test]
fn empty_json_array_yields_empty_dataset() {
    let (_rt, endpoint) = serve(ResponseTemplate::new(200).set_body_json(json!([])));

    let ds = extract_api_from_endpoint(&endpoint, None).unwrap();
    assert_eq!(ds.row_count(), 0);
    assert_eq!(ds.column_count(), 0);
}

#[test]
fn repeated_extraction_is_row_count_identical() {
    let body = json!([{"id": 1}, {"id": 2}]);
    let (_rt, endpoint) = serve(ResponseTemplate::new(200).set_body_json(body));

    let first = extract_api_from_endpoint(&endpoint, None).unwrap();
    let second = extract_api_from_endpoint(&endpoint, None).unwrap();
    assert_eq!(first.row_count(), second.row_count());
}
