use rust_source_extraction::extraction::csv::{extract_csv_from_path, extract_csv_from_reader};
use rust_source_extraction::extraction::{extract_from_origin, ExtractionOptions, Origin};
use rust_source_extraction::types::{DataType, Value};

#[test]
fn extract_csv_from_path_happy_path() {
    let ds = extract_csv_from_path("tests/fixtures/collisions.csv").unwrap();

    assert_eq!(ds.row_count(), 4);
    assert_eq!(
        ds.column_names(),
        vec!["collision_id", "borough", "persons_injured", "latitude"]
    );
    assert_eq!(
        ds.rows[0],
        vec![
            Value::Int64(4455641),
            Value::Utf8("BROOKLYN".to_string()),
            Value::Int64(2),
            Value::Float64(40.667202),
        ]
    );
}

#[test]
fn empty_cells_become_nulls() {
    let ds = extract_csv_from_path("tests/fixtures/collisions.csv").unwrap();

    assert_eq!(ds.rows[2][1], Value::Null);
    assert_eq!(ds.rows[2][3], Value::Null);
}

#[test]
fn per_column_types_are_inferred() {
    let ds = extract_csv_from_path("tests/fixtures/collisions.csv").unwrap();

    let types: Vec<_> = ds.schema.fields.iter().map(|f| f.data_type.clone()).collect();
    assert_eq!(
        types,
        vec![
            DataType::Int64,
            DataType::Utf8,
            DataType::Int64,
            DataType::Float64,
        ]
    );
}

#[test]
fn mixed_numeric_column_promotes_to_float() {
    let input = "id,amount\n1,5\n2,5.5\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = extract_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.schema.fields[1].data_type, DataType::Float64);
    assert_eq!(ds.rows[0][1], Value::Float64(5.0));
}

#[test]
fn header_only_input_yields_columns_and_zero_rows() {
    let input = "a,b\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let ds = extract_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.row_count(), 0);
    assert_eq!(ds.column_count(), 2);
}

#[test]
fn missing_file_errors_on_fallible_path() {
    let err = extract_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(err.to_string().contains("csv error"));
}

#[test]
fn missing_file_degrades_to_empty_through_boundary() {
    let origin = Origin::Csv {
        path: "tests/fixtures/does_not_exist.csv".into(),
    };
    let ds = extract_from_origin(&origin, &ExtractionOptions::default());
    assert!(ds.is_empty());
}

#[test]
fn repeated_extraction_is_row_count_identical() {
    let first = extract_csv_from_path("tests/fixtures/collisions.csv").unwrap();
    let second = extract_csv_from_path("tests/fixtures/collisions.csv").unwrap();
    assert_eq!(first.row_count(), second.row_count());
}
