use arrow::datatypes::DataType;
use paramtrace_arrow::{long_arrow_schema, series_to_arrow_schema};
use paramtrace_core::Series;

#[test]
fn wide_schema_starts_with_x() {
    let schema = series_to_arrow_schema(&[Series::new("alt", "ft"), Series::new("ias", "kt")]);

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, vec!["x", "alt", "ias"]);
    for field in schema.fields() {
        assert_eq!(field.data_type(), &DataType::Float64);
        assert!(!field.is_nullable());
    }
}

#[test]
fn wide_schema_carries_unit_metadata() {
    let schema = series_to_arrow_schema(&[Series::new("alt", "ft"), Series::new("flag", "")]);

    let alt = schema.field_with_name("alt").unwrap();
    assert_eq!(alt.metadata().get("unit").map(String::as_str), Some("ft"));
    let flag = schema.field_with_name("flag").unwrap();
    assert_eq!(flag.metadata().get("unit").map(String::as_str), Some(""));
    assert!(schema.field_with_name("x").unwrap().metadata().is_empty());
}

#[test]
fn wide_schema_without_series_has_only_x() {
    let schema = series_to_arrow_schema(&[]);
    assert_eq!(schema.fields().len(), 1);
    assert_eq!(schema.field(0).name(), "x");
}

#[test]
fn long_schema_columns() {
    let schema = long_arrow_schema();
    let columns: Vec<(&str, &DataType)> = schema
        .fields()
        .iter()
        .map(|f| (f.name().as_str(), f.data_type()))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("signal", &DataType::Utf8),
            ("x", &DataType::Float64),
            ("y", &DataType::Float64),
        ]
    );
}
