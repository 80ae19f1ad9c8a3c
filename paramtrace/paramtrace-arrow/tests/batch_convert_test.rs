use arrow::array::{Array, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use paramtrace_arrow::{ArrowConvertError, samples_to_long_batch, series_to_record_batch};
use paramtrace_core::{Sample, Series};

fn series(name: &str, unit: &str, points: &[(f64, f64)]) -> Series {
    let mut s = Series::new(name, unit);
    s.samples = points.iter().copied().map(Sample::from).collect();
    s
}

fn f64_column(batch: &RecordBatch, name: &str) -> Vec<f64> {
    batch
        .column_by_name(name)
        .unwrap()
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap()
        .values()
        .to_vec()
}

#[test]
fn wide_batch_has_x_and_one_column_per_series() {
    let batch = series_to_record_batch(&[
        series("a", "", &[(0.0, 3.0), (1.0, 5.0), (2.0, 7.0)]),
        series("b", "deg", &[(0.0, -1.0), (1.0, -2.0), (2.0, -3.0)]),
    ])
    .unwrap();

    assert_eq!(batch.num_rows(), 3);
    assert_eq!(batch.num_columns(), 3);
    assert_eq!(f64_column(&batch, "x"), vec![0.0, 1.0, 2.0]);
    assert_eq!(f64_column(&batch, "a"), vec![3.0, 5.0, 7.0]);
    assert_eq!(f64_column(&batch, "b"), vec![-1.0, -2.0, -3.0]);
    assert_eq!(batch.column(1).null_count(), 0);
}

#[test]
fn wide_batch_schema_keeps_units() {
    let batch = series_to_record_batch(&[series("alt", "ft", &[(0.0, 1.0)])]).unwrap();
    let schema = batch.schema();
    let field = schema.field_with_name("alt").unwrap();
    assert_eq!(field.metadata().get("unit").map(String::as_str), Some("ft"));
}

#[test]
fn wide_batch_rejects_empty_series_list() {
    let err = series_to_record_batch(&[]).unwrap_err();
    assert!(matches!(err, ArrowConvertError::EmptySeries));
}

#[test]
fn wide_batch_rejects_length_mismatch() {
    let err = series_to_record_batch(&[
        series("a", "", &[(0.0, 1.0), (1.0, 2.0)]),
        series("b", "", &[(0.0, 1.0)]),
    ])
    .unwrap_err();
    match err {
        ArrowConvertError::LengthMismatch {
            series,
            expected,
            actual,
        } => {
            assert_eq!(series, "b");
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wide_batch_of_empty_series_has_no_rows() {
    let batch = series_to_record_batch(&[Series::new("a", ""), Series::new("b", "")]).unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.num_columns(), 3);
}

#[test]
fn long_batch_concatenates_series_in_order() {
    let batch = samples_to_long_batch(&[
        series("a", "", &[(0.0, 1.0), (5.0, 2.0)]),
        series("b", "", &[(0.0, 9.0), (2.0, 8.0), (5.0, 7.0)]),
    ])
    .unwrap();

    assert_eq!(batch.num_rows(), 5);
    let signal = batch
        .column_by_name("signal")
        .unwrap()
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap();
    let names: Vec<&str> = signal.iter().map(|v| v.unwrap()).collect();
    assert_eq!(names, vec!["a", "a", "b", "b", "b"]);
    assert_eq!(f64_column(&batch, "x"), vec![0.0, 5.0, 0.0, 2.0, 5.0]);
    assert_eq!(f64_column(&batch, "y"), vec![1.0, 2.0, 9.0, 8.0, 7.0]);
}

#[test]
fn long_batch_of_nothing_is_empty() {
    let batch = samples_to_long_batch(&[]).unwrap();
    assert_eq!(batch.num_rows(), 0);
    assert_eq!(batch.num_columns(), 3);
}
