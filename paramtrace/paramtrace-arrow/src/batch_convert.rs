//! Conversion from decoded `Series` to Arrow `RecordBatch`.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Float64Builder, StringBuilder};
use arrow::record_batch::RecordBatch;
use paramtrace_core::Series;

use crate::error::ArrowConvertError;
use crate::schema_convert::{long_arrow_schema, series_to_arrow_schema};

/// Convert equal-length series to a wide RecordBatch.
///
/// The `x` column is taken from the first series; the remaining columns hold
/// each series' `y` values in order.
pub fn series_to_record_batch(series: &[Series]) -> Result<RecordBatch, ArrowConvertError> {
    let first = series.first().ok_or(ArrowConvertError::EmptySeries)?;
    let rows = first.len();
    if let Some(bad) = series.iter().find(|s| s.len() != rows) {
        return Err(ArrowConvertError::LengthMismatch {
            series: bad.name.clone(),
            expected: rows,
            actual: bad.len(),
        });
    }

    let schema = Arc::new(series_to_arrow_schema(series));
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(series.len() + 1);
    arrays.push(Arc::new(
        first.samples.iter().map(|s| s.x).collect::<Float64Array>(),
    ));
    for s in series {
        arrays.push(Arc::new(
            s.samples.iter().map(|p| p.y).collect::<Float64Array>(),
        ));
    }

    Ok(RecordBatch::try_new(schema, arrays)?)
}

/// Convert series of any length to a long RecordBatch with one row per sample.
///
/// Rows are grouped by series in input order, each group in sample order.
pub fn samples_to_long_batch(series: &[Series]) -> Result<RecordBatch, ArrowConvertError> {
    let rows: usize = series.iter().map(Series::len).sum();
    let name_bytes: usize = series.iter().map(|s| s.name.len() * s.len()).sum();

    let mut signal = StringBuilder::with_capacity(rows, name_bytes);
    let mut x = Float64Builder::with_capacity(rows);
    let mut y = Float64Builder::with_capacity(rows);
    for s in series {
        for p in &s.samples {
            signal.append_value(&s.name);
            x.append_value(p.x);
            y.append_value(p.y);
        }
    }

    let arrays: Vec<ArrayRef> = vec![
        Arc::new(signal.finish()),
        Arc::new(x.finish()),
        Arc::new(y.finish()),
    ];
    Ok(RecordBatch::try_new(Arc::new(long_arrow_schema()), arrays)?)
}
