use arrow::error::ArrowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowConvertError {
    #[error("Cannot create RecordBatch from an empty series list")]
    EmptySeries,
    #[error("series '{series}' has {actual} samples, expected {expected}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
