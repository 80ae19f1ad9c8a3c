//! Arrow integration layer for `paramtrace`.
//!
//! Two layouts are offered:
//! - wide, via [`series_to_arrow_schema`] / [`series_to_record_batch`]: one
//!   `x` column and one `Float64` column per series. Suited to full decodes,
//!   where every series has one sample per record.
//! - long, via [`samples_to_long_batch`]: `signal`, `x`, `y` rows. Suited to
//!   decimated output, where series lengths differ.
//!
//! # Typical Flow
//! ```rust
//! use paramtrace_arrow::series_to_record_batch;
//! use paramtrace_core::{Sample, Series};
//!
//! let mut alt = Series::new("alt", "ft");
//! alt.samples = vec![Sample::new(0.0, 1200.0), Sample::new(1.0, 1210.0)];
//! let batch = series_to_record_batch(&[alt]).unwrap();
//! assert_eq!(batch.num_columns(), 2);
//! assert_eq!(batch.num_rows(), 2);
//! ```
pub mod batch_convert;
pub mod error;
pub mod schema_convert;

/// Re-exports from [`batch_convert`].
pub use batch_convert::{samples_to_long_batch, series_to_record_batch};
/// Re-export of [`error::ArrowConvertError`].
pub use error::ArrowConvertError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{long_arrow_schema, series_to_arrow_schema};

/// Name of the shared x column in both layouts.
pub const X_COLUMN: &str = "x";
/// Name of the value column in the long layout.
pub const Y_COLUMN: &str = "y";
/// Name of the series name column in the long layout.
pub const SIGNAL_COLUMN: &str = "signal";
/// Field metadata key carrying a series' display unit.
pub const UNIT_METADATA_KEY: &str = "unit";
