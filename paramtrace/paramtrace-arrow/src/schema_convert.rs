use std::collections::HashMap;

use arrow::datatypes::{DataType, Field, Schema};
use paramtrace_core::Series;

// ---------------------------------------------------------------------------
// Wide layout: one x column plus one column per series
// ---------------------------------------------------------------------------

/// Builds the wide Arrow `Schema` for `series`.
///
/// The first column is `x`; every series follows as a non-nullable `Float64`
/// column named after the series, carrying its unit under the `unit` metadata key.
pub fn series_to_arrow_schema(series: &[Series]) -> Schema {
    let mut fields = Vec::with_capacity(series.len() + 1);
    fields.push(Field::new(crate::X_COLUMN, DataType::Float64, false));
    fields.extend(series.iter().map(series_field));
    Schema::new(fields)
}

fn series_field(s: &Series) -> Field {
    Field::new(&s.name, DataType::Float64, false).with_metadata(HashMap::from([(
        crate::UNIT_METADATA_KEY.to_string(),
        s.unit.clone(),
    )]))
}

// ---------------------------------------------------------------------------
// Long layout: one row per sample
// ---------------------------------------------------------------------------

/// Arrow `Schema` of the long layout: `signal`, `x`, `y`.
pub fn long_arrow_schema() -> Schema {
    Schema::new(vec![
        Field::new(crate::SIGNAL_COLUMN, DataType::Utf8, false),
        Field::new(crate::X_COLUMN, DataType::Float64, false),
        Field::new(crate::Y_COLUMN, DataType::Float64, false),
    ])
}
