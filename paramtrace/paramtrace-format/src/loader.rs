//! Conversion from a JSON format definition to a [`Schema`].
//!
//! [`load_schema`] is the single public entry point. Fields are read through
//! the small typed accessors below, each of which falls back to the documented
//! default when a key is absent or holds a value of the wrong JSON type.

use std::collections::BTreeMap;

use paramtrace_core::{
    ByteOrder, Schema, SchemaError, SignalSpec, TimeUnit, TraceError, ValueType,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

type Object = Map<String, Value>;

/// Parse and validate a format definition document.
pub fn load_schema(data: impl AsRef<[u8]>) -> Result<Schema, TraceError> {
    let doc: Value = serde_json::from_slice(data.as_ref()).map_err(TraceError::parse)?;
    let root = doc
        .as_object()
        .ok_or_else(|| TraceError::parse("format definition root must be a JSON object"))?;

    let schema = parse_root(root)?;
    debug!(
        record_size = schema.record_size,
        signals = schema.signals.len(),
        groups = schema.group_descriptions.len(),
        "format definition loaded"
    );
    Ok(schema)
}

fn parse_root(root: &Object) -> Result<Schema, SchemaError> {
    let record_size = get_int(root, "record_size")
        .filter(|&n| n > 0)
        .ok_or(SchemaError::RecordSizeInvalid)? as usize;

    let endianness = get_str(root, "endianness").unwrap_or("little");
    let byte_order = ByteOrder::parse(endianness)
        .ok_or_else(|| SchemaError::UnsupportedEndianness(endianness.to_ascii_lowercase()))?;

    let axis_raw = get_str(root, "time_unit").unwrap_or_default();
    let time_axis_unit = TimeUnit::parse(axis_raw).unwrap_or_else(|| {
        warn!(time_unit = axis_raw, "unrecognized axis time_unit, using seconds");
        TimeUnit::Seconds
    });

    let signal_values = root
        .get("signals")
        .and_then(Value::as_array)
        .ok_or(SchemaError::SignalsNotArray)?;
    if signal_values.is_empty() {
        return Err(SchemaError::SignalsEmpty);
    }

    let mut signals = Vec::with_capacity(signal_values.len());
    for (index, value) in signal_values.iter().enumerate() {
        let obj = value
            .as_object()
            .ok_or(SchemaError::SignalNotObject { index })?;
        signals.push(parse_signal(obj, index, record_size, time_axis_unit)?);
    }

    Ok(Schema {
        record_size,
        byte_order,
        signals,
        time_axis_unit,
        group_descriptions: parse_groups(root),
    })
}

fn parse_signal(
    obj: &Object,
    index: usize,
    record_size: usize,
    axis_unit: TimeUnit,
) -> Result<SignalSpec, SchemaError> {
    let name = get_str(obj, "name").unwrap_or_default();
    if name.is_empty() {
        return Err(SchemaError::SignalNameMissing { index });
    }

    let type_raw = get_str(obj, "value_type").unwrap_or_default();
    let value_type =
        ValueType::parse(type_raw).ok_or_else(|| SchemaError::UnsupportedValueType {
            signal: name.to_string(),
            value_type: type_raw.to_ascii_lowercase(),
        })?;

    let byte_offset = get_int(obj, "byte_offset")
        .filter(|&n| n >= 0)
        .ok_or_else(|| SchemaError::ByteOffsetInvalid {
            signal: name.to_string(),
        })? as usize;

    let end = byte_offset.saturating_add(value_type.width());
    if end > record_size {
        return Err(SchemaError::SignalOutOfBounds {
            signal: name.to_string(),
            end,
            record_size,
        });
    }

    let mut time_scale = get_f64(obj, "time_scale").unwrap_or(1.0);
    if time_scale <= 0.0 {
        time_scale = 1.0;
    }
    let signal_unit = match get_str(obj, "time_unit") {
        Some(raw) if !raw.trim().is_empty() => TimeUnit::parse(raw).unwrap_or_else(|| {
            warn!(
                signal = name,
                time_unit = raw,
                "unrecognized signal time_unit, using axis unit"
            );
            axis_unit
        }),
        _ => axis_unit,
    };

    Ok(SignalSpec {
        name: name.to_string(),
        byte_offset,
        value_type,
        scale: get_f64(obj, "scale").unwrap_or(1.0),
        bias: get_f64(obj, "bias").unwrap_or(0.0),
        time_scale: time_scale * signal_unit.seconds() / axis_unit.seconds(),
        time_unit: axis_unit,
        unit: get_str(obj, "unit").unwrap_or_default().to_string(),
        description: get_str(obj, "description").unwrap_or_default().to_string(),
        group_path: get_str(obj, "group").unwrap_or_default().to_string(),
    })
}

fn parse_groups(root: &Object) -> BTreeMap<String, String> {
    let mut groups = BTreeMap::new();
    let Some(entries) = root.get("groups").and_then(Value::as_array) else {
        return groups;
    };
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            warn!("skipping non-object groups entry");
            continue;
        };
        let path = get_str(obj, "path").unwrap_or_default().trim();
        if path.is_empty() {
            continue;
        }
        let description = get_str(obj, "description").unwrap_or_default();
        groups.insert(path.to_string(), description.to_string());
    }
    groups
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

fn get_str<'a>(obj: &'a Object, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn get_f64(obj: &Object, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64)
}

/// Integer read that also accepts integral floating-point numbers.
///
/// Values outside the `i32` range are rejected for both literal forms.
fn get_int(obj: &Object, key: &str) -> Option<i64> {
    let value = obj.get(key)?;
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok().map(i64::from);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (i32::MIN as f64..=i32::MAX as f64).contains(f))
        .map(|f| f as i64)
}
