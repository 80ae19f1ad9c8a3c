//! Little-endian primitive reads, independent of host byte order.

use bytes::Buf;
use paramtrace_core::ValueType;

/// Read one raw field of `value_type` from the start of `field` as `f64`.
///
/// Returns `None` if `field` is shorter than the type's width.
pub fn read_value(value_type: ValueType, mut field: &[u8]) -> Option<f64> {
    Some(match value_type {
        ValueType::Int16 => f64::from(field.try_get_i16_le().ok()?),
        ValueType::UInt16 => f64::from(field.try_get_u16_le().ok()?),
        ValueType::Int32 => f64::from(field.try_get_i32_le().ok()?),
        ValueType::UInt32 => f64::from(field.try_get_u32_le().ok()?),
        ValueType::Float32 => f64::from(field.try_get_f32_le().ok()?),
        ValueType::Float64 => field.try_get_f64_le().ok()?,
    })
}
