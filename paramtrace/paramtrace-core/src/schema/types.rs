use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result},
};

use crate::error::SchemaError;

/// Byte order declared by a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Case-insensitive lookup of `little` / `big`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "little" => Some(Self::Little),
            "big" => Some(Self::Big),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Numeric type of a signal's raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
    Float64,
}

impl ValueType {
    /// Case-insensitive lookup; `None` for names that are not decodable.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "int16" => Some(Self::Int16),
            "uint16" => Some(Self::UInt16),
            "int32" => Some(Self::Int32),
            "uint32" => Some(Self::UInt32),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Width of the raw field in bytes.
    pub fn width(&self) -> usize {
        match self {
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Time unit of the schema's x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Normalize a unit token. An empty token means seconds.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "s" | "sec" | "secs" | "second" | "seconds" => Some(Self::Seconds),
            "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Some(Self::Milliseconds),
            "us" | "usec" | "usecs" | "microsecond" | "microseconds" => Some(Self::Microseconds),
            "ns" | "nsec" | "nsecs" | "nanosecond" | "nanoseconds" => Some(Self::Nanoseconds),
            _ => None,
        }
    }

    /// Length of one unit in seconds.
    pub fn seconds(&self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Milliseconds => 1e-3,
            Self::Microseconds => 1e-6,
            Self::Nanoseconds => 1e-9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// One channel declared within a record.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSpec {
    pub name: String,
    pub byte_offset: usize,
    pub value_type: ValueType,
    pub scale: f64,
    pub bias: f64,
    /// Effective time multiplier relative to the schema's axis unit.
    pub time_scale: f64,
    /// Axis unit the effective time scale is expressed in.
    pub time_unit: TimeUnit,
    pub unit: String,
    pub description: String,
    /// Slash-separated group path; empty means ungrouped.
    pub group_path: String,
}

impl SignalSpec {
    /// Create a signal with identity scaling and no display metadata.
    pub fn new(name: impl Into<String>, byte_offset: usize, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            byte_offset,
            value_type,
            scale: 1.0,
            bias: 0.0,
            time_scale: 1.0,
            time_unit: TimeUnit::Seconds,
            unit: String::new(),
            description: String::new(),
            group_path: String::new(),
        }
    }

    pub fn with_scale_bias(mut self, scale: f64, bias: f64) -> Self {
        self.scale = scale;
        self.bias = bias;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_group(mut self, group_path: impl Into<String>) -> Self {
        self.group_path = group_path.into();
        self
    }

    /// First byte past the signal's field, relative to the record start.
    ///
    /// Saturates at `usize::MAX`, which no record size can contain.
    pub fn end_offset(&self) -> usize {
        self.byte_offset.saturating_add(self.value_type.width())
    }

    /// Apply the affine transform to a raw decoded value.
    pub fn apply(&self, raw: f64) -> f64 {
        raw * self.scale + self.bias
    }

    /// Non-empty segments of the group path.
    pub fn group_segments(&self) -> impl Iterator<Item = &str> {
        let path = if self.group_path.trim().is_empty() {
            ""
        } else {
            self.group_path.as_str()
        };
        path.split('/').filter(|s| !s.is_empty())
    }
}

/// Parsed record format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub record_size: usize,
    pub byte_order: ByteOrder,
    /// Declaration order is the display and output order.
    pub signals: Vec<SignalSpec>,
    pub time_axis_unit: TimeUnit,
    pub group_descriptions: BTreeMap<String, String>,
}

impl Schema {
    pub fn new(record_size: usize, signals: Vec<SignalSpec>) -> Self {
        Self {
            record_size,
            signals,
            ..Self::default()
        }
    }

    /// Check the structural invariants the loader enforces.
    pub fn validate(&self) -> std::result::Result<(), SchemaError> {
        if self.record_size == 0 {
            return Err(SchemaError::RecordSizeInvalid);
        }
        if self.signals.is_empty() {
            return Err(SchemaError::SignalsEmpty);
        }
        for (index, signal) in self.signals.iter().enumerate() {
            if signal.name.is_empty() {
                return Err(SchemaError::SignalNameMissing { index });
            }
            if signal.end_offset() > self.record_size {
                return Err(SchemaError::SignalOutOfBounds {
                    signal: signal.name.clone(),
                    end: signal.end_offset(),
                    record_size: self.record_size,
                });
            }
        }
        Ok(())
    }

    /// Index of the first signal with the given name.
    pub fn signal_index(&self, name: &str) -> Option<usize> {
        self.signals.iter().position(|s| s.name == name)
    }

    pub fn group_description(&self, path: &str) -> Option<&str> {
        self.group_descriptions.get(path).map(String::as_str)
    }
}
