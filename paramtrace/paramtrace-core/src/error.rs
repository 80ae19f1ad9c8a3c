//! Error types shared by the loader, decoder, and session layers.

use crate::schema::ByteOrder;

/// Error returned by every fallible `paramtrace` operation.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The schema document is not a well-formed object.
    #[error("failed to parse schema document: {source}")]
    Parse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The schema document is well-formed but violates a field constraint.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The schema declares a byte order the decoder cannot handle.
    #[error("unsupported byte order '{byte_order}': only little-endian records can be decoded")]
    UnsupportedFormat { byte_order: ByteOrder },

    /// The data buffer cannot be decoded with the given schema.
    #[error(transparent)]
    Data(#[from] DataError),

    /// A schema or data file could not be opened, read, or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TraceError {
    pub fn parse(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Parse {
            source: source.into(),
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Field constraint violated by a schema document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("record_size missing or invalid")]
    RecordSizeInvalid,

    #[error("unsupported endianness: '{0}'")]
    UnsupportedEndianness(String),

    #[error("signals must be an array")]
    SignalsNotArray,

    #[error("signals must not be empty")]
    SignalsEmpty,

    #[error("signals[{index}] must be an object")]
    SignalNotObject { index: usize },

    #[error("signals[{index}].name missing or empty")]
    SignalNameMissing { index: usize },

    #[error("signal '{signal}' has unsupported value_type '{value_type}'")]
    UnsupportedValueType { signal: String, value_type: String },

    #[error("signal '{signal}' has a missing or invalid byte_offset")]
    ByteOffsetInvalid { signal: String },

    #[error("signal '{signal}' ends at byte {end}, beyond record_size {record_size}")]
    SignalOutOfBounds {
        signal: String,
        end: usize,
        record_size: usize,
    },
}

/// Data buffer rejected by the record decoder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("schema declares no signals")]
    NoSignals,

    #[error("record_size must be greater than zero")]
    RecordSizeInvalid,

    #[error("data length {len} is shorter than one record ({record_size} bytes)")]
    TooShort { len: usize, record_size: usize },

    #[error("signal '{signal}' ends at byte {end}, beyond record length {record_size}")]
    SignalOutOfBounds {
        signal: String,
        end: usize,
        record_size: usize,
    },
}
