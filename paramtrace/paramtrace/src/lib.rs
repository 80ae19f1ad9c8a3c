//! Decode fixed-layout flight parameter recordings.
//!
//! A JSON format definition ([`load_schema`] / [`FormatDocument`]) describes
//! each fixed-size record of a data file. [`DataSession`] maps the data file,
//! decodes one [`Series`] per signal, computes [`SeriesStatistics`], and hands
//! out decimated windows for plotting.
//!
//! ```rust
//! use paramtrace::{DataSession, load_schema};
//!
//! let schema = load_schema(r#"{
//!     "record_size": 4,
//!     "signals": [
//!         { "name": "a", "value_type": "int16", "byte_offset": 0, "scale": 2.0, "bias": 1.0 },
//!         { "name": "b", "value_type": "int16", "byte_offset": 2 }
//!     ]
//! }"#).unwrap();
//!
//! let mut session = DataSession::new();
//! session.load_bytes(&[0x01, 0x00, 0x05, 0x00], &schema).unwrap();
//! assert_eq!(session.series()[0].samples[0].y, 3.0);
//! assert_eq!(session.series()[1].samples[0].y, 5.0);
//! ```

mod reader;
mod session;

#[cfg(feature = "arrow")]
pub use paramtrace_arrow as arrow;
pub use paramtrace_core as core;
pub use paramtrace_decode as decode;
pub use paramtrace_format as format;
pub use paramtrace_view as view;

pub use paramtrace_core::{
    ByteOrder, DataError, GroupTree, Sample, Schema, SchemaError, Series, SeriesStatistics,
    SignalSpec, TimeUnit, TraceError, ValueType,
};
pub use paramtrace_decode::decode_records;
pub use paramtrace_format::{FormatDocument, load_schema};
pub use paramtrace_view::{ViewWindow, compute_statistics, decimate};
pub use reader::DataFile;
pub use session::{DataSession, DataSessionBuilder};
