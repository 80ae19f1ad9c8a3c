//! JSON format definitions for `paramtrace`.
//!
//! A format definition describes how every fixed-size record of a data file
//! is laid out: the record size, the byte order, and one decode rule per
//! signal. [`load_schema`] turns such a document into a validated
//! [`paramtrace_core::Schema`]; [`FormatDocument`] keeps the parsed schema
//! alongside its verbatim source text so it can be written back unchanged.
//!
//! # Document
//!
//! ```text
//! {
//!   "record_size": 4,
//!   "endianness": "little",
//!   "time_unit": "ms",
//!   "signals": [
//!     { "name": "a", "value_type": "int16", "byte_offset": 0, "scale": 2.0, "bias": 1.0 },
//!     { "name": "b", "value_type": "int16", "byte_offset": 2, "group": "engine/left" }
//!   ],
//!   "groups": [ { "path": "engine", "description": "Engine data" } ]
//! }
//! ```

mod document;
mod loader;

pub use document::FormatDocument;
pub use loader::load_schema;
