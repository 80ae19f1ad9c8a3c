//! Format-agnostic core types for `paramtrace`.
//!
//! This crate provides the record format model ([`Schema`] / [`SignalSpec`]),
//! the decoded data model ([`Series`] / [`Sample`] / [`SeriesStatistics`]),
//! and the [`TraceError`] family shared by every other crate in the workspace.

mod error;
mod schema;
mod series;

pub use error::{DataError, SchemaError, TraceError};
pub use schema::{
    ByteOrder, GroupNode, GroupTree, Schema, SignalSpec, TimeUnit, ValueType, format_schema,
};
pub use series::{Sample, Series, SeriesStatistics};
