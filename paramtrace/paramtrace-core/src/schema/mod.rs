//! Record format model: byte layout, signal decode rules, and grouping.

mod format;
mod group;
mod types;

pub use format::format_schema;
pub use group::{GroupNode, GroupTree};
pub use types::{ByteOrder, Schema, SignalSpec, TimeUnit, ValueType};

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = format_schema(self)?;
        f.write_str(&text)
    }
}
