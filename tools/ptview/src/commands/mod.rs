pub mod decimate;
pub mod schema;
pub mod stats;
