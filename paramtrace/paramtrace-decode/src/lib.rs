//! Record decoder for `paramtrace`.
//!
//! Walks a byte buffer as consecutive fixed-size records and produces one
//! [`paramtrace_core::Series`] per declared signal, in schema order.
//!
//! # Pipeline
//!
//! ```text
//! data bytes
//!   └─ RecordDecoder::new    – precondition checks (signals, record size, byte order)
//!       └─ check_input       – length and per-signal span checks
//!           └─ read_value    – little-endian field → f64, then scale/bias
//! ```
//!
//! With the `parallel` feature, [`RecordDecoder::decode_parallel`] decodes
//! each signal on its own rayon task.

mod primitive;
mod record;

pub use primitive::read_value;
pub use record::{RecordDecoder, decode_records};
