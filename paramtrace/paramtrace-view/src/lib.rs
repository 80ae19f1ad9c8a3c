//! Display-side reductions over decoded `paramtrace` series.
//!
//! - [`compute_statistics`] runs once per load and yields the y range, the x
//!   extent, and the smallest zoom span a caller may use.
//! - [`decimate`] runs per series on every window change and bounds the number
//!   of points handed to a renderer while keeping each bucket's extrema.
//! - [`ViewWindow::clamp`] keeps a requested window inside the recorded extent.
//!
//! Everything here is a pure function of its inputs.

mod decimate;
mod stats;
mod window;

pub use decimate::decimate;
pub use stats::{STEP_SCAN_LIMIT, compute_statistics, value_range};
pub use window::ViewWindow;
