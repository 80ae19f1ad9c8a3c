//! Visible x window and its clamping rules.

use paramtrace_core::SeriesStatistics;

/// Inclusive x interval currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub min: f64,
    pub max: f64,
}

impl ViewWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The whole recorded extent, `[0, stats.max_x]`.
    pub fn full(stats: &SeriesStatistics) -> Self {
        Self::new(0.0, stats.max_x)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Clamp a requested window into `[0, stats.max_x]`.
    ///
    /// A window narrower than `stats.min_step` is widened around its centre
    /// and pinned back inside the bounds. Returns `None` when the clamped
    /// window is empty, in which case the caller keeps its current window.
    pub fn clamp(min: f64, max: f64, stats: &SeriesStatistics) -> Option<Self> {
        let (lo, hi) = (0.0, stats.max_x);
        let mut window = Self::new(min.max(lo), max.min(hi));
        if window.max <= window.min {
            return None;
        }

        let min_span = stats.min_step;
        if window.span() < min_span {
            let center = window.center();
            window = Self::new(center - min_span * 0.5, center + min_span * 0.5);
            if window.min < lo {
                window = Self::new(lo, hi.min(lo + min_span));
            }
            if window.max > hi {
                window = Self::new(lo.max(hi - min_span), hi);
            }
            if window.max <= window.min {
                return None;
            }
        }
        Some(window)
    }
}
