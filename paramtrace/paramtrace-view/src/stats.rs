//! Display statistics over decoded series.

use paramtrace_core::{Series, SeriesStatistics};
use tracing::debug;

/// Number of leading samples per series scanned for the smallest x step.
pub const STEP_SCAN_LIMIT: usize = 4096;

/// Compute y range, x extent, and zoom floor over every series.
///
/// With no samples at all the range falls back to `[-1, 1]` and `max_x` to 0.
/// A constant range is widened so plots never collapse to a line.
pub fn compute_statistics(series: &[Series]) -> SeriesStatistics {
    let mut stats = SeriesStatistics::default();
    let mut range: Option<(f64, f64)> = None;
    let mut min_step: Option<f64> = None;

    for s in series {
        range = fold_range(range, s);
        if let Some(last) = s.last() {
            stats.max_x = stats.max_x.max(last.x);
        }

        let scanned = &s.samples[..s.samples.len().min(STEP_SCAN_LIMIT)];
        for pair in scanned.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            if dx > 0.0 && min_step.is_none_or(|m| dx < m) {
                min_step = Some(dx);
            }
        }
    }

    if let Some((min_y, max_y)) = range {
        (stats.min_y, stats.max_y) = widen_degenerate(min_y, max_y);
        stats.has_range = true;
    } else {
        stats.max_x = 0.0;
    }

    stats.min_step = match min_step {
        Some(step) => (step * 0.01).max(SeriesStatistics::DEFAULT_MIN_STEP),
        None => SeriesStatistics::DEFAULT_MIN_STEP,
    };

    debug!(
        series = series.len(),
        min_y = stats.min_y,
        max_y = stats.max_y,
        max_x = stats.max_x,
        min_step = stats.min_step,
        "computed series statistics"
    );
    stats
}

/// Fold the y range of a subset of series, widened like [`compute_statistics`].
///
/// Returns `None` when none of the series holds a sample.
pub fn value_range<'a>(series: impl IntoIterator<Item = &'a Series>) -> Option<(f64, f64)> {
    let (min_y, max_y) = series.into_iter().fold(None, fold_range)?;
    Some(widen_degenerate(min_y, max_y))
}

fn fold_range(range: Option<(f64, f64)>, series: &Series) -> Option<(f64, f64)> {
    series.samples.iter().fold(range, |acc, p| match acc {
        None => Some((p.y, p.y)),
        Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
    })
}

/// Widen `[min, max]` symmetrically when the two ends compare equal.
pub(crate) fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    if !fuzzy_eq(min, max) {
        return (min, max);
    }
    let delta = if min.abs() > 1.0 { min.abs() * 0.1 } else { 1.0 };
    (min - delta, max + delta)
}

/// Relative equality with a tolerance of one part in 10^12.
///
/// Zero only compares equal to an exact zero.
pub(crate) fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}
