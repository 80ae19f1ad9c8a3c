//! Min/max bucket decimation of a sorted sample range.

use paramtrace_core::Sample;

/// Reduce the samples inside `[min_x, max_x]` to about `max_points` points.
///
/// `samples` must be sorted by ascending `x`. A window that already holds at
/// most `max_points` samples is returned unchanged. Otherwise the window is
/// split into `max(1, max_points / 2)` equal-width buckets and each bucket
/// contributes its minimum and maximum `y` sample in x order, until the output
/// reaches `max_points`. The first and last sample of the window are always
/// present; the last one is appended after the budget check, so the output
/// may exceed `max_points` by up to two.
pub fn decimate(samples: &[Sample], min_x: f64, max_x: f64, max_points: usize) -> Vec<Sample> {
    if samples.is_empty() || max_points == 0 {
        return Vec::new();
    }
    let (min_x, max_x) = if max_x < min_x {
        (max_x, min_x)
    } else {
        (min_x, max_x)
    };

    let start = lower_bound(samples, min_x);
    let end = start + samples[start..].partition_point(|s| s.x <= max_x);
    let visible = &samples[start..end];
    if visible.is_empty() {
        return Vec::new();
    }
    if visible.len() <= max_points {
        return visible.to_vec();
    }

    let bucket_count = (max_points / 2).max(1);
    let span = max_x - min_x;
    let bucket_size = if span > 0.0 {
        span / bucket_count as f64
    } else {
        1.0
    };

    let mut out = Vec::with_capacity(max_points + 2);
    out.push(visible[0]);
    for b in 0..bucket_count {
        let bx0 = min_x + bucket_size * b as f64;
        let bx1 = if b == bucket_count - 1 {
            max_x
        } else {
            bx0 + bucket_size
        };
        let b0 = lower_bound(visible, bx0);
        let b1 = b0 + lower_bound(&visible[b0..], bx1);

        if let Some(bucket) = Bucket::scan(&visible[b0..b1]) {
            bucket.push_ordered(&mut out);
        }
        if out.len() >= max_points {
            break;
        }
    }
    if let Some(last) = visible.last() {
        out.push(*last);
    }
    out
}

/// Index of the first sample with `x >= x0`.
fn lower_bound(samples: &[Sample], x0: f64) -> usize {
    samples.partition_point(|s| s.x < x0)
}

/// Extreme samples of one bucket, by position within the bucket.
#[derive(Debug, Clone, Copy)]
struct Bucket {
    min: (usize, Sample),
    max: (usize, Sample),
}

impl Bucket {
    /// First occurrence wins on ties.
    fn scan(samples: &[Sample]) -> Option<Self> {
        let first = *samples.first()?;
        let mut bucket = Self {
            min: (0, first),
            max: (0, first),
        };
        for (i, s) in samples.iter().enumerate().skip(1) {
            if s.y < bucket.min.1.y {
                bucket.min = (i, *s);
            }
            if s.y > bucket.max.1.y {
                bucket.max = (i, *s);
            }
        }
        Some(bucket)
    }

    fn push_ordered(&self, out: &mut Vec<Sample>) {
        let (min_idx, min) = self.min;
        let (max_idx, max) = self.max;
        if min.x <= max.x {
            out.push(min);
            if max_idx != min_idx {
                out.push(max);
            }
        } else {
            out.push(max);
            out.push(min);
        }
    }
}
