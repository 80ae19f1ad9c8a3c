//! Decoded sample sequences and the statistics derived from them.

/// A single decoded point.
///
/// `x` is the zero-based record index; `y` is the scaled and biased value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Decoded samples for one signal, ordered by ascending `x`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub name: String,
    pub unit: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            samples: Vec::new(),
        }
    }

    pub fn with_capacity(name: impl Into<String>, unit: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<Sample> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }
}

/// Display-ready summary of a loaded set of series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStatistics {
    pub min_y: f64,
    pub max_y: f64,
    pub max_x: f64,
    /// Smallest x span a view window may be zoomed to.
    pub min_step: f64,
    /// Whether any sample contributed to the y range.
    pub has_range: bool,
}

impl SeriesStatistics {
    pub const DEFAULT_MIN_STEP: f64 = 1e-3;
}

impl Default for SeriesStatistics {
    fn default() -> Self {
        Self {
            min_y: -1.0,
            max_y: 1.0,
            max_x: 0.0,
            min_step: Self::DEFAULT_MIN_STEP,
            has_range: false,
        }
    }
}
