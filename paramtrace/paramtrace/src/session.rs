//! Decoded recording state shared with a presentation layer.

use std::path::{Path, PathBuf};

use paramtrace_core::{Schema, Series, SeriesStatistics, TimeUnit, TraceError};
use paramtrace_decode::RecordDecoder;
use paramtrace_view::{ViewWindow, compute_statistics, decimate, value_range};
use tracing::info;

use crate::reader::DataFile;

/// Holds the series decoded from one data file and their statistics.
///
/// Loads are transactional: a failed [`DataSession::load`] or
/// [`DataSession::load_bytes`] leaves the previously loaded state untouched.
#[derive(Debug, Clone)]
pub struct DataSession {
    series: Vec<Series>,
    statistics: SeriesStatistics,
    path: Option<PathBuf>,
    time_unit: Option<TimeUnit>,
    max_visible_points: usize,
    parallel_decode: bool,
}

/// Builder for configuring [`DataSession`].
#[derive(Debug, Clone)]
pub struct DataSessionBuilder {
    max_visible_points: usize,
    parallel_decode: bool,
}

impl DataSession {
    pub const DEFAULT_MAX_VISIBLE_POINTS: usize = 2000;

    /// Create a builder for [`DataSession`].
    pub fn builder() -> DataSessionBuilder {
        DataSessionBuilder {
            max_visible_points: Self::DEFAULT_MAX_VISIBLE_POINTS,
            parallel_decode: false,
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Map the data file at `path` and decode it with `schema`.
    pub fn load(&mut self, path: impl AsRef<Path>, schema: &Schema) -> Result<(), TraceError> {
        let path = path.as_ref();
        let data = DataFile::open(path)?;
        self.replace(schema, &data, Some(path.to_path_buf()))
    }

    /// Decode an in-memory buffer with `schema`. The session path is cleared.
    pub fn load_bytes(&mut self, data: &[u8], schema: &Schema) -> Result<(), TraceError> {
        self.replace(schema, data, None)
    }

    fn replace(
        &mut self,
        schema: &Schema,
        data: &[u8],
        path: Option<PathBuf>,
    ) -> Result<(), TraceError> {
        let series = self.decode(schema, data)?;
        let statistics = compute_statistics(&series);

        info!(
            path = %path.as_deref().map(|p| p.display().to_string()).unwrap_or_default(),
            bytes = data.len(),
            signals = series.len(),
            records = series.first().map(Series::len).unwrap_or_default(),
            "session loaded"
        );
        self.series = series;
        self.statistics = statistics;
        self.path = path;
        self.time_unit = Some(schema.time_axis_unit);
        Ok(())
    }

    fn decode(&self, schema: &Schema, data: &[u8]) -> Result<Vec<Series>, TraceError> {
        let decoder = RecordDecoder::new(schema)?;
        #[cfg(feature = "parallel")]
        if self.parallel_decode {
            return decoder.decode_parallel(data);
        }
        decoder.decode(data)
    }

    /// Drop all decoded data and reset statistics to their defaults.
    pub fn clear(&mut self) {
        self.series.clear();
        self.statistics = SeriesStatistics::default();
        self.path = None;
        self.time_unit = None;
    }

    pub fn has_data(&self) -> bool {
        self.time_unit.is_some()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn statistics(&self) -> &SeriesStatistics {
        &self.statistics
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Time axis unit of the schema used for the current data.
    pub fn time_unit(&self) -> Option<TimeUnit> {
        self.time_unit
    }

    pub fn max_visible_points(&self) -> usize {
        self.max_visible_points
    }

    /// Set the per-series point budget used by [`DataSession::visible_series`].
    ///
    /// Zero is ignored.
    pub fn set_max_visible_points(&mut self, points: usize) {
        if points > 0 {
            self.max_visible_points = points;
        }
    }

    pub fn parallel_decode(&self) -> bool {
        self.parallel_decode
    }

    /// The whole recorded extent.
    pub fn full_window(&self) -> ViewWindow {
        ViewWindow::full(&self.statistics)
    }

    /// Clamp a requested window against the current statistics.
    ///
    /// Returns `None` without data or when the clamped window is empty.
    pub fn clamp_window(&self, min_x: f64, max_x: f64) -> Option<ViewWindow> {
        if !self.has_data() {
            return None;
        }
        ViewWindow::clamp(min_x, max_x, &self.statistics)
    }

    /// Decimate every series to the session point budget over `window`.
    pub fn visible_series(&self, window: ViewWindow) -> Vec<Series> {
        self.series
            .iter()
            .map(|s| self.decimate_series(s, window))
            .collect()
    }

    /// Decimate the series at `index` over `window`.
    pub fn visible_series_at(&self, index: usize, window: ViewWindow) -> Option<Series> {
        self.series.get(index).map(|s| self.decimate_series(s, window))
    }

    /// Y range over the series at `indices`; out-of-range indices are skipped.
    pub fn group_value_range(
        &self,
        indices: impl IntoIterator<Item = usize>,
    ) -> Option<(f64, f64)> {
        value_range(indices.into_iter().filter_map(|i| self.series.get(i)))
    }

    fn decimate_series(&self, series: &Series, window: ViewWindow) -> Series {
        Series {
            name: series.name.clone(),
            unit: series.unit.clone(),
            samples: decimate(
                &series.samples,
                window.min,
                window.max,
                self.max_visible_points,
            ),
        }
    }
}

impl Default for DataSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSessionBuilder {
    /// Set the per-series point budget (default: 2000). Zero is ignored.
    pub fn with_max_visible_points(mut self, points: usize) -> Self {
        if points > 0 {
            self.max_visible_points = points;
        }
        self
    }

    /// Decode one signal per rayon task when the `parallel` feature is on (default: false).
    pub fn with_parallel_decode(mut self, parallel: bool) -> Self {
        self.parallel_decode = parallel;
        self
    }

    /// Build the session.
    pub fn build(self) -> DataSession {
        DataSession {
            series: Vec::new(),
            statistics: SeriesStatistics::default(),
            path: None,
            time_unit: None,
            max_visible_points: self.max_visible_points,
            parallel_decode: self.parallel_decode,
        }
    }
}
