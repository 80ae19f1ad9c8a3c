use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use paramtrace::{DataSession, FormatDocument, arrow::samples_to_long_batch};

use crate::{format::OutputFormat, writer::stdout_writer};

#[derive(Args)]
pub struct DecimateArgs {
    /// Path to the format definition
    schema: PathBuf,

    /// Path to the binary data file
    data: PathBuf,

    /// Left edge of the window (default: 0)
    #[arg(long, allow_negative_numbers = true)]
    min_x: Option<f64>,

    /// Right edge of the window (default: last record index)
    #[arg(long, allow_negative_numbers = true)]
    max_x: Option<f64>,

    /// Point budget per signal
    #[arg(short = 'n', long, default_value_t = DataSession::DEFAULT_MAX_VISIBLE_POINTS)]
    max_points: usize,

    /// Signal to print; repeat to select several (default: all)
    #[arg(short, long = "signal")]
    signals: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

impl DecimateArgs {
    pub fn run(self, parallel: bool) -> Result<()> {
        if self.max_points == 0 {
            bail!("--max-points must be greater than zero");
        }

        let doc = FormatDocument::open(&self.schema)
            .with_context(|| format!("loading format definition {}", self.schema.display()))?;
        let schema = doc.schema().context("format definition has no schema")?;

        let indices = if self.signals.is_empty() {
            (0..schema.signals.len()).collect::<Vec<_>>()
        } else {
            self.signals
                .iter()
                .map(|name| {
                    schema
                        .signal_index(name)
                        .with_context(|| format!("unknown signal '{name}'"))
                })
                .collect::<Result<Vec<_>>>()?
        };

        let mut session = DataSession::builder()
            .with_max_visible_points(self.max_points)
            .with_parallel_decode(parallel)
            .build();
        session
            .load(&self.data, schema)
            .with_context(|| format!("decoding {}", self.data.display()))?;

        let full = session.full_window();
        let min_x = self.min_x.unwrap_or(full.min);
        let max_x = self.max_x.unwrap_or(full.max);
        let Some(window) = session.clamp_window(min_x, max_x) else {
            bail!(
                "window [{min_x}, {max_x}] is empty within the recorded extent [{}, {}]",
                full.min,
                full.max
            );
        };
        tracing::info!(min = window.min, max = window.max, "decimating window");

        let visible: Vec<_> = indices
            .into_iter()
            .filter_map(|i| session.visible_series_at(i, window))
            .collect();
        let batch = samples_to_long_batch(&visible)?;

        let mut writer = stdout_writer(self.format);
        writer.write_batch(&batch)?;
        writer.finish()
    }
}
