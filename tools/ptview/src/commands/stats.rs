use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use paramtrace::{DataSession, FormatDocument};

#[derive(Args)]
pub struct StatsArgs {
    /// Path to the format definition
    schema: PathBuf,

    /// Path to the binary data file
    data: PathBuf,
}

impl StatsArgs {
    pub fn run(self, parallel: bool) -> Result<()> {
        let doc = FormatDocument::open(&self.schema)
            .with_context(|| format!("loading format definition {}", self.schema.display()))?;
        let schema = doc.schema().context("format definition has no schema")?;

        let mut session = DataSession::builder().with_parallel_decode(parallel).build();
        session
            .load(&self.data, schema)
            .with_context(|| format!("decoding {}", self.data.display()))?;

        let records = session.series().first().map(|s| s.len()).unwrap_or_default();
        let time_unit = session.time_unit().unwrap_or_default();
        println!("records: {records}");
        println!("time_unit: {time_unit}");
        println!("signals:");
        for s in session.series() {
            if s.unit.is_empty() {
                println!("    {}: {} samples", s.name, s.len());
            } else {
                println!("    {} [{}]: {} samples", s.name, s.unit, s.len());
            }
        }

        let stats = session.statistics();
        println!("statistics:");
        println!("    min_y: {}", stats.min_y);
        println!("    max_y: {}", stats.max_y);
        println!("    max_x: {}", stats.max_x);
        println!("    min_step: {}", stats.min_step);
        println!("    has_range: {}", stats.has_range);
        Ok(())
    }
}
