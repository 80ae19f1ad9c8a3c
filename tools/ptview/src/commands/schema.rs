use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use paramtrace::{FormatDocument, core::format_schema};

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the format definition
    input: PathBuf,

    /// Rewrite the format definition text verbatim to this path
    #[arg(long)]
    save_as: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let mut doc = FormatDocument::open(&self.input)
            .with_context(|| format!("loading format definition {}", self.input.display()))?;
        let schema = doc.schema().context("format definition has no schema")?;

        let text = format_schema(schema)?;
        println!("{text}");
        tracing::debug!(signals = schema.signals.len(), "rendered schema");

        if let Some(path) = self.save_as {
            doc.save_as(&path)?;
            eprintln!("Written to {}", path.display());
        }
        Ok(())
    }
}
