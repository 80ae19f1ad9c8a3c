mod commands;
mod format;
mod writer;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{decimate::DecimateArgs, schema::SchemaArgs, stats::StatsArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ptview",
    about = "Inspect flight parameter recordings through their format definitions"
)]
struct Cli {
    /// Log decode progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decode one signal per thread
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a format definition as an indented tree
    Schema(SchemaArgs),
    /// Print record counts and series statistics
    Stats(StatsArgs),
    /// Print a decimated window as CSV or JSON lines
    Decimate(DecimateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::Stats(args) => args.run(cli.parallel),
        Commands::Decimate(args) => args.run(cli.parallel),
    }
}
