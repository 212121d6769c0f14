//! rir-compare: pairwise MSE between RIRs of different simulator versions
//!
//! Usage:
//!   rir-compare
//!   rir-compare --path ./runs --format markdown --output report.md

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rir_diff::{Comparator, CompareConfig, ReportFormat};

#[derive(Parser)]
#[command(
    name = "rir-compare",
    about = "Check the RIRs generated by different simulator versions"
)]
struct Cli {
    /// Folder containing the simulation output folders
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Report format: text, json or markdown
    #[arg(long, default_value = "text")]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Prefix of version folders
    #[arg(long, default_value = rir_core::VERSION_DIR_PREFIX)]
    prefix: String,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = CompareConfig::default()
        .with_version_prefix(cli.prefix)
        .with_format(cli.format);
    let comparator = Comparator::new(config);
    let report = comparator
        .run(&cli.path)
        .with_context(|| format!("Comparison under {} failed", cli.path.display()))?;

    let format = comparator.config().format;
    match &cli.output {
        Some(path) => {
            report
                .save(path, format)
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{}", report.generate(format)),
    }

    Ok(())
}
