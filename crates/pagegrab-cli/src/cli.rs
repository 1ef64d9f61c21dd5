//! CLI for the pagegrab batch page downloader.

use anyhow::Result;
use clap::Parser;
use pagegrab_core::{batch, config};
use std::path::PathBuf;

/// Top-level CLI for pagegrab.
#[derive(Debug, Parser)]
#[command(name = "pagegrab")]
#[command(
    about = "pagegrab: fetch every URL in a list and save each page as <domain>.html",
    long_about = None
)]
pub struct Cli {
    /// Source file path (one URL per line; blank lines are skipped).
    #[arg(long, value_name = "PATH")]
    pub src: PathBuf,

    /// Destination directory path. The literal "./" is redirected to "./list".
    #[arg(long, value_name = "PATH")]
    pub dst: PathBuf,
}

/// Parses arguments, loads the global config, and runs the batch.
/// A missing `--src` or `--dst` makes clap print usage and exit non-zero.
pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    batch::run(&cli.src, &cli.dst, &cfg.fetch_options())
}
