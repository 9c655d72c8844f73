//! tint - per-pixel color balance, gamma and blending for 8-bit images

use anyhow::{Context, Result};
use clap::Parser;
use tint_cli::{logging, Cli};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
        debug!(threads = cli.threads, "thread pool configured");
    }

    tint_cli::run(cli.command)
}
