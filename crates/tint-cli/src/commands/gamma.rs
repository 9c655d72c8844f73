//! Gamma command

use crate::cli::GammaArgs;
use anyhow::{Context, Result};
use tint_ops::gamma::apply_gamma;
use tracing::info;

pub fn run(args: GammaArgs) -> Result<()> {
    let image = super::load_image(&args.input)?;
    info!(input = %args.input.display(), gamma = args.gamma, "gamma correction");

    let output = apply_gamma(&image, args.gamma)
        .with_context(|| format!("Cannot apply gamma {}", args.gamma))?;

    super::save_image(&args.output, &output)
}
