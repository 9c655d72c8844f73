//! Blend command

use crate::cli::BlendArgs;
use anyhow::Result;
use tint_ops::blend::blend_with_filter;
use tracing::{info, warn};

pub fn run(args: BlendArgs) -> Result<()> {
    let primary = super::load_image(&args.primary)?;
    let secondary = super::load_image(&args.secondary)?;

    if !(0.0..=1.0).contains(&args.factor) {
        warn!(factor = args.factor, "blend factor outside 0..1, clamping");
    }
    if primary.dimensions() != secondary.dimensions() {
        info!(
            primary = ?primary.dimensions(),
            secondary = ?secondary.dimensions(),
            filter = %args.filter,
            "secondary will be resized to the primary"
        );
    }

    let output = blend_with_filter(&primary, &secondary, args.factor, args.filter)?;

    super::save_image(&args.output, &output)
}
