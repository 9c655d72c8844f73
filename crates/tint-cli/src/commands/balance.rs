//! Balance command

use crate::cli::BalanceArgs;
use anyhow::Result;
use tint_ops::balance::{apply_channel_balance, apply_channel_balance_bgr};
use tracing::info;

pub fn run(args: BalanceArgs) -> Result<()> {
    let image = super::load_image(&args.input)?;

    info!(
        input = %args.input.display(),
        red = ?args.red,
        green = ?args.green,
        blue = ?args.blue,
        bgr = args.bgr,
        "balancing"
    );

    let output = if args.bgr {
        apply_channel_balance_bgr(&image, args.red, args.green, args.blue)?
    } else {
        apply_channel_balance(&image, args.red, args.green, args.blue)?
    };

    super::save_image(&args.output, &output)
}
