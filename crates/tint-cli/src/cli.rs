//! Command-line arguments.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tint_lut::AffineParams;
use tint_ops::Filter;

#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(author, version, about = "Per-pixel color balance, gamma and blending")]
#[command(long_about = "
Small per-pixel transforms for 8-bit RGB images.

Examples:
  tint balance photo.jpg -o warm.png --red 1.2,10 --blue 0.9,0
  tint gamma photo.jpg -o lifted.png --gamma 2.2
  tint blend a.jpg b.jpg -o mix.png --factor 0.2
  tint resize photo.jpg -o small.png -w 320
  tint info photo.jpg
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    pub threads: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-channel gain/bias color balance
    #[command(visible_alias = "b")]
    Balance(BalanceArgs),

    /// Gamma correction
    #[command(visible_alias = "g")]
    Gamma(GammaArgs),

    /// Linear blend of two images
    Blend(BlendArgs),

    /// Resize image
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Print image shape and per-channel statistics
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BalanceArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Red gain,bias
    #[arg(long, default_value = "1,0", value_parser = parse_affine, allow_hyphen_values = true)]
    pub red: AffineParams,

    /// Green gain,bias
    #[arg(long, default_value = "1,0", value_parser = parse_affine, allow_hyphen_values = true)]
    pub green: AffineParams,

    /// Blue gain,bias
    #[arg(long, default_value = "1,0", value_parser = parse_affine, allow_hyphen_values = true)]
    pub blue: AffineParams,

    /// Treat the decoded buffer as B,G,R instead of R,G,B
    #[arg(long)]
    pub bgr: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GammaArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Gamma exponent (> 0); output = input ^ (1 / gamma)
    #[arg(short, long, default_value = "2.2")]
    pub gamma: f64,
}

#[derive(Args, Debug, Clone)]
pub struct BlendArgs {
    /// Primary image (defines output size)
    pub primary: PathBuf,

    /// Secondary image (resized to the primary if needed)
    pub secondary: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Weight of the primary image, clamped to 0.0-1.0
    #[arg(short, long, default_value = "0.2", allow_hyphen_values = true)]
    pub factor: f64,

    /// Filter used when resizing the secondary: nearest, bilinear, bicubic, lanczos3
    #[arg(long, default_value = "bilinear", value_parser = parse_filter)]
    pub filter: Filter,
}

#[derive(Args, Debug, Clone)]
pub struct ResizeArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target width
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Target height
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Scale factor (e.g., 0.5, 2.0)
    #[arg(short, long)]
    pub scale: Option<f32>,

    /// Filter: nearest, bilinear, bicubic, lanczos3
    #[arg(short, long, default_value = "lanczos3", value_parser = parse_filter)]
    pub filter: Filter,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    pub input: Vec<PathBuf>,
}

/// Parses `gain,bias`, e.g. `1.2,-10`.
pub fn parse_affine(s: &str) -> Result<AffineParams, String> {
    let (gain, bias) = s
        .split_once(',')
        .ok_or_else(|| format!("expected GAIN,BIAS, got '{s}'"))?;
    let gain: f64 = gain
        .trim()
        .parse()
        .map_err(|e| format!("invalid gain '{gain}': {e}"))?;
    let bias: f64 = bias
        .trim()
        .parse()
        .map_err(|e| format!("invalid bias '{bias}': {e}"))?;
    Ok(AffineParams::new(gain, bias))
}

/// Parses a resampling filter name.
pub fn parse_filter(s: &str) -> Result<Filter, String> {
    Filter::from_name(s).ok_or_else(|| {
        let names: Vec<_> = Filter::ALL.iter().map(|f| f.name()).collect();
        format!("unknown filter '{s}', expected one of: {}", names.join(", "))
    })
}
