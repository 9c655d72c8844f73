//! Info command

use crate::cli::InfoArgs;
use anyhow::Result;
use tint_core::Image;

/// Minimum, maximum and mean of one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
}

/// Computes statistics for every channel of `image`.
pub fn channel_stats(image: &Image) -> Vec<ChannelStats> {
    let channels = image.channels() as usize;
    let mut min = vec![u8::MAX; channels];
    let mut max = vec![u8::MIN; channels];
    let mut sum = vec![0u64; channels];

    for px in image.data().chunks_exact(channels) {
        for (c, &v) in px.iter().enumerate() {
            min[c] = min[c].min(v);
            max[c] = max[c].max(v);
            sum[c] += v as u64;
        }
    }

    let count = image.pixel_count().max(1) as f64;
    (0..channels)
        .map(|c| ChannelStats {
            min: if image.is_empty() { 0 } else { min[c] },
            max: max[c],
            mean: sum[c] as f64 / count,
        })
        .collect()
}

pub fn run(args: InfoArgs) -> Result<()> {
    for path in &args.input {
        let image = super::load_image(path)?;
        let (h, w, c) = image.shape();
        println!("{}", path.display());
        println!("  shape: {h} x {w} x {c}");
        for (i, s) in channel_stats(&image).iter().enumerate() {
            println!(
                "  channel {i}: min {:3}  max {:3}  mean {:7.2}",
                s.min, s.max, s.mean
            );
        }
    }
    Ok(())
}
