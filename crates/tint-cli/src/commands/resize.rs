//! Resize command

use crate::cli::ResizeArgs;
use anyhow::{bail, Result};
use tint_ops::resize::resize;
use tracing::info;

/// Works out the target size from whichever of width, height and scale
/// were given, keeping the aspect ratio when only one side is set.
pub fn target_dimensions(
    src: (u32, u32),
    width: Option<u32>,
    height: Option<u32>,
    scale: Option<f32>,
) -> Result<(u32, u32)> {
    let (src_w, src_h) = src;
    let dims = match (width, height, scale) {
        (Some(w), Some(h), _) => (w, h),
        (Some(w), None, _) => {
            let h = (src_h as f32 * w as f32 / src_w as f32).round() as u32;
            (w, h.max(1))
        }
        (None, Some(h), _) => {
            let w = (src_w as f32 * h as f32 / src_h as f32).round() as u32;
            (w.max(1), h)
        }
        (None, None, Some(s)) if s > 0.0 => {
            let w = (src_w as f32 * s).round() as u32;
            let h = (src_h as f32 * s).round() as u32;
            (w.max(1), h.max(1))
        }
        (None, None, Some(s)) => bail!("Scale must be > 0, got {s}"),
        _ => bail!("Specify --width, --height, or --scale"),
    };
    if dims.0 == 0 || dims.1 == 0 {
        bail!("Target size {}x{} has zero area", dims.0, dims.1);
    }
    Ok(dims)
}

pub fn run(args: ResizeArgs) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let (dst_w, dst_h) =
        target_dimensions(image.dimensions(), args.width, args.height, args.scale)?;

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        image.width(),
        image.height(),
        dst_w,
        dst_h,
        args.filter
    );

    let output = resize(&image, dst_w, dst_h, args.filter)?;
    super::save_image(&args.output, &output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_dimensions() {
        assert_eq!(target_dimensions((100, 50), Some(40), Some(30), None).unwrap(), (40, 30));
        assert_eq!(target_dimensions((100, 50), Some(40), None, None).unwrap(), (40, 20));
        assert_eq!(target_dimensions((100, 50), None, Some(10), None).unwrap(), (20, 10));
        assert_eq!(target_dimensions((100, 50), None, None, Some(0.5)).unwrap(), (50, 25));
        assert!(target_dimensions((100, 50), None, None, None).is_err());
        assert!(target_dimensions((100, 50), None, None, Some(-1.0)).is_err());
        assert!(target_dimensions((100, 50), Some(0), Some(3), None).is_err());
    }
}
