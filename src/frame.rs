//! Frame-to-frame utilities for video previews: motion scoring and
//! linear cross-fading between two frames of identical shape.

use ndarray::{ArrayView3, ArrayViewMut3, Zip};

use crate::buffer::{ensure_same_dim, ImageShape};
use crate::error::{PixelError, Result};

/// Mean absolute per-sample difference between two frames.
///
/// # Returns
/// Score in `[0.0, 255.0]`; `0.0` for identical frames
pub fn motion_score(a: ArrayView3<u8>, b: ArrayView3<u8>) -> Result<f32> {
    let shape = ImageShape::of_dim(a.dim())?;
    ensure_same_dim(a.dim(), b.dim())?;

    let total: u64 = Zip::from(&a)
        .and(&b)
        .fold(0u64, |acc, &p, &q| acc + p.abs_diff(q) as u64);

    let score = (total as f64 / shape.sample_count()? as f64) as f32;
    log::trace!("motion score {:?}: {}", a.dim(), score);
    Ok(score)
}

/// Blend two frames into `out`: `a * (1 - alpha) + b * alpha`, truncated.
///
/// # Arguments
/// * `a` - Frame shown at `alpha = 0.0`
/// * `b` - Frame shown at `alpha = 1.0`
/// * `out` - Destination with the same shape as both inputs
/// * `alpha` - Blend position within `[0.0, 1.0]`
pub fn interpolate_frames(
    a: ArrayView3<u8>,
    b: ArrayView3<u8>,
    mut out: ArrayViewMut3<u8>,
    alpha: f32,
) -> Result<()> {
    ImageShape::of_dim(a.dim())?;
    ensure_same_dim(a.dim(), b.dim())?;
    ensure_same_dim(a.dim(), out.dim())?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(PixelError::InvalidBlendAlpha(alpha));
    }

    Zip::from(&mut out).and(&a).and(&b).for_each(|o, &p, &q| {
        *o = (p as f32 * (1.0 - alpha) + q as f32 * alpha).clamp(0.0, 255.0) as u8;
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array3;

    #[test]
    fn test_motion_score_identical_is_zero() {
        let a = Array3::from_shape_fn((4, 4, 3), |(y, x, c)| (y + x + c) as u8);
        assert_eq!(motion_score(a.view(), a.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_motion_score_is_mean_abs_diff() {
        let a = Array3::from_shape_vec((1, 4, 1), vec![0u8, 10, 200, 255]).unwrap();
        let b = Array3::from_shape_vec((1, 4, 1), vec![10u8, 0, 100, 255]).unwrap();
        // (10 + 10 + 100 + 0) / 4
        assert_relative_eq!(motion_score(a.view(), b.view()).unwrap(), 30.0);
        assert_relative_eq!(motion_score(b.view(), a.view()).unwrap(), 30.0);
    }

    #[test]
    fn test_motion_score_shape_mismatch() {
        let a = Array3::<u8>::zeros((2, 2, 3));
        let b = Array3::<u8>::zeros((2, 2, 4));
        assert!(matches!(
            motion_score(a.view(), b.view()),
            Err(PixelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_interpolate_endpoints_and_midpoint() {
        let a = Array3::<u8>::from_elem((2, 3, 1), 0);
        let b = Array3::<u8>::from_elem((2, 3, 1), 201);
        let mut out = Array3::<u8>::zeros((2, 3, 1));

        interpolate_frames(a.view(), b.view(), out.view_mut(), 0.0).unwrap();
        assert_eq!(out, a);
        interpolate_frames(a.view(), b.view(), out.view_mut(), 1.0).unwrap();
        assert_eq!(out, b);
        interpolate_frames(a.view(), b.view(), out.view_mut(), 0.5).unwrap();
        // 100.5 truncated
        assert!(out.iter().all(|&v| v == 100));
    }

    #[test]
    fn test_interpolate_rejects_bad_alpha() {
        let a = Array3::<u8>::zeros((1, 1, 1));
        let mut out = Array3::<u8>::zeros((1, 1, 1));
        for alpha in [-0.1, 1.5, f32::NAN] {
            assert!(matches!(
                interpolate_frames(a.view(), a.view(), out.view_mut(), alpha),
                Err(PixelError::InvalidBlendAlpha(_))
            ));
        }
    }
}
