//! Bilinear resampling between images of different sizes.
//!
//! Destination pixel `(x, y)` maps to source coordinate
//! `(x * src_w / dst_w, y * src_h / dst_h)`. The four surrounding source
//! samples are blended by their fractional distances; the right and bottom
//! neighbors are clamped to the last column/row so the source is never read
//! out of bounds.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use crate::buffer::ImageShape;
use crate::error::{PixelError, Result};
use crate::options::FilterOptions;

use super::convolve::for_each_row;

/// Source-space lookup for one destination coordinate along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f32,
}

impl Tap {
    fn new(dst_index: usize, ratio: f32, src_len: usize) -> Self {
        let pos = dst_index as f32 * ratio;
        let lo = (pos as usize).min(src_len - 1);
        Self {
            lo,
            hi: (lo + 1).min(src_len - 1),
            frac: pos - lo as f32,
        }
    }
}

fn taps(dst_len: usize, src_len: usize) -> Vec<Tap> {
    let ratio = src_len as f32 / dst_len as f32;
    (0..dst_len).map(|i| Tap::new(i, ratio, src_len)).collect()
}

/// Resize `src` into the caller-provided `dst` with bilinear interpolation.
///
/// The target size is taken from `dst`. Both images must have the same
/// channel count; their memory cannot overlap since `dst` is borrowed
/// mutably while `src` is borrowed.
///
/// # Arguments
/// * `src` - Source image (src_height, src_width, channels)
/// * `dst` - Destination image (dst_height, dst_width, channels)
pub fn resize_bilinear_into(src: ArrayView3<u8>, dst: ArrayViewMut3<u8>) -> Result<()> {
    resize_bilinear_into_with(src, dst, &FilterOptions::default())
}

/// [`resize_bilinear_into`] with explicit rounding and scheduling.
pub fn resize_bilinear_into_with(
    src: ArrayView3<u8>,
    mut dst: ArrayViewMut3<u8>,
    options: &FilterOptions,
) -> Result<()> {
    let src_shape = ImageShape::of_dim(src.dim())?;
    let dst_shape = ImageShape::of_dim(dst.dim())?;
    if src_shape.channels != dst_shape.channels {
        return Err(PixelError::ShapeMismatch {
            left: src.dim(),
            right: dst.dim(),
        });
    }

    log::debug!(
        "resize bilinear {}x{} -> {}x{} ({} channel(s)) {:?}",
        src_shape.width,
        src_shape.height,
        dst_shape.width,
        dst_shape.height,
        src_shape.channels,
        options
    );

    let x_taps = taps(dst_shape.width, src_shape.width);
    let y_taps = taps(dst_shape.height, src_shape.height);
    let channels = src_shape.channels;
    let rounding = options.rounding;

    for_each_row(&mut dst, options.execution, |y, mut row| {
        let ty = y_taps[y];
        for (x, tx) in x_taps.iter().enumerate() {
            let w11 = (1.0 - tx.frac) * (1.0 - ty.frac);
            let w12 = tx.frac * (1.0 - ty.frac);
            let w21 = (1.0 - tx.frac) * ty.frac;
            let w22 = tx.frac * ty.frac;

            for c in 0..channels {
                let p11 = src[[ty.lo, tx.lo, c]] as f32;
                let p12 = src[[ty.lo, tx.hi, c]] as f32;
                let p21 = src[[ty.hi, tx.lo, c]] as f32;
                let p22 = src[[ty.hi, tx.hi, c]] as f32;

                row[[x, c]] = rounding.to_u8(p11 * w11 + p12 * w12 + p21 * w21 + p22 * w22);
            }
        }
    });
    Ok(())
}

/// Resize an image to `new_width` x `new_height`, allocating the result.
///
/// # Arguments
/// * `src` - Source image (height, width, channels)
/// * `new_width` - Target width in pixels, must be > 0
/// * `new_height` - Target height in pixels, must be > 0
///
/// # Returns
/// Resized image with the same channel count
pub fn resize_bilinear_u8(
    src: ArrayView3<u8>,
    new_width: usize,
    new_height: usize,
) -> Result<Array3<u8>> {
    let (_, _, channels) = src.dim();
    let target = ImageShape::new(new_width, new_height, channels)?;
    let mut output = Array3::<u8>::zeros(target.dim());
    resize_bilinear_into(src, output.view_mut())?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_same_size_is_identity() {
        let src =
            Array3::from_shape_fn((5, 7, 3), |(y, x, c)| ((y * 53 + x * 19 + c * 7) % 256) as u8);
        let out = resize_bilinear_u8(src.view(), 7, 5).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_resize_constant_stays_constant() {
        let src = Array3::<u8>::from_elem((4, 4, 1), 100);
        for (w, h) in [(2, 2), (9, 3), (1, 1), (16, 16)] {
            let out = resize_bilinear_u8(src.view(), w, h).unwrap();
            assert_eq!(out.dim(), (h, w, 1));
            assert!(out.iter().all(|&v| v == 100), "{w}x{h}");
        }
    }

    #[test]
    fn test_upscale_interpolates_and_clamps_last_column() {
        // 2x1 row [0, 200] -> 4x1: ratio 0.5 -> src_x 0, 0.5, 1.0, 1.5
        let src = Array3::from_shape_vec((1, 2, 1), vec![0u8, 200]).unwrap();
        let out = resize_bilinear_u8(src.view(), 4, 1).unwrap();
        assert_eq!(out.as_slice().unwrap(), &[0, 100, 200, 200]);
    }

    #[test]
    fn test_upscale_2x2_to_10x10_stays_in_bounds() {
        let src = Array3::from_shape_vec((2, 2, 1), vec![0u8, 100, 100, 200]).unwrap();
        let out = resize_bilinear_u8(src.view(), 10, 10).unwrap();
        assert_eq!(out[[0, 0, 0]], 0);
        // bottom-right maps to (1.8, 1.8), both neighbors clamp to (1, 1)
        assert_eq!(out[[9, 9, 0]], 200);
        assert!(out.iter().all(|&v| v <= 200));
    }

    #[test]
    fn test_downscale_samples_top_left_of_each_block() {
        let src = Array3::from_shape_fn((4, 4, 1), |(y, x, _)| (y * 4 + x) as u8);
        let out = resize_bilinear_u8(src.view(), 2, 2).unwrap();
        // ratio 2 lands exactly on source pixels (0,0), (0,2), (2,0), (2,2)
        assert_eq!(out.as_slice().unwrap(), &[0, 2, 8, 10]);
    }

    #[test]
    fn test_resize_into_checks_channels() {
        let src = Array3::<u8>::zeros((2, 2, 3));
        let mut dst = Array3::<u8>::zeros((4, 4, 4));
        assert!(matches!(
            resize_bilinear_into(src.view(), dst.view_mut()),
            Err(PixelError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_resize_rejects_zero_target() {
        let src = Array3::<u8>::zeros((2, 2, 1));
        assert!(matches!(
            resize_bilinear_u8(src.view(), 0, 3),
            Err(PixelError::InvalidDimensions { .. })
        ));
    }
}
