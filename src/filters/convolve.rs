//! Convolution engine shared by blur, sharpen and edge detection.
//!
//! Two boundary policies live here and are deliberately different:
//! - separable 1D passes clamp neighbor coordinates to the image edge
//! - fixed 3x3 kernels only visit interior pixels, leaving the one-pixel
//!   border untouched

use ndarray::{Array3, ArrayView3, ArrayViewMut2, ArrayViewMut3, Axis};
use rayon::prelude::*;

use crate::options::{ExecutionStrategy, FilterOptions};

use super::kernel::Kernel3x3;

/// Direction of a separable pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassAxis {
    /// Neighbors along a row (x varies).
    Horizontal,
    /// Neighbors along a column (y varies).
    Vertical,
}

/// Run `f(y, row)` for every row of `dst`, serially or across the Rayon pool.
pub(crate) fn for_each_row<F>(dst: &mut ArrayViewMut3<u8>, execution: ExecutionStrategy, f: F)
where
    F: Fn(usize, ArrayViewMut2<u8>) + Sync + Send,
{
    match execution {
        ExecutionStrategy::Serial => dst
            .axis_iter_mut(Axis(0))
            .enumerate()
            .for_each(|(y, row)| f(y, row)),
        ExecutionStrategy::ParallelRows => dst
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(y, row)| f(y, row)),
    }
}

/// Convolve every channel of `src` with a 1D kernel along one axis.
///
/// Neighbor coordinates outside the image are clamped to `[0, len - 1]`, so
/// edge samples are repeated rather than wrapped or zero-padded. The sum is
/// accumulated in `f32` in kernel order and stored with `options.rounding`.
///
/// `src` and `dst` must have the same dimensions and an odd-length kernel;
/// callers validate both.
pub fn convolve_1d(
    src: ArrayView3<u8>,
    dst: &mut ArrayViewMut3<u8>,
    kernel: &[f32],
    axis: PassAxis,
    options: &FilterOptions,
) {
    debug_assert_eq!(src.dim(), dst.dim());
    debug_assert_eq!(kernel.len() % 2, 1);

    let (height, width, channels) = src.dim();
    let radius = (kernel.len() / 2) as isize;
    let rounding = options.rounding;

    log::trace!(
        "convolve_1d {:?}: {}x{}x{}, {} taps",
        axis,
        width,
        height,
        channels,
        kernel.len()
    );

    for_each_row(dst, options.execution, |y, mut row| {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &weight) in kernel.iter().enumerate() {
                    let offset = k as isize - radius;
                    let sample = match axis {
                        PassAxis::Horizontal => {
                            let sx = (x as isize + offset).clamp(0, width as isize - 1) as usize;
                            src[[y, sx, c]]
                        }
                        PassAxis::Vertical => {
                            let sy = (y as isize + offset).clamp(0, height as isize - 1) as usize;
                            src[[sy, x, c]]
                        }
                    };
                    sum += sample as f32 * weight;
                }
                row[[x, c]] = rounding.to_u8(sum);
            }
        }
    });
}

/// Apply a separable kernel in place: horizontal pass into a scratch buffer
/// of identical size, then vertical pass back into `image`.
pub fn convolve_separable(image: &mut ArrayViewMut3<u8>, kernel: &[f32], options: &FilterOptions) {
    let mut scratch = Array3::<u8>::zeros(image.dim());
    convolve_1d(
        image.view(),
        &mut scratch.view_mut(),
        kernel,
        PassAxis::Horizontal,
        options,
    );
    convolve_1d(scratch.view(), image, kernel, PassAxis::Vertical, options);
}

/// Correlate a 3x3 kernel with the neighborhood of `(y, x)` in channel `c`.
///
/// `(y, x)` must be an interior pixel.
#[inline]
pub fn correlate_3x3(src: &ArrayView3<u8>, kernel: &Kernel3x3, y: usize, x: usize, c: usize) -> f32 {
    let mut sum = 0.0f32;
    for (ky, kernel_row) in kernel.iter().enumerate() {
        for (kx, &weight) in kernel_row.iter().enumerate() {
            sum += src[[y + ky - 1, x + kx - 1, c]] as f32 * weight;
        }
    }
    sum
}

/// Rewrite every interior sample of `image` as `f(source, y, x, c)`.
///
/// `source` is an unmodified copy of the input, so neighbors are always read
/// from pre-call values. Images narrower or shorter than 3 pixels have no
/// interior and are left untouched.
pub fn map_interior_3x3<F>(image: &mut ArrayViewMut3<u8>, options: &FilterOptions, f: F)
where
    F: Fn(&ArrayView3<u8>, usize, usize, usize) -> u8 + Sync + Send,
{
    let (height, width, channels) = image.dim();
    if height < 3 || width < 3 {
        return;
    }

    let snapshot = image.to_owned();
    let source = snapshot.view();

    for_each_row(image, options.execution, |y, mut row| {
        if y == 0 || y == height - 1 {
            return;
        }
        for x in 1..width - 1 {
            for c in 0..channels {
                row[[x, c]] = f(&source, y, x, c);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SampleRounding;

    fn ramp(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 1), |(y, x, _)| (y * 40 + x * 10) as u8)
    }

    #[test]
    fn test_identity_kernel_copies_input() {
        let src = ramp(4, 5);
        let mut dst = Array3::<u8>::zeros(src.dim());
        for axis in [PassAxis::Horizontal, PassAxis::Vertical] {
            convolve_1d(
                src.view(),
                &mut dst.view_mut(),
                &[0.0, 1.0, 0.0],
                axis,
                &FilterOptions::default(),
            );
            assert_eq!(dst, src);
        }
    }

    #[test]
    fn test_horizontal_clamps_to_edge() {
        // single row [0, 90, 180]; kernel picks the left neighbor
        let src = Array3::from_shape_vec((1, 3, 1), vec![0u8, 90, 180]).unwrap();
        let mut dst = Array3::<u8>::zeros(src.dim());
        convolve_1d(
            src.view(),
            &mut dst.view_mut(),
            &[1.0, 0.0, 0.0],
            PassAxis::Horizontal,
            &FilterOptions::default(),
        );
        // x = 0 has no left neighbor, so it reads itself
        assert_eq!(dst.as_slice().unwrap(), &[0, 0, 90]);
    }

    #[test]
    fn test_vertical_clamps_to_edge() {
        let src = Array3::from_shape_vec((3, 1, 1), vec![10u8, 20, 30]).unwrap();
        let mut dst = Array3::<u8>::zeros(src.dim());
        convolve_1d(
            src.view(),
            &mut dst.view_mut(),
            &[0.0, 0.0, 1.0],
            PassAxis::Vertical,
            &FilterOptions::default(),
        );
        assert_eq!(dst.as_slice().unwrap(), &[20, 30, 30]);
    }

    #[test]
    fn test_truncation_versus_rounding() {
        // (10 + 11) / 2 = 10.5
        let src = Array3::from_shape_vec((1, 2, 1), vec![10u8, 11]).unwrap();
        let kernel = [0.0, 0.5, 0.5];
        let mut dst = Array3::<u8>::zeros(src.dim());

        convolve_1d(
            src.view(),
            &mut dst.view_mut(),
            &kernel,
            PassAxis::Horizontal,
            &FilterOptions::default(),
        );
        assert_eq!(dst[[0, 0, 0]], 10);

        let nearest = FilterOptions::default().with_rounding(SampleRounding::Nearest);
        convolve_1d(
            src.view(),
            &mut dst.view_mut(),
            &kernel,
            PassAxis::Horizontal,
            &nearest,
        );
        assert_eq!(dst[[0, 0, 0]], 11);
    }

    #[test]
    fn test_channels_are_independent() {
        let src = Array3::from_shape_fn((3, 3, 3), |(_, x, c)| (c * 100 + x) as u8);
        let mut dst = Array3::<u8>::zeros(src.dim());
        convolve_1d(
            src.view(),
            &mut dst.view_mut(),
            &[0.0, 1.0, 0.0],
            PassAxis::Vertical,
            &FilterOptions::default(),
        );
        assert_eq!(dst, src);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let src = Array3::from_shape_fn((17, 23, 3), |(y, x, c)| ((y * 31 + x * 7 + c * 13) % 256) as u8);
        let kernel = [0.1, 0.2, 0.4, 0.2, 0.1];

        let mut serial = src.clone();
        convolve_separable(&mut serial.view_mut(), &kernel, &FilterOptions::serial());
        let mut parallel = src.clone();
        convolve_separable(&mut parallel.view_mut(), &kernel, &FilterOptions::default());

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_correlate_3x3_reads_neighborhood() {
        let src = ramp(3, 3);
        let kernel: Kernel3x3 = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
        // right neighbor of (1, 1) is (1, 2) -> 40 + 20
        assert_eq!(correlate_3x3(&src.view(), &kernel, 1, 1, 0), 60.0);
    }

    #[test]
    fn test_map_interior_skips_border_and_small_images() {
        let mut img = ramp(4, 4);
        let original = img.clone();
        map_interior_3x3(&mut img.view_mut(), &FilterOptions::default(), |_, _, _, _| 7);

        for y in 0..4 {
            for x in 0..4 {
                let border = y == 0 || x == 0 || y == 3 || x == 3;
                let expected = if border { original[[y, x, 0]] } else { 7 };
                assert_eq!(img[[y, x, 0]], expected);
            }
        }

        let mut thin = ramp(2, 5);
        let before = thin.clone();
        map_interior_3x3(&mut thin.view_mut(), &FilterOptions::default(), |_, _, _, _| 7);
        assert_eq!(thin, before);
    }
}
