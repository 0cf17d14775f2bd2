//! Convolution kernels: the Gaussian builder and the fixed 3x3 operators.

use crate::error::{PixelError, Result};

/// A 3x3 kernel indexed as `kernel[ky][kx]`, centered at `[1][1]`.
pub type Kernel3x3 = [[f32; 3]; 3];

/// Laplacian-style sharpening kernel.
///
/// ```text
///  0 -1  0
/// -1  5 -1
///  0 -1  0
/// ```
pub const SHARPEN_3X3: Kernel3x3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Sobel operator for the horizontal gradient (responds to vertical edges).
pub const SOBEL_X_3X3: Kernel3x3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Sobel operator for the vertical gradient (responds to horizontal edges).
pub const SOBEL_Y_3X3: Kernel3x3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Smallest Gaussian kernel ever produced.
pub const MIN_GAUSSIAN_KERNEL_SIZE: usize = 3;

/// Largest Gaussian kernel accepted (`sigma` up to about 1365).
pub const MAX_GAUSSIAN_KERNEL_SIZE: usize = 8193;

fn check_sigma(sigma: f32) -> Result<()> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(PixelError::InvalidSigma(sigma));
    }
    Ok(())
}

/// Number of taps for a Gaussian of the given spread.
///
/// `floor(6 * sigma) + 1`, bumped to the next odd number so a unique center
/// tap exists, and never below [`MIN_GAUSSIAN_KERNEL_SIZE`]. A sigma whose
/// kernel would exceed [`MAX_GAUSSIAN_KERNEL_SIZE`] is rejected.
pub fn gaussian_kernel_size(sigma: f32) -> Result<usize> {
    check_sigma(sigma)?;

    let taps = (6.0 * f64::from(sigma)).floor() + 1.0;
    if taps > MAX_GAUSSIAN_KERNEL_SIZE as f64 {
        return Err(PixelError::InvalidSigma(sigma));
    }

    let mut kernel_size = taps as usize;
    if kernel_size % 2 == 0 {
        kernel_size += 1;
    }
    Ok(kernel_size.max(MIN_GAUSSIAN_KERNEL_SIZE))
}

/// Generate a normalized 1D Gaussian kernel.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian, must be finite and > 0
///
/// # Returns
/// Odd-length kernel whose weights sum to 1.0, centered at `len / 2`
pub fn gaussian_kernel_1d(sigma: f32) -> Result<Vec<f32>> {
    let kernel_size = gaussian_kernel_size(sigma)?;
    let radius = (kernel_size / 2) as isize;
    // f64 keeps 2 * sigma^2 nonzero for every positive f32 sigma
    let sigma = f64::from(sigma);
    let two_sigma_sq = 2.0 * sigma * sigma;

    let weights: Vec<f64> = (0..kernel_size as isize)
        .map(|i| {
            let x = (i - radius) as f64;
            (-(x * x) / two_sigma_sq).exp()
        })
        .collect();

    // normalize so the kernel preserves overall brightness
    let sum: f64 = weights.iter().sum();
    Ok(weights.iter().map(|w| (w / sum) as f32).collect())
}
