//! Gaussian blur for 8-bit images with 1 or more interleaved channels.
//!
//! Uses a separable two-pass convolution: a horizontal pass into a scratch
//! image, then a vertical pass back into the caller's buffer. Each pass
//! stores bytes, so the horizontal result is quantized before the vertical
//! pass reads it. Borders are handled by clamping to the nearest edge pixel.

use ndarray::ArrayViewMut3;

use crate::buffer::ImageShape;
use crate::error::Result;
use crate::options::FilterOptions;

use super::convolve::convolve_separable;
use super::kernel::gaussian_kernel_1d;

/// Apply Gaussian blur in place.
///
/// # Arguments
/// * `image` - Image with any channel count (height, width, channels)
/// * `sigma` - Standard deviation of the Gaussian, must be finite and > 0
///
/// # Errors
/// [`PixelError::InvalidSigma`](crate::PixelError::InvalidSigma) for a bad
/// sigma, [`PixelError::InvalidDimensions`](crate::PixelError::InvalidDimensions)
/// for an empty image. The image is unchanged on error.
pub fn gaussian_blur_u8(image: ArrayViewMut3<u8>, sigma: f32) -> Result<()> {
    gaussian_blur_u8_with(image, sigma, &FilterOptions::default())
}

/// [`gaussian_blur_u8`] with explicit rounding and scheduling.
pub fn gaussian_blur_u8_with(
    mut image: ArrayViewMut3<u8>,
    sigma: f32,
    options: &FilterOptions,
) -> Result<()> {
    let shape = ImageShape::of_dim(image.dim())?;
    let kernel = gaussian_kernel_1d(sigma)?;

    log::debug!(
        "gaussian blur {}x{}x{} sigma={} kernel_size={} {:?}",
        shape.width,
        shape.height,
        shape.channels,
        sigma,
        kernel.len(),
        options
    );

    convolve_separable(&mut image, &kernel, options);
    Ok(())
}
