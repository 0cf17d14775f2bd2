//! Sobel edge detection.
//!
//! Each channel is convolved with the horizontal and vertical Sobel
//! operators and replaced by the gradient magnitude `sqrt(gx^2 + gy^2)`,
//! capped at 255. Channels are independent (no luminance mixing), and only
//! interior pixels are rewritten; the one-pixel border keeps its values.

use ndarray::ArrayViewMut3;

use crate::buffer::ImageShape;
use crate::error::Result;
use crate::options::FilterOptions;

use super::convolve::{correlate_3x3, map_interior_3x3};
use super::kernel::{SOBEL_X_3X3, SOBEL_Y_3X3};

// ============================================================================
// Sobel Edge Detection
// ============================================================================

/// Replace every interior sample with its Sobel gradient magnitude.
///
/// # Arguments
/// * `image` - Image with any channel count (height, width, channels)
///
/// # Returns
/// `Ok(())`; images smaller than 3x3 are a valid no-op
pub fn sobel_magnitude_u8(image: ArrayViewMut3<u8>) -> Result<()> {
    sobel_magnitude_u8_with(image, &FilterOptions::default())
}

/// [`sobel_magnitude_u8`] with explicit rounding and scheduling.
pub fn sobel_magnitude_u8_with(mut image: ArrayViewMut3<u8>, options: &FilterOptions) -> Result<()> {
    let shape = ImageShape::of_dim(image.dim())?;
    log::debug!(
        "sobel magnitude {}x{}x{} {:?}",
        shape.width,
        shape.height,
        shape.channels,
        options
    );

    let rounding = options.rounding;
    map_interior_3x3(&mut image, options, |src, y, x, c| {
        let gx = correlate_3x3(src, &SOBEL_X_3X3, y, x, c);
        let gy = correlate_3x3(src, &SOBEL_Y_3X3, y, x, c);
        rounding.to_u8((gx * gx + gy * gy).sqrt().min(255.0))
    });
    Ok(())
}
