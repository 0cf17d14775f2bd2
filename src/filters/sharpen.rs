//! Sharpen filter.
//!
//! Convolves with a fixed Laplacian-style 3x3 kernel (center 5, four
//! neighbors -1). Only interior pixels are rewritten; the outermost
//! one-pixel border keeps its original values. Each channel, alpha
//! included, is processed independently.

use ndarray::ArrayViewMut3;

use crate::buffer::ImageShape;
use crate::error::Result;
use crate::options::FilterOptions;

use super::convolve::{correlate_3x3, map_interior_3x3};
use super::kernel::SHARPEN_3X3;

/// Apply 3x3 sharpening in place.
///
/// # Arguments
/// * `image` - Image with any channel count (height, width, channels)
///
/// # Returns
/// `Ok(())`; images smaller than 3x3 are a valid no-op
pub fn sharpen_u8(image: ArrayViewMut3<u8>) -> Result<()> {
    sharpen_u8_with(image, &FilterOptions::default())
}

/// [`sharpen_u8`] with explicit rounding and scheduling.
pub fn sharpen_u8_with(mut image: ArrayViewMut3<u8>, options: &FilterOptions) -> Result<()> {
    let shape = ImageShape::of_dim(image.dim())?;
    log::debug!(
        "sharpen {}x{}x{} {:?}",
        shape.width,
        shape.height,
        shape.channels,
        options
    );

    let rounding = options.rounding;
    map_interior_3x3(&mut image, options, |src, y, x, c| {
        rounding.to_u8(correlate_3x3(src, &SHARPEN_3X3, y, x, c))
    });
    Ok(())
}
