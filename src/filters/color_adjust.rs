//! Pointwise adjustments: Brightness, Contrast.
//!
//! These are per-sample affine transforms with no spatial context. Every
//! channel, alpha included, is treated the same way. Results are clamped to
//! `[0, 255]` and truncated to a byte.

use ndarray::ArrayViewMut3;

use crate::buffer::ImageShape;
use crate::error::{PixelError, Result};

/// Contrast pivot: values at this level are left unchanged.
pub const CONTRAST_PIVOT: f32 = 128.0;

fn check_factor(factor: f32) -> Result<()> {
    if !factor.is_finite() {
        return Err(PixelError::InvalidFactor(factor));
    }
    Ok(())
}

// ============================================================================
// Brightness
// ============================================================================

/// Scale every sample by `factor` in place.
///
/// # Arguments
/// * `image` - Image with any channel count (height, width, channels)
/// * `factor` - Multiplier: 1.0 = no change, 0.0 = black, negative clamps to 0
pub fn brightness_u8(mut image: ArrayViewMut3<u8>, factor: f32) -> Result<()> {
    ImageShape::of_dim(image.dim())?;
    check_factor(factor)?;
    log::debug!("brightness {:?} factor={}", image.dim(), factor);

    image.mapv_inplace(|v| (v as f32 * factor).clamp(0.0, 255.0) as u8);
    Ok(())
}

// ============================================================================
// Contrast
// ============================================================================

/// Stretch every sample away from (or toward) mid-gray in place.
///
/// `output = (input - 128) * factor + 128`
///
/// # Arguments
/// * `image` - Image with any channel count (height, width, channels)
/// * `factor` - 1.0 = no change, 0.0 = flat gray, > 1.0 = more contrast
pub fn contrast_u8(mut image: ArrayViewMut3<u8>, factor: f32) -> Result<()> {
    ImageShape::of_dim(image.dim())?;
    check_factor(factor)?;
    log::debug!("contrast {:?} factor={}", image.dim(), factor);

    image.mapv_inplace(|v| {
        ((v as f32 - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT).clamp(0.0, 255.0) as u8
    });
    Ok(())
}
