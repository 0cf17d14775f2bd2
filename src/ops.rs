//! Flat-buffer entry points.
//!
//! These take a raw interleaved `u8` slice plus its dimensions, as handed
//! over by an image decoder, check that the slice length is exactly
//! `width * height * channels`, and run the matching filter in place.
//! Nothing is written unless validation succeeds.

use crate::buffer::ImageShape;
use crate::error::Result;
use crate::filters::{self, blur, color_adjust, edge, resize};
use crate::frame;
use crate::options::FilterOptions;

/// Gaussian blur in place. See [`blur::gaussian_blur_u8`].
pub fn gaussian_blur(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    sigma: f32,
) -> Result<()> {
    gaussian_blur_with(data, width, height, channels, sigma, &FilterOptions::default())
}

/// [`gaussian_blur`] with explicit rounding and scheduling.
pub fn gaussian_blur_with(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    sigma: f32,
    options: &FilterOptions,
) -> Result<()> {
    let image = ImageShape::new(width, height, channels)?.view_mut(data)?;
    blur::gaussian_blur_u8_with(image, sigma, options)
}

/// 3x3 sharpen of interior pixels in place. See [`filters::sharpen::sharpen_u8`].
pub fn sharpen(data: &mut [u8], width: usize, height: usize, channels: usize) -> Result<()> {
    let image = ImageShape::new(width, height, channels)?.view_mut(data)?;
    filters::sharpen::sharpen_u8(image)
}

/// Sobel gradient magnitude of interior pixels in place.
/// See [`edge::sobel_magnitude_u8`].
pub fn edge_detect(data: &mut [u8], width: usize, height: usize, channels: usize) -> Result<()> {
    let image = ImageShape::new(width, height, channels)?.view_mut(data)?;
    edge::sobel_magnitude_u8(image)
}

/// Multiply every sample by `factor`, clamped. See [`color_adjust::brightness_u8`].
pub fn adjust_brightness(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    factor: f32,
) -> Result<()> {
    let image = ImageShape::new(width, height, channels)?.view_mut(data)?;
    color_adjust::brightness_u8(image, factor)
}

/// Scale every sample's distance from 128 by `factor`, clamped.
/// See [`color_adjust::contrast_u8`].
pub fn adjust_contrast(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    factor: f32,
) -> Result<()> {
    let image = ImageShape::new(width, height, channels)?.view_mut(data)?;
    color_adjust::contrast_u8(image, factor)
}

/// Bilinear resize of `src` into `dst`. See [`resize::resize_bilinear_into`].
pub fn resize_bilinear(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
    channels: usize,
) -> Result<()> {
    let src_view = ImageShape::new(src_width, src_height, channels)?.view(src)?;
    let dst_view = ImageShape::new(dst_width, dst_height, channels)?.view_mut(dst)?;
    resize::resize_bilinear_into(src_view, dst_view)
}

/// Mean absolute difference between two frames. See [`frame::motion_score`].
pub fn detect_motion(
    a: &[u8],
    b: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<f32> {
    let shape = ImageShape::new(width, height, channels)?;
    frame::motion_score(shape.view(a)?, shape.view(b)?)
}

/// Cross-fade two frames into `out`. See [`frame::interpolate_frames`].
pub fn interpolate_frames(
    a: &[u8],
    b: &[u8],
    out: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    alpha: f32,
) -> Result<()> {
    let shape = ImageShape::new(width, height, channels)?;
    frame::interpolate_frames(shape.view(a)?, shape.view(b)?, shape.view_mut(out)?, alpha)
}
