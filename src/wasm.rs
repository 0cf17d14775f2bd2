//! WebAssembly exports for the pixelcore filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Each takes a
//! flat interleaved byte array (e.g. `ImageData.data` with 4 channels), copies
//! it, runs the filter and returns the result. Invalid dimensions surface as
//! a thrown JavaScript `Error`.

use wasm_bindgen::prelude::*;

use crate::ops;

// ============================================================================
// Spatial Filters
// ============================================================================

/// Gaussian blur.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Samples per pixel
/// * `sigma` - Standard deviation of the Gaussian, > 0
///
/// # Returns
/// Flat array of blurred bytes
#[wasm_bindgen]
pub fn gaussian_blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    sigma: f32,
) -> Result<Vec<u8>, JsError> {
    let mut result = data.to_vec();
    ops::gaussian_blur(&mut result, width, height, channels, sigma)?;
    Ok(result)
}

#[wasm_bindgen]
pub fn sharpen_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let mut result = data.to_vec();
    ops::sharpen(&mut result, width, height, channels)?;
    Ok(result)
}

#[wasm_bindgen]
pub fn edge_detect_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let mut result = data.to_vec();
    ops::edge_detect(&mut result, width, height, channels)?;
    Ok(result)
}

// ============================================================================
// Pointwise Adjustments
// ============================================================================

#[wasm_bindgen]
pub fn brightness_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    factor: f32,
) -> Result<Vec<u8>, JsError> {
    let mut result = data.to_vec();
    ops::adjust_brightness(&mut result, width, height, channels, factor)?;
    Ok(result)
}

#[wasm_bindgen]
pub fn contrast_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    factor: f32,
) -> Result<Vec<u8>, JsError> {
    let mut result = data.to_vec();
    ops::adjust_contrast(&mut result, width, height, channels, factor)?;
    Ok(result)
}

// ============================================================================
// Resampling
// ============================================================================

/// Bilinear resize.
///
/// # Returns
/// Flat array of `dst_width * dst_height * channels` bytes
#[wasm_bindgen]
pub fn resize_bilinear_wasm(
    data: &[u8],
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    channels: usize,
) -> Result<Vec<u8>, JsError> {
    let len = crate::ImageShape::new(dst_width, dst_height, channels)?.sample_count()?;
    let mut result = vec![0u8; len];
    ops::resize_bilinear(
        data,
        src_width,
        src_height,
        &mut result,
        dst_width,
        dst_height,
        channels,
    )?;
    Ok(result)
}
