//! pixelcore
//!
//! Convolution and resampling engine for raw, interleaved 8-bit pixel
//! buffers, as produced by an image decoder in an upload/preview pipeline.
//!
//! ## Image Format
//! A buffer is `width * height * channels` bytes, row-major, channels
//! interleaved. Any positive channel count is accepted; channels are
//! processed independently:
//! - **Grayscale**: (height, width, 1)
//! - **RGB**: (height, width, 3)
//! - **RGBA**: (height, width, 4), alpha filtered like any other channel
//!
//! ## Two API Layers
//! - [`filters`] works on `ndarray` views shaped `(height, width, channels)`
//! - [`ops`] works on flat `&mut [u8]` slices plus dimensions, validating the
//!   length before viewing the memory through [`ImageShape`]
//!
//! Every operation validates its inputs before writing anything and reports
//! violations as [`PixelError`]. Operations are synchronous, keep no state
//! between calls and never retain the caller's buffer.

pub mod buffer;
pub mod error;
pub mod filters;
pub mod frame;
pub mod ops;
pub mod options;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::ImageShape;
pub use error::{PixelError, Result};
pub use options::{ExecutionStrategy, FilterOptions, SampleRounding};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::PixelError;
    use crate::filters::sharpen as sharpen_mod;
    use crate::filters::{blur, color_adjust, edge, resize};
    use crate::frame;

    impl From<PixelError> for PyErr {
        fn from(err: PixelError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    // ========================================================================
    // Spatial Filters
    // ========================================================================

    /// Gaussian blur of a (H, W, C) u8 image. Returns a new array.
    #[pyfunction]
    pub fn gaussian_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        sigma: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut result = image.as_array().to_owned();
        blur::gaussian_blur_u8(result.view_mut(), sigma)?;
        Ok(result.into_pyarray(py))
    }

    /// 3x3 sharpen; the one-pixel border is copied unchanged.
    #[pyfunction]
    pub fn sharpen<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut result = image.as_array().to_owned();
        sharpen_mod::sharpen_u8(result.view_mut())?;
        Ok(result.into_pyarray(py))
    }

    /// Per-channel Sobel gradient magnitude; the border is copied unchanged.
    #[pyfunction]
    pub fn edge_detect<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut result = image.as_array().to_owned();
        edge::sobel_magnitude_u8(result.view_mut())?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Pointwise Adjustments
    // ========================================================================

    #[pyfunction]
    pub fn brightness<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut result = image.as_array().to_owned();
        color_adjust::brightness_u8(result.view_mut(), factor)?;
        Ok(result.into_pyarray(py))
    }

    #[pyfunction]
    pub fn contrast<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut result = image.as_array().to_owned();
        color_adjust::contrast_u8(result.view_mut(), factor)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Resampling
    // ========================================================================

    /// Bilinear resize to (height, width, C).
    #[pyfunction]
    pub fn resize_bilinear<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        width: usize,
        height: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = resize::resize_bilinear_u8(image.as_array(), width, height)?;
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Frame Utilities
    // ========================================================================

    #[pyfunction]
    pub fn detect_motion<'py>(
        a: PyReadonlyArray3<'py, u8>,
        b: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<f32> {
        Ok(frame::motion_score(a.as_array(), b.as_array())?)
    }

    #[pyfunction]
    pub fn interpolate_frames<'py>(
        py: Python<'py>,
        a: PyReadonlyArray3<'py, u8>,
        b: PyReadonlyArray3<'py, u8>,
        alpha: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let a = a.as_array();
        let mut result = ndarray::Array3::<u8>::zeros(a.dim());
        frame::interpolate_frames(a, b.as_array(), result.view_mut(), alpha)?;
        Ok(result.into_pyarray(py))
    }

    /// pixelcore extension module
    #[pymodule]
    pub fn pixelcore(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Spatial filters
        m.add_function(wrap_pyfunction!(gaussian_blur, m)?)?;
        m.add_function(wrap_pyfunction!(sharpen, m)?)?;
        m.add_function(wrap_pyfunction!(edge_detect, m)?)?;

        // Pointwise adjustments
        m.add_function(wrap_pyfunction!(brightness, m)?)?;
        m.add_function(wrap_pyfunction!(contrast, m)?)?;

        // Resampling
        m.add_function(wrap_pyfunction!(resize_bilinear, m)?)?;

        // Frame utilities
        m.add_function(wrap_pyfunction!(detect_motion, m)?)?;
        m.add_function(wrap_pyfunction!(interpolate_frames, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelcore;
