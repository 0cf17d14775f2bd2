//! Flat pixel buffer layout and its bounds-checked ndarray views.
//!
//! Buffers are interleaved, row-major `u8` samples:
//! `data[(y * width + x) * channels + c]`. The same memory viewed through
//! ndarray has shape `(height, width, channels)`, which is the layout every
//! filter in [`crate::filters`] works on.

use ndarray::{ArrayView3, ArrayViewMut3};

use crate::error::{PixelError, Result};

/// Dimensions of an interleaved 8-bit image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageShape {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl ImageShape {
    /// Create a shape, rejecting zero-sized dimensions.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let shape = Self {
            width,
            height,
            channels,
        };
        shape.sample_count()?;
        Ok(shape)
    }

    /// Shape of an existing `(height, width, channels)` array.
    pub fn of_dim((height, width, channels): (usize, usize, usize)) -> Result<Self> {
        Self::new(width, height, channels)
    }

    /// Number of samples (`width * height * channels`).
    pub fn sample_count(&self) -> Result<usize> {
        let invalid = || PixelError::InvalidDimensions {
            width: self.width,
            height: self.height,
            channels: self.channels,
        };
        if self.width == 0 || self.height == 0 || self.channels == 0 {
            return Err(invalid());
        }
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.channels))
            .ok_or_else(invalid)
    }

    /// The `(height, width, channels)` tuple ndarray expects.
    pub fn dim(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    /// Fail unless `actual` equals the number of samples this shape describes.
    pub fn check_len(&self, actual: usize) -> Result<()> {
        let expected = self.sample_count()?;
        if expected != actual {
            return Err(PixelError::BufferLength { expected, actual });
        }
        Ok(())
    }

    /// Borrow a flat buffer as a read-only `(height, width, channels)` view.
    pub fn view<'a>(&self, data: &'a [u8]) -> Result<ArrayView3<'a, u8>> {
        self.check_len(data.len())?;
        Ok(ArrayView3::from_shape(self.dim(), data)?)
    }

    /// Borrow a flat buffer as a mutable `(height, width, channels)` view.
    pub fn view_mut<'a>(&self, data: &'a mut [u8]) -> Result<ArrayViewMut3<'a, u8>> {
        self.check_len(data.len())?;
        Ok(ArrayViewMut3::from_shape(self.dim(), data)?)
    }
}

/// Fail unless `a` and `b` describe images of identical shape.
pub(crate) fn ensure_same_dim(
    a: (usize, usize, usize),
    b: (usize, usize, usize),
) -> Result<()> {
    if a != b {
        return Err(PixelError::ShapeMismatch { left: a, right: b });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            ImageShape::new(0, 4, 1),
            Err(PixelError::InvalidDimensions { .. })
        ));
        assert!(ImageShape::new(4, 4, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let err = ImageShape::new(usize::MAX, 2, 3).unwrap_err();
        assert!(matches!(err, PixelError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_view_maps_flat_layout() {
        let shape = ImageShape::new(3, 2, 2).unwrap();
        let data: Vec<u8> = (0..12).collect();
        let view = shape.view(&data).unwrap();

        // (y=1, x=2, c=1) -> (1 * 3 + 2) * 2 + 1 = 11
        assert_eq!(view[[1, 2, 1]], 11);
        assert_eq!(view[[0, 1, 0]], 2);
    }

    #[test]
    fn test_view_rejects_wrong_length() {
        let shape = ImageShape::new(2, 2, 3).unwrap();
        let mut data = vec![0u8; 11];
        assert_eq!(
            shape.view_mut(&mut data).unwrap_err(),
            PixelError::BufferLength {
                expected: 12,
                actual: 11
            }
        );
    }
}
