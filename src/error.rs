//! Error type shared by every filter and buffer operation.

/// An error raised when an operation's inputs violate its preconditions.
///
/// Every operation validates its inputs before touching a single sample, so
/// an `Err` always means the caller's buffer is unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PixelError {
    /// Width, height or channel count is zero, or their product overflows.
    #[error("invalid dimensions {width}x{height} with {channels} channel(s)")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    /// Flat buffer length does not equal `width * height * channels`.
    #[error("buffer length ({actual}) does not match the image size ({expected})")]
    BufferLength { expected: usize, actual: usize },

    /// Gaussian spread must be finite and strictly positive.
    #[error("sigma must be finite and > 0, got {0}")]
    InvalidSigma(f32),

    /// Pointwise factor must be finite.
    #[error("factor must be finite, got {0}")]
    InvalidFactor(f32),

    /// Blend weight must lie in `[0, 1]`.
    #[error("blend alpha must be within [0, 1], got {0}")]
    InvalidBlendAlpha(f32),

    /// Two images that must agree in shape do not.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },

    /// The backing storage could not be viewed with the requested shape.
    #[error("invalid shape")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PixelError>;
