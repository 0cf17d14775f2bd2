//! Filter modules operating on `(height, width, channels)` u8 images.
//!
//! ## Supported Formats
//!
//! Every filter accepts any positive channel count. Channels are opaque to
//! the engine and processed independently; alpha gets no special treatment.
//!
//! | Format | Shape | Type |
//! |--------|-------|------|
//! | Grayscale8 | (H, W, 1) | u8 |
//! | RGB8 | (H, W, 3) | u8 |
//! | RGBA8 | (H, W, 4) | u8 |
//!
//! ## Boundary Handling
//!
//! - **Gaussian blur** clamps neighbor coordinates to the image edge
//! - **Sharpen / Sobel** rewrite interior pixels only; the one-pixel border
//!   keeps its input values
//! - **Bilinear resize** clamps the right/bottom neighbor to the last
//!   column/row
//!
//! ## Filter Categories
//!
//! - **Spatial**: gaussian blur, sharpen, sobel magnitude
//! - **Pointwise**: brightness, contrast
//! - **Resampling**: bilinear resize

pub mod kernel;
pub mod convolve;
pub mod blur;
pub mod sharpen;
pub mod edge;
pub mod color_adjust;
pub mod resize;
