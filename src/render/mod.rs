//! Raster export sink
//!
//! Paints the ordered cell commands produced by the layout engine into an
//! RGBA canvas: cover-cropped images, rounded corners, borders and background.

/// Color parsing and blending
pub mod color;
/// Canvas painting
pub mod compositor;
/// Corner and border coverage
pub mod mask;

pub use color::parse_color;
pub use compositor::{CellStyle, Compositor, render_collage};
