//! Headless image collage: an ordered model, a deterministic grid layout and a raster exporter
//!
//! Images are held in insertion order by a [`model::CollageModel`], laid out
//! row-major in square cells by [`layout`], and painted with rounded corners
//! and borders by [`render`] before being encoded to PNG or JPEG.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Grid geometry: columns, rows, canvas size and cell rectangles
pub mod layout;
/// Ordered collage model and thread-safe handle
pub mod model;
/// Compositing of laid-out cells into an export canvas
pub mod render;

pub use io::error::{CollageError, Result};
