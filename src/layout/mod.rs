//! Deterministic grid layout
//!
//! This module maps an item count and a [`LayoutConfig`] to pixel geometry:
//! - Effective column and row counts
//! - Export canvas size and per-cell rectangles
//! - Fill-and-crop source regions for square cells
//!
//! Nothing here holds state between calls.

/// Column and row resolution
pub mod columns;
/// Presentation parameters
pub mod config;
/// Canvas sizing, cell rectangles and cover cropping
pub mod geometry;
/// Resolved geometry for one item count and configuration
pub mod plan;

pub use columns::{effective_columns, row_count};
pub use config::LayoutConfig;
pub use geometry::{Rect, Size, cell_rect, cover_crop, export_size};
pub use plan::{CellCommand, GridPlan};
