//! Presentation parameters consumed by the layout engine

use crate::io::configuration::{
    AUTO_COLUMNS, DEFAULT_BASE_CELL_SIZE, DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS,
    DEFAULT_EXPORT_SCALE, DEFAULT_SPACING, MAX_EXPORT_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::plan::GridPlan;

/// Collage presentation settings
///
/// A plain value: callers own it and may change it between any two layout
/// computations without affecting the model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Column override, `0` selects auto mode
    pub columns: usize,
    /// Gap between cells and around the grid, in unscaled pixels
    pub spacing: u32,
    /// Corner radius of each cell, in unscaled pixels
    pub corner_radius: u32,
    /// Border stroke width of each cell, in unscaled pixels
    pub border_width: u32,
    /// Edge length of one cell before scaling, must be positive
    pub base_cell_size: u32,
    /// Multiplier applied to every length at export, must be positive
    pub export_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: AUTO_COLUMNS,
            spacing: DEFAULT_SPACING,
            corner_radius: DEFAULT_CORNER_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            base_cell_size: DEFAULT_BASE_CELL_SIZE,
            export_scale: DEFAULT_EXPORT_SCALE,
        }
    }
}

impl LayoutConfig {
    /// Whether the column count is derived from the item count
    pub const fn is_auto(&self) -> bool {
        self.columns == AUTO_COLUMNS
    }

    /// Scale an unscaled length by `export_scale`, rounding to whole pixels
    pub fn scaled(&self, length: u32) -> u32 {
        let scaled = (f64::from(length) * f64::from(self.export_scale)).round();
        if scaled <= 0.0 {
            0
        } else if scaled >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            scaled as u32
        }
    }

    /// Check the parameters the engine relies on
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_cell_size` is zero
    /// - `export_scale` is not a finite positive number
    /// - The scaled base cell collapses to zero pixels
    pub fn validate(&self) -> Result<()> {
        if self.base_cell_size == 0 {
            return Err(invalid_parameter(
                "base_cell_size",
                self.base_cell_size,
                "must be positive",
            ));
        }
        if !self.export_scale.is_finite() || self.export_scale <= 0.0 {
            return Err(invalid_parameter(
                "export_scale",
                self.export_scale,
                "must be a finite positive number",
            ));
        }
        if self.scaled(self.base_cell_size) == 0 {
            return Err(invalid_parameter(
                "export_scale",
                self.export_scale,
                "scaled cell size rounds to zero pixels",
            ));
        }
        Ok(())
    }

    /// Validate, then check that the canvas for `item_count` items fits the
    /// export limit
    ///
    /// # Errors
    ///
    /// Returns an error if [`validate`](Self::validate) fails or either
    /// canvas side exceeds the maximum export dimension
    pub fn validate_for(&self, item_count: usize) -> Result<GridPlan> {
        self.validate()?;
        let plan = GridPlan::new(item_count, self);
        let canvas = plan.canvas();
        if canvas.width > MAX_EXPORT_DIMENSION || canvas.height > MAX_EXPORT_DIMENSION {
            return Err(invalid_parameter(
                "canvas",
                format_args!("{}x{}", canvas.width, canvas.height),
                format_args!("exceeds the {MAX_EXPORT_DIMENSION} px export limit"),
            ));
        }
        Ok(plan)
    }
}
