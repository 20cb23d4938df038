//! Resolved grid geometry for one item count and configuration

use crate::layout::columns::{effective_columns, row_count};
use crate::layout::config::LayoutConfig;
use crate::layout::geometry::{Rect, Size, cell_edge, cell_rect, export_size};
use crate::model::CollageModel;
use crate::render::CellStyle;

/// One painted cell: an image, where it goes and how it looks
#[derive(Debug)]
pub struct CellCommand<'a, I> {
    /// Position of the entry in the model
    pub index: usize,
    /// Image handle to paint
    pub image: &'a I,
    /// Destination rectangle on the canvas
    pub rect: Rect,
    /// Corner, border and color settings
    pub style: CellStyle,
}

// The width floor can widen cells past the base size; grow the height so the
// last row still lies on the canvas.
fn fitted_height(height: u32, rows: usize, spacing: u32, edge: u32) -> u32 {
    if rows == 0 {
        return height;
    }
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    let needed = edge
        .saturating_mul(rows)
        .saturating_add(spacing.saturating_mul(rows.saturating_add(1)));
    height.max(needed)
}

/// Grid geometry at export resolution
///
/// Spacing and base cell size are scaled by `export_scale` before sizing the
/// canvas, so every rectangle the plan hands out is in output pixels. When
/// the width floor widens the cells, the canvas grows taller to keep every
/// filled cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    item_count: usize,
    columns: usize,
    rows: usize,
    spacing: u32,
    canvas: Size,
    cell_edge: u32,
}

impl GridPlan {
    /// Resolve the grid for `item_count` entries
    pub fn new(item_count: usize, config: &LayoutConfig) -> Self {
        let columns = effective_columns(item_count, config.columns);
        let rows = row_count(item_count, columns);
        let spacing = config.scaled(config.spacing);
        let base_cell = config.scaled(config.base_cell_size).max(1);
        let floored = export_size(columns, rows, spacing, base_cell);
        let edge = cell_edge(floored.width, columns, spacing);

        Self {
            item_count,
            columns,
            rows,
            spacing,
            canvas: Size::new(floored.width, fitted_height(floored.height, rows, spacing, edge)),
            cell_edge: edge,
        }
    }

    /// Number of entries the plan was computed for
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Effective column count
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Scaled spacing in output pixels
    pub const fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Export canvas size in output pixels
    pub const fn canvas(&self) -> Size {
        self.canvas
    }

    /// Edge length of every cell in output pixels
    pub const fn cell_edge(&self) -> u32 {
        self.cell_edge
    }

    /// Rectangle for entry `index`, `None` past the last entry
    pub fn cell(&self, index: usize) -> Option<Rect> {
        if index >= self.item_count {
            return None;
        }
        cell_rect(index, self.columns, self.rows, self.canvas, self.spacing)
    }

    /// Rectangles of all filled cells in model order
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.item_count).filter_map(|index| self.cell(index))
    }

    /// Grid slots left empty after the last entry
    pub const fn empty_cells(&self) -> usize {
        (self.columns * self.rows).saturating_sub(self.item_count)
    }

    /// Ordered paint commands pairing each entry with its cell
    ///
    /// Entries beyond the plan's item count are ignored, so a plan computed
    /// for an older, shorter model never paints outside its grid.
    pub fn commands<'a, I>(
        &self,
        model: &'a CollageModel<I>,
        style: &CellStyle,
    ) -> Vec<CellCommand<'a, I>> {
        model
            .images()
            .enumerate()
            .filter_map(|(index, image)| {
                self.cell(index).map(|rect| CellCommand {
                    index,
                    image,
                    rect,
                    style: *style,
                })
            })
            .collect()
    }
}
