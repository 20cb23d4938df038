//! Canvas sizing and per-cell placement
//!
//! Pure pixel arithmetic on `u32`. Sums saturate so absurd inputs produce an
//! oversized canvas (rejected later by validation) rather than wrapping.

use crate::io::configuration::{MIN_EXPORT_HEIGHT, MIN_EXPORT_WIDTH};

/// Width × height dimensions in pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rect
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

// `cell * count + spacing * (count + 1)`
fn span(count: u32, spacing: u32, cell: u32) -> u32 {
    cell.saturating_mul(count)
        .saturating_add(spacing.saturating_mul(count.saturating_add(1)))
}

/// Export canvas size for a grid of `columns` × `rows` square cells
///
/// `width = b*c + s*(c+1)` and `height = b*r + s*(r+1)`, each floored at
/// 400×300. A grid without rows or columns holds no cells and gets the floor
/// as is, so an empty collage exports the same canvas whatever its spacing.
pub fn export_size(columns: usize, rows: usize, spacing: u32, base_cell_size: u32) -> Size {
    if columns == 0 || rows == 0 {
        return Size::new(MIN_EXPORT_WIDTH, MIN_EXPORT_HEIGHT);
    }
    let width = span(to_u32(columns), spacing, base_cell_size);
    let height = span(to_u32(rows), spacing, base_cell_size);
    Size::new(width.max(MIN_EXPORT_WIDTH), height.max(MIN_EXPORT_HEIGHT))
}

/// Edge length of a cell when `columns` cells and their gaps share `width`
pub fn cell_edge(width: u32, columns: usize, spacing: u32) -> u32 {
    let columns = to_u32(columns);
    if columns == 0 {
        return 0;
    }
    let gaps = spacing.saturating_mul(columns.saturating_add(1));
    width.saturating_sub(gaps) / columns
}

/// Rectangle of cell `index` in a row-major grid
///
/// Cells fill left to right, then top to bottom. The edge length is derived
/// from the canvas width; cells are square regardless of canvas height.
/// Returns `None` for indices outside the `columns × rows` grid.
pub fn cell_rect(
    index: usize,
    columns: usize,
    rows: usize,
    export_size: Size,
    spacing: u32,
) -> Option<Rect> {
    if columns == 0 || index >= columns.saturating_mul(rows) {
        return None;
    }
    let edge = cell_edge(export_size.width, columns, spacing);
    let pitch = edge.saturating_add(spacing);
    let column = to_u32(index % columns);
    let row = to_u32(index / columns);

    Some(Rect::new(
        spacing.saturating_add(column.saturating_mul(pitch)),
        spacing.saturating_add(row.saturating_mul(pitch)),
        edge,
        edge,
    ))
}

/// Region of a source image that fills a square cell without distortion
///
/// Returns the largest centered square of `source`. Scaling that region to
/// the cell covers it exactly; everything outside the region is clipped.
pub fn cover_crop(source: Size) -> Rect {
    let side = source.width.min(source.height);
    Rect::new(
        (source.width - side) / 2,
        (source.height - side) / 2,
        side,
        side,
    )
}
