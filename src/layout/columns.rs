//! Column and row resolution for the collage grid

use crate::io::configuration::{AUTO_COLUMNS, AUTO_COLUMNS_MIN_LARGE, AUTO_COLUMNS_TABLE_LIMIT};

/// Column count actually used for layout
///
/// A non-zero `requested_columns` is taken as-is. Zero selects auto mode,
/// which maps small item counts through a fixed table tuned for looks
/// (three items sit in one row, four form a 2×2 block) and falls back to a
/// near-square grid of at least four columns past twenty items.
pub fn effective_columns(item_count: usize, requested_columns: usize) -> usize {
    if requested_columns != AUTO_COLUMNS {
        return requested_columns.max(1);
    }
    match item_count {
        0 | 1 => 1,
        2 | 4 => 2,
        3 | 5..=9 => 3,
        10..=16 => 4,
        17..=AUTO_COLUMNS_TABLE_LIMIT => 5,
        _ => near_square_columns(item_count).max(AUTO_COLUMNS_MIN_LARGE),
    }
}

fn near_square_columns(item_count: usize) -> usize {
    (item_count as f64).sqrt().round() as usize
}

/// Rows needed to hold `item_count` cells in `columns` columns
///
/// Zero items occupy zero rows. A zero column count is treated as one.
pub const fn row_count(item_count: usize, columns: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let columns = if columns == 0 { 1 } else { columns };
    item_count.div_ceil(columns)
}
