//! Layout constants and runtime configuration defaults

// Export canvas floor, keeps an empty or tiny collage from collapsing
/// Minimum width of an exported canvas in pixels
pub const MIN_EXPORT_WIDTH: u32 = 400;
/// Minimum height of an exported canvas in pixels
pub const MIN_EXPORT_HEIGHT: u32 = 300;

// Most decoders and viewers refuse canvases past this size
/// Maximum allowed export dimension on either axis
pub const MAX_EXPORT_DIMENSION: u32 = 16_384;

// Auto column mode switches to the square-root rule above this count
/// Largest item count covered by the fixed column table
pub const AUTO_COLUMNS_TABLE_LIMIT: usize = 20;
/// Lower bound on auto columns once past the fixed table
pub const AUTO_COLUMNS_MIN_LARGE: usize = 4;

// Default values for configurable parameters
/// Column override meaning "derive from item count"
pub const AUTO_COLUMNS: usize = 0;
/// Default gap between cells and around the grid
pub const DEFAULT_SPACING: u32 = 8;
/// Default corner radius of each cell
pub const DEFAULT_CORNER_RADIUS: u32 = 0;
/// Default border stroke width of each cell
pub const DEFAULT_BORDER_WIDTH: u32 = 0;
/// Default edge length of one cell before scaling
pub const DEFAULT_BASE_CELL_SIZE: u32 = 300;
/// Default export scale multiplier
pub const DEFAULT_EXPORT_SCALE: f32 = 1.0;
/// Default canvas background
pub const DEFAULT_BACKGROUND: &str = "white";
/// Default cell border color
pub const DEFAULT_BORDER_COLOR: &str = "black";

// Output settings
/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "collage.png";
/// Default JPEG encoder quality
pub const DEFAULT_JPEG_QUALITY: u8 = 90;
/// File extensions picked up when expanding input directories
pub const SUPPORTED_EXTENSIONS: [&str; 8] =
    ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
