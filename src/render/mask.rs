//! Rounded-corner and border coverage for square cells
//!
//! Coverage is derived from the signed distance of each pixel center to the
//! rounded outline, which gives one pixel of antialiasing for free.

/// Signed distance from the center of pixel `(x, y)` to the outline of a
/// rounded square with side `edge` and corner `radius`
///
/// Negative inside, positive outside. The radius is clamped to half the edge.
pub fn rounded_square_distance(x: u32, y: u32, edge: u32, radius: u32) -> f32 {
    let half = edge as f32 / 2.0;
    let radius = (radius as f32).min(half);
    let inset = half - radius;

    let qx = (x as f32 + 0.5 - half).abs() - inset;
    let qy = (y as f32 + 0.5 - half).abs() - inset;
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}

/// Fraction of a pixel covered by a shape, given its signed distance
pub fn coverage(distance: f32) -> f32 {
    (0.5 - distance).clamp(0.0, 1.0)
}

/// Precomputed mask parameters for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMask {
    edge: u32,
    radius: u32,
    border_width: u32,
}

/// Coverage of the image fill and of the border stroke at one pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskSample {
    /// How much of the image shows through
    pub fill: f32,
    /// How much of the border color is painted on top
    pub border: f32,
}

impl CellMask {
    /// Mask for a cell of side `edge`
    ///
    /// The border is stroked inside the rounded outline and never grows the
    /// cell. A border wider than half the cell covers it entirely.
    pub const fn new(edge: u32, radius: u32, border_width: u32) -> Self {
        Self {
            edge,
            radius,
            border_width,
        }
    }

    /// Sample the mask at pixel `(x, y)` of the cell
    pub fn sample(&self, x: u32, y: u32) -> MaskSample {
        let distance = rounded_square_distance(x, y, self.edge, self.radius);
        let outer = coverage(distance);
        if self.border_width == 0 {
            return MaskSample {
                fill: outer,
                border: 0.0,
            };
        }

        let inner = coverage(distance + self.border_width as f32);
        MaskSample {
            fill: inner,
            border: (outer - inner).max(0.0),
        }
    }
}
