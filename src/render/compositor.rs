//! CPU compositor painting cell commands onto the export canvas

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::layout::config::LayoutConfig;
use crate::layout::geometry::{Rect, Size, cover_crop};
use crate::model::CollageModel;
use crate::render::color::blend_over;
use crate::render::mask::CellMask;

/// Visual settings shared by every cell, in output pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellStyle {
    /// Corner radius of each cell
    pub corner_radius: u32,
    /// Border stroke width of each cell
    pub border_width: u32,
    /// Border stroke color
    pub border_color: Rgba<u8>,
    /// Canvas background, also visible through empty cells
    pub background: Rgba<u8>,
}

impl CellStyle {
    /// Style for `config`, with radius and border scaled to output pixels
    pub fn from_config(
        config: &LayoutConfig,
        border_color: Rgba<u8>,
        background: Rgba<u8>,
    ) -> Self {
        Self {
            corner_radius: config.scaled(config.corner_radius),
            border_width: config.scaled(config.border_width),
            border_color,
            background,
        }
    }
}

/// Source image cropped to its cover region and resized to the cell
pub fn prepare_tile(image: &DynamicImage, edge: u32) -> Option<RgbaImage> {
    if edge == 0 || image.width() == 0 || image.height() == 0 {
        return None;
    }
    let crop = cover_crop(Size::new(image.width(), image.height()));
    let tile = image
        .crop_imm(crop.x, crop.y, crop.width, crop.height)
        .resize_exact(edge, edge, FilterType::Lanczos3);
    Some(tile.to_rgba8())
}

/// Accumulates painted cells on a background-filled canvas
pub struct Compositor {
    canvas: RgbaImage,
}

impl Compositor {
    /// Start a canvas of `size` filled with `background`
    pub fn new(size: Size, background: Rgba<u8>) -> Self {
        Self {
            canvas: ImageBuffer::from_pixel(size.width, size.height, background),
        }
    }

    /// Canvas size in pixels
    pub fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    /// Blend a prepared tile into `rect`, masking corners and stroking the border
    ///
    /// Pixels falling outside the canvas are clipped.
    pub fn paint_tile(&mut self, tile: &RgbaImage, rect: Rect, style: &CellStyle) {
        let mask = CellMask::new(rect.width, style.corner_radius, style.border_width);
        for (x, y, pixel) in tile.enumerate_pixels() {
            if x >= rect.width || y >= rect.height {
                continue;
            }
            let Some(target) = self
                .canvas
                .get_pixel_mut_checked(rect.x.saturating_add(x), rect.y.saturating_add(y))
            else {
                continue;
            };
            let sample = mask.sample(x, y);
            let filled = blend_over(*target, *pixel, sample.fill);
            *target = blend_over(filled, style.border_color, sample.border);
        }
    }

    /// Hand back the finished canvas
    pub fn finish(self) -> RgbaImage {
        self.canvas
    }
}

/// Render every entry of `model` into a finished canvas
///
/// Tiles are cropped and resized in parallel, then blended in model order.
/// Trailing grid slots stay background colored.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the canvas would
/// exceed the export limit
pub fn render_collage(
    model: &CollageModel<DynamicImage>,
    config: &LayoutConfig,
    style: &CellStyle,
    mut progress: Option<&mut ProgressManager>,
) -> Result<RgbaImage> {
    let plan = config.validate_for(model.len())?;
    let commands = plan.commands(model, style);

    if let Some(pm) = progress.as_deref_mut() {
        pm.begin_rendering(commands.len());
    }

    let tiles: Vec<Option<RgbaImage>> = commands
        .par_iter()
        .map(|command| prepare_tile(command.image, command.rect.width))
        .collect();

    let mut compositor = Compositor::new(plan.canvas(), style.background);
    for (command, tile) in commands.iter().zip(&tiles) {
        if let Some(tile) = tile {
            compositor.paint_tile(tile, command.rect, &command.style);
        }
        if let Some(pm) = progress.as_deref() {
            pm.cell_painted();
        }
    }

    Ok(compositor.finish())
}
