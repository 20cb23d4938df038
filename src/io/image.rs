//! Image decoding and PNG/JPEG export

use crate::io::error::{CollageError, Result, WithPath};
use crate::render::color::blend_over;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encoded file format of an exported collage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Lossless PNG, keeps transparency
    Png,
    /// Lossy JPEG at the given quality (1-100)
    Jpeg {
        /// Encoder quality
        quality: u8,
    },
}

impl ExportFormat {
    /// Infer the format from the extension of `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not PNG/JPEG
    pub fn from_path(path: &Path, quality: u8) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg" | "jpeg") => Ok(Self::Jpeg { quality }),
            _ => Err(CollageError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Conventional file extension
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpg",
        }
    }
}

/// Decode an image file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_path(path)
}

/// Flatten an RGBA canvas over an opaque `matte` color
pub fn flatten(canvas: &RgbaImage, matte: Rgba<u8>) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    let matte = Rgba([matte.0[0], matte.0[1], matte.0[2], 255]);
    ImageBuffer::from_fn(canvas.width(), canvas.height(), |x, y| {
        let Rgba([r, g, b, _]) = blend_over(matte, *canvas.get_pixel(x, y), 1.0);
        Rgb([r, g, b])
    })
}

/// Encode `canvas` to `output_path`
///
/// JPEG has no alpha channel, so the canvas is first flattened over `matte`.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The output file cannot be created
/// - Encoding fails
pub fn export_image(
    canvas: &RgbaImage,
    output_path: &Path,
    format: ExportFormat,
    matte: Rgba<u8>,
) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let export_error = |source| CollageError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    };

    match format {
        ExportFormat::Png => canvas
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(export_error),
        ExportFormat::Jpeg { quality } => {
            let file = File::create(output_path).map_err(|e| CollageError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "create file",
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
            DynamicImage::ImageRgb8(flatten(canvas, matte))
                .write_with_encoder(encoder)
                .map_err(export_error)?;
            writer.flush().map_err(|e| CollageError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "write file",
                source: e,
            })
        }
    }
}
