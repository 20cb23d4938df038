//! Command-line interface for gluing image files into a grid collage

use crate::io::configuration::{
    AUTO_COLUMNS, DEFAULT_BACKGROUND, DEFAULT_BASE_CELL_SIZE, DEFAULT_BORDER_COLOR,
    DEFAULT_BORDER_WIDTH, DEFAULT_CORNER_RADIUS, DEFAULT_EXPORT_SCALE, DEFAULT_JPEG_QUALITY,
    DEFAULT_OUTPUT, DEFAULT_SPACING,
};
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::io::image::{ExportFormat, export_image};
use crate::io::ingest::{collect_inputs, ingest_paths};
use crate::io::progress::ProgressManager;
use crate::layout::LayoutConfig;
use crate::model::{CollageModel, SharedCollage};
use crate::render::{CellStyle, parse_color, render_collage};
use clap::{Parser, ValueEnum};
use image::{DynamicImage, Rgba};
use std::path::PathBuf;
use std::str::FromStr;

/// Output encoding selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// PNG, keeps transparency
    Png,
    /// JPEG, flattened over the background
    Jpeg,
}

/// A `FROM:TO` reorder request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveArg {
    /// Index of the entry to move
    pub from: isize,
    /// Target index, `len` moves to the end
    pub to: isize,
}

impl FromStr for MoveArg {
    type Err = CollageError;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || invalid_parameter("move", text, "expected FROM:TO");
        let (from, to) = text.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            from: from.trim().parse().map_err(|_| invalid())?,
            to: to.trim().parse().map_err(|_| invalid())?,
        })
    }
}

fn color_arg(text: &str) -> std::result::Result<Rgba<u8>, String> {
    parse_color(text).map_err(|e| e.to_string())
}

fn move_arg(text: &str) -> std::result::Result<MoveArg, String> {
    text.parse().map_err(|e: CollageError| e.to_string())
}

#[derive(Parser)]
#[command(name = "gridglue")]
#[command(
    author,
    version,
    about = "Glue images into a grid collage and export it as PNG or JPEG"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Image files or directories, in display order
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Column count, 0 derives it from the image count
    #[arg(short, long, default_value_t = AUTO_COLUMNS)]
    pub columns: usize,

    /// Gap between cells and around the grid in pixels
    #[arg(short, long, default_value_t = DEFAULT_SPACING)]
    pub spacing: u32,

    /// Corner radius of each cell in pixels
    #[arg(short = 'r', long, default_value_t = DEFAULT_CORNER_RADIUS)]
    pub corner_radius: u32,

    /// Border width of each cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_BORDER_WIDTH)]
    pub border_width: u32,

    /// Edge length of one cell in pixels before scaling
    #[arg(long, default_value_t = DEFAULT_BASE_CELL_SIZE)]
    pub cell_size: u32,

    /// Multiplier applied to every length at export
    #[arg(long, default_value_t = DEFAULT_EXPORT_SCALE)]
    pub scale: f32,

    /// Canvas background (name or hex)
    #[arg(long, default_value = DEFAULT_BACKGROUND, value_parser = color_arg)]
    pub background: Rgba<u8>,

    /// Cell border color (name or hex)
    #[arg(long, default_value = DEFAULT_BORDER_COLOR, value_parser = color_arg)]
    pub border_color: Rgba<u8>,

    /// Output format, inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// JPEG quality (1-100)
    #[arg(
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,

    /// Remove the entry at INDEX after loading (repeatable, applied in order)
    #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
    pub remove: Vec<isize>,

    /// Move the entry at FROM to TO after removals (repeatable, applied in order)
    #[arg(long = "move", value_name = "FROM:TO", value_parser = move_arg)]
    pub moves: Vec<MoveArg>,

    /// Overwrite the output if it already exists
    #[arg(long)]
    pub force: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if an existing output should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.force
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Layout settings described by the arguments
    pub const fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            columns: self.columns,
            spacing: self.spacing,
            corner_radius: self.corner_radius,
            border_width: self.border_width,
            base_cell_size: self.cell_size,
            export_scale: self.scale,
        }
    }

    /// Encoding to use for the output file
    ///
    /// # Errors
    ///
    /// Returns an error if no format was given and the output extension is
    /// not a supported one
    pub fn export_format(&self) -> Result<ExportFormat> {
        match self.format {
            Some(FormatArg::Png) => Ok(ExportFormat::Png),
            Some(FormatArg::Jpeg) => Ok(ExportFormat::Jpeg {
                quality: self.quality,
            }),
            None => ExportFormat::from_path(&self.output, self.quality),
        }
    }
}

/// Runs one collage export from parsed arguments
pub struct CollageJob {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CollageJob {
    /// Create a job for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load, arrange, render and export the collage
    ///
    /// Returns `Ok(false)` when the output already exists and was skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Arguments are invalid
    /// - An input path is missing or unreadable
    /// - None of the inputs decode
    /// - The collage cannot be written
    // Allow print for user feedback on skipped output and undecodable inputs
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<bool> {
        let config = self.cli.layout_config();
        config.validate()?;
        let format = self.cli.export_format()?;

        if self.cli.skip_existing() && self.cli.output.exists() {
            if !self.cli.quiet {
                eprintln!(
                    "Skipping: {} (output exists, use --force to overwrite)",
                    self.cli.output.display()
                );
            }
            return Ok(false);
        }

        let files = collect_inputs(&self.cli.inputs)?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.begin_loading(files.len());
        }

        let collage = SharedCollage::default();
        let report = ingest_paths(&files, &collage, self.progress_manager.as_ref());
        if !self.cli.quiet {
            for failure in &report.failed {
                eprintln!("Skipping input: {failure}");
            }
        }
        if report.added.is_empty() {
            return Err(CollageError::NoImages {
                attempted: report.attempted(),
            });
        }

        let mut model = collage
            .try_into_inner()
            .unwrap_or_else(|shared| shared.with(std::mem::take));
        self.apply_edits(&mut model);

        let style = CellStyle::from_config(&config, self.cli.border_color, self.cli.background);
        let canvas = render_collage(&model, &config, &style, self.progress_manager.as_mut())?;
        export_image(&canvas, &self.cli.output, format, self.cli.background)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(true)
    }

    /// Apply `--remove` then `--move` requests, each in command-line order
    ///
    /// Out-of-range requests are ignored, like any other model edit.
    pub fn apply_edits(&self, model: &mut CollageModel<DynamicImage>) {
        for &index in &self.cli.remove {
            model.remove(index);
        }
        for arg in &self.cli.moves {
            model.move_entry(arg.from, arg.to);
        }
    }
}
