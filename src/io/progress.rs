//! Progress display for the loading and rendering stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress bars for one collage export
///
/// One bar tracks decoded inputs, a second tracks painted cells. Both are
/// driven through `&self` so decode workers can report from any thread.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    loading_bar: Option<ProgressBar>,
    rendering_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>9}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that tracks state but draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            loading_bar: None,
            rendering_bar: None,
        }
    }

    fn stage_bar(&self, label: &'static str, length: usize) -> ProgressBar {
        let bar = ProgressBar::new(length as u64);
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(label);
        self.multi_progress.add(bar)
    }

    /// Start the loading stage for `file_count` inputs
    pub fn begin_loading(&mut self, file_count: usize) {
        self.loading_bar = Some(self.stage_bar("Loading", file_count));
    }

    /// Report one decoded (or failed) input
    pub fn file_loaded(&self, path: &Path) {
        if let Some(ref bar) = self.loading_bar {
            bar.set_message(path.file_name().unwrap_or_default().to_string_lossy().to_string());
            bar.inc(1);
        }
    }

    /// Start the rendering stage for `cell_count` cells
    pub fn begin_rendering(&mut self, cell_count: usize) {
        if let Some(ref bar) = self.loading_bar {
            bar.finish_with_message("done");
        }
        self.rendering_bar = Some(self.stage_bar("Rendering", cell_count));
    }

    /// Report one painted cell
    pub fn cell_painted(&self) {
        if let Some(ref bar) = self.rendering_bar {
            bar.inc(1);
        }
    }

    /// Inputs reported so far
    pub fn loaded_count(&self) -> u64 {
        self.loading_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Cells reported so far
    pub fn painted_count(&self) -> u64 {
        self.rendering_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        for bar in [&self.loading_bar, &self.rendering_bar].into_iter().flatten() {
            bar.finish_with_message("done");
        }
        let _ = self.multi_progress.clear();
    }
}
