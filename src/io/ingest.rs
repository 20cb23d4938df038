//! Input discovery and parallel image ingestion

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{CollageError, Result};
use crate::io::image::load_image;
use crate::io::progress::ProgressManager;
use crate::model::{EntryId, SharedCollage};
use image::DynamicImage;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome of one ingestion pass
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Tokens of the entries that were appended, in input order
    pub added: Vec<EntryId>,
    /// Inputs that could not be decoded
    pub failed: Vec<CollageError>,
}

impl IngestReport {
    /// Number of inputs attempted
    pub fn attempted(&self) -> usize {
        self.added.len() + self.failed.len()
    }
}

/// Whether `path` carries one of the supported image extensions
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Expand inputs into the list of files to ingest
///
/// Files are kept in the given order whatever their extension. Directories
/// contribute their supported image files, sorted by path, at the position
/// the directory was named.
///
/// # Errors
///
/// Returns an error if an input does not exist or a directory cannot be read
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let read_error = |e| CollageError::FileSystem {
                path: input.clone(),
                operation: "read directory",
                source: e,
            };
            let mut found = Vec::new();
            for entry in std::fs::read_dir(input).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && is_supported_image(&path) {
                    found.push(path);
                }
            }
            found.sort();
            files.extend(found);
        } else {
            return Err(CollageError::FileSystem {
                path: input.clone(),
                operation: "open input",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file or directory",
                ),
            });
        }
    }
    Ok(files)
}

/// Decode `paths` in parallel and append the results to `collage`
///
/// Decoding runs on the rayon pool; appends go through the collage lock as
/// one run in input order, so the resulting order never depends on which
/// decode finished first. Undecodable inputs are reported and skipped, and
/// leave the collage untouched.
pub fn ingest_paths(
    paths: &[PathBuf],
    collage: &SharedCollage<DynamicImage>,
    progress: Option<&ProgressManager>,
) -> IngestReport {
    let decoded: Vec<Result<DynamicImage>> = paths
        .par_iter()
        .map(|path| {
            let result = load_image(path);
            if let Some(pm) = progress {
                pm.file_loaded(path);
            }
            result
        })
        .collect();

    let (images, failed): (Vec<_>, Vec<_>) = decoded.into_iter().partition(Result::is_ok);
    let added = collage.extend(images.into_iter().flatten());

    IngestReport {
        added,
        failed: failed.into_iter().filter_map(Result::err).collect(),
    }
}
