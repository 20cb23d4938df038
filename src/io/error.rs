//! Crate-wide error type
//!
//! Model and layout operations never fail; everything here comes from the
//! edges of the crate: reading inputs, checking settings and writing output.

use std::fmt;
use std::path::{Path, PathBuf};

/// Failure while loading, validating or exporting a collage
#[derive(Debug)]
pub enum CollageError {
    /// A source image could not be opened or decoded
    ImageLoad {
        /// File that failed to decode
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// The finished canvas could not be encoded
    ImageExport {
        /// Destination of the export
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// An input or output path could not be accessed
    FileSystem {
        /// Path that was being accessed
        path: PathBuf,
        /// What was being attempted, e.g. `read directory`
        operation: &'static str,
        /// OS error
        source: std::io::Error,
    },

    /// A layout, color or export setting is out of range
    InvalidParameter {
        /// Setting name as shown to the user
        parameter: &'static str,
        /// Offending value rendered as text
        value: String,
        /// What the setting requires
        reason: String,
    },

    /// Every input failed to decode
    NoImages {
        /// How many inputs were tried
        attempted: usize,
    },

    /// Output extension matches neither PNG nor JPEG
    UnsupportedFormat {
        /// Requested output path
        path: PathBuf,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollageError>;

// Placeholder for errors converted before their path is known
const UNKNOWN_PATH: &str = "<unknown>";

impl CollageError {
    fn path_mut(&mut self) -> Option<&mut PathBuf> {
        match self {
            Self::ImageLoad { path, .. }
            | Self::ImageExport { path, .. }
            | Self::FileSystem { path, .. }
            | Self::UnsupportedFormat { path } => Some(path),
            Self::InvalidParameter { .. } | Self::NoImages { .. } => None,
        }
    }
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "cannot decode '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "cannot write collage to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "cannot {operation} '{}': {source}", path.display()),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "invalid {parameter} '{value}': {reason}"),
            Self::NoImages { attempted } => {
                write!(f, "none of the {attempted} input(s) could be decoded")
            }
            Self::UnsupportedFormat { path } => write!(
                f,
                "cannot pick an encoder for '{}': use a .png, .jpg or .jpeg extension",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<image::ImageError> for CollageError {
    fn from(source: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source,
        }
    }
}

impl From<std::io::Error> for CollageError {
    fn from(source: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "access",
            source,
        }
    }
}

/// Fills in the path of errors that were converted without one
pub trait WithPath<T> {
    /// Convert the error and attach `path` unless it already names one
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is an error
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E: Into<CollageError>> WithPath<T> for std::result::Result<T, E> {
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error: CollageError = e.into();
            if let Some(slot) = error.path_mut()
                && slot.as_path() == Path::new(UNKNOWN_PATH)
            {
                *slot = path.to_path_buf();
            }
            error
        })
    }
}

/// Build an [`CollageError::InvalidParameter`] from displayable parts
pub fn invalid_parameter(
    parameter: &'static str,
    value: impl fmt::Display,
    reason: impl fmt::Display,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
