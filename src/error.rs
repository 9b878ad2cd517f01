//! # Error Handling
//!
//! Every stage of the conversion reports failures through [`TemplateError`]. Each variant
//! names the path or operation that failed and keeps the underlying error as its source.
//!
//! ## Error Classification
//!
//! All errors are terminal for the current invocation. Nothing is retried; the caller
//! reports the error and exits with a non-zero status. [`TemplateError::category`] gives a
//! short stage name for logging and [`TemplateError::recovery_suggestion`] a hint for the user.
//!
//! ## Usage
//!
//! ```rust
//! use std::path::Path;
//! use template_mask::error::TemplateError;
//!
//! let error = TemplateError::dimension(Path::new("icon.ico"));
//! assert_eq!(error.category(), "dimension");
//! assert!(error.to_string().contains("icon.ico"));
//! ```

use std::path::{Path, PathBuf};

use mask_luma::LayoutError;

use crate::config::config::ConfigError;

/// Convenience alias used throughout the library.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Failure of one conversion stage.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Invalid combination of options; raised before any file is touched.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The input file could not be opened or decoded.
    #[error("failed to load image '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// No representation with known pixel extents was found.
    #[error("failed to determine pixel dimensions of '{}'", path.display())]
    Dimension { path: PathBuf },

    /// The working RGBA buffer could not be allocated.
    #[error("failed to create a {width}x{height} RGBA working buffer")]
    BitmapCreation {
        width: u32,
        height: u32,
        #[source]
        source: LayoutError,
    },

    /// The decoded image could not be copied into the working buffer.
    #[error("failed to render '{}' into the working buffer: {reason}", path.display())]
    Render { path: PathBuf, reason: String },

    /// The decoded sample memory was not accessible in the expected shape.
    #[error("decoded pixel data for '{}' is not accessible: {reason}", path.display())]
    BufferAccess { path: PathBuf, reason: String },

    /// The buffer could not be serialized to PNG.
    #[error("failed to encode {operation}")]
    Encode {
        operation: String,
        #[source]
        source: Option<image::ImageError>,
    },

    /// The encoded bytes could not be persisted.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TemplateError {
    pub fn load(path: &Path, source: image::ImageError) -> Self {
        Self::Load { path: path.to_path_buf(), source }
    }

    pub fn dimension(path: &Path) -> Self {
        Self::Dimension { path: path.to_path_buf() }
    }

    pub fn bitmap_creation(width: u32, height: u32, source: LayoutError) -> Self {
        Self::BitmapCreation { width, height, source }
    }

    pub fn render(path: &Path, reason: impl Into<String>) -> Self {
        Self::Render { path: path.to_path_buf(), reason: reason.into() }
    }

    pub fn buffer_access(path: &Path, reason: impl Into<String>) -> Self {
        Self::BufferAccess { path: path.to_path_buf(), reason: reason.into() }
    }

    pub fn encode(operation: impl Into<String>, source: Option<image::ImageError>) -> Self {
        Self::Encode { operation: operation.into(), source }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write { path: path.to_path_buf(), source }
    }

    /// Short stage name, stable enough for log filtering.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Load { .. } => "load",
            Self::Dimension { .. } => "dimension",
            Self::BitmapCreation { .. } => "bitmap_creation",
            Self::Render { .. } => "render",
            Self::BufferAccess { .. } => "buffer_access",
            Self::Encode { .. } => "encode",
            Self::Write { .. } => "write",
        }
    }

    /// A hint the CLI prints below the error.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(ConfigError::OutputWithInPlace) => Some("drop OUTPUT or drop --in-place"),
            Self::Config(ConfigError::MissingOutput) => Some("pass an OUTPUT path or use --in-place"),
            Self::Config(ConfigError::EmptyInput) => Some("pass the path of an existing image"),
            Self::Load { .. } => Some("check that the file exists and is a PNG or another supported raster format"),
            Self::BitmapCreation { .. } => Some("the image is too large for available memory"),
            Self::Write { .. } => Some("check that the output directory exists and is writable"),
            _ => None,
        }
    }
}
