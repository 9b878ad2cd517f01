//! # Template Mask Library
//!
//! Converts raster images into "template" masks: every pixel becomes black and its
//! original brightness, inverted, is stored in the alpha channel. Template images are
//! used by UI frameworks for icon tinting, where only the alpha shape matters.
//!
//! ## Architecture
//!
//! The library is organized into a few small modules:
//! - `config`: Command-line choices and output path validation
//! - `decode`: File → row-aligned RGBA8 [`PixelBuffer`](mask_luma::PixelBuffer)
//! - `encode`: Buffer → PNG bytes → atomic file replacement
//! - `pipeline`: Load → transform → encode → write orchestration
//! - `error`: One error type covering every stage
//!
//! The pixel transform itself lives in the `mask-luma` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use template_mask::{convert_to_template, TemplateOptions};
//! use mask_luma::Execution;
//!
//! # fn example() -> Result<(), template_mask::TemplateError> {
//! let options = TemplateOptions {
//!     input: "icon.png".into(),
//!     output: "icon-template.png".into(),
//!     execution: Execution::Parallel,
//! };
//!
//! let report = convert_to_template(&options)?;
//! println!("wrote {} bytes", report.bytes_written);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use mask_luma::Execution;

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod pipeline;

/// Re-export error types for convenience
pub use error::{TemplateError, TemplateResult};
pub use decode::ImageDimensions;

/// Resolved options for one conversion.
#[derive(Debug, Clone)]
pub struct TemplateOptions {
    /// Image to read.
    pub input: PathBuf,

    /// PNG file to write. Equal to `input` in in-place mode.
    pub output: PathBuf,

    /// Row scheduling for the pixel transform.
    pub execution: Execution,
}

impl TemplateOptions {
    /// True when `output` names the same file as `input`, including through `./`
    /// segments or symlinks once both paths exist.
    pub fn is_in_place(&self) -> bool {
        if self.input == self.output {
            return true;
        }
        match (std::fs::canonicalize(&self.input), std::fs::canonicalize(&self.output)) {
            (Ok(input), Ok(output)) => input == output,
            _ => false,
        }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dimensions: ImageDimensions,
    pub bytes_written: usize,
    pub in_place: bool,
}

/// Main entry point: convert `options.input` into a template PNG at `options.output`.
///
/// Either the whole pipeline succeeds and exactly one file is written, or nothing is
/// written. In in-place mode the input is replaced atomically, never truncated.
///
/// # Errors
///
/// Returns the [`TemplateError`] of the first stage that failed.
pub fn convert_to_template(options: &TemplateOptions) -> TemplateResult<ConversionReport> {
    log::info!(
        "{} → {} ({:?})",
        options.input.display(),
        options.output.display(),
        options.execution
    );

    let report = pipeline::run(options)?;

    log::info!(
        "Wrote {} template ({} bytes){}",
        report.dimensions,
        report.bytes_written,
        if report.in_place { " in place" } else { "" }
    );
    Ok(report)
}
