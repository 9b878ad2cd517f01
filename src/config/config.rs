//! # Conversion Configuration
//!
//! [`TemplateConfig`] is the common interface between the command line and the library.
//! It holds the raw user choices, validates their combination and resolves them into
//! [`TemplateOptions`](crate::TemplateOptions).
//!
//! ## Output Selection
//!
//! | `in_place` | `output`  | Result                                  |
//! |------------|-----------|-----------------------------------------|
//! | `false`    | `Some(p)` | write to `p`                            |
//! | `true`     | `None`    | overwrite the input file                |
//! | `true`     | `Some(_)` | [`ConfigError::OutputWithInPlace`]      |
//! | `false`    | `None`    | [`ConfigError::MissingOutput`]          |
//!
//! ## Examples
//!
//! ```rust
//! use template_mask::config::config::TemplateConfig;
//! use mask_luma::Execution;
//!
//! let config = TemplateConfig::new("icon.png", None::<&str>, true, Execution::Parallel);
//! let options = config.to_template_options().unwrap();
//! assert_eq!(options.output, options.input);
//! ```

use std::path::PathBuf;

use mask_luma::Execution;

/// Rejected combinations of command-line choices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("an input path is required")]
    EmptyInput,
    #[error("an output path cannot be combined with in-place mode")]
    OutputWithInPlace,
    #[error("an output path is required unless in-place mode is enabled")]
    MissingOutput,
}

/// User choices for one conversion.
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// Image to read.
    pub input: PathBuf,

    /// Where to write the PNG. Must be `None` in in-place mode.
    pub output: Option<PathBuf>,

    /// Overwrite `input` with the result.
    pub in_place: bool,

    /// Row scheduling for the pixel transform. Both choices give identical output.
    pub execution: Execution,
}

impl TemplateConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: Option<impl Into<PathBuf>>,
        in_place: bool,
        execution: Execution,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.map(Into::into),
            in_place,
            execution,
        }
    }

    /// Checks the output selection rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::EmptyInput);
        }
        match (self.in_place, &self.output) {
            (true, Some(_)) => Err(ConfigError::OutputWithInPlace),
            (false, None) => Err(ConfigError::MissingOutput),
            _ => Ok(()),
        }
    }

    /// Validate and resolve the effective output path.
    pub fn to_template_options(&self) -> Result<crate::TemplateOptions, ConfigError> {
        self.validate()?;
        let output = match &self.output {
            Some(path) => path.clone(),
            None => self.input.clone(),
        };
        Ok(crate::TemplateOptions {
            input: self.input.clone(),
            output,
            execution: self.execution,
        })
    }
}
