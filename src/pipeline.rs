//! # Conversion Pipeline
//!
//! Load → transform → encode → write, strictly in that order. The transform may fan out
//! across rayon workers, but it joins before encoding starts, so the encoder always sees a
//! fully transformed buffer.

use std::path::Path;
use std::time::Instant;

use mask_luma::apply_template;

use crate::decode::load_pixel_buffer;
use crate::encode::{encode_png, write_atomically};
use crate::error::TemplateResult;
use crate::{ConversionReport, TemplateOptions};

macro_rules! timed {
    ($name:expr, $task:expr) => {{
        let now = Instant::now();
        let res = $task;
        log::debug!("{}: {:.2}ms", $name, now.elapsed().as_micros() as f64 / 1000.0);
        res
    }};
}

/// Run one full conversion.
pub fn run(options: &TemplateOptions) -> TemplateResult<ConversionReport> {
    run_with(options, write_atomically)
}

/// Run one full conversion, persisting the encoded PNG through `write`.
pub fn run_with<W>(options: &TemplateOptions, write: W) -> TemplateResult<ConversionReport>
where
    W: FnOnce(&[u8], &Path) -> TemplateResult<()>,
{
    warn_on_extension(&options.output);

    let (mut buf, dimensions) = timed!("Loading", load_pixel_buffer(&options.input))?;
    timed!("Transforming", apply_template(&mut buf, options.execution));
    let bytes = timed!("Encoding", encode_png(&buf))?;
    drop(buf);
    timed!("Writing", write(&bytes, &options.output))?;

    Ok(ConversionReport {
        input: options.input.clone(),
        output: options.output.clone(),
        dimensions,
        bytes_written: bytes.len(),
        in_place: options.is_in_place(),
    })
}

fn warn_on_extension(output: &Path) {
    let is_png = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        log::warn!("{} does not end in .png; writing PNG data anyway", output.display());
    }
}
