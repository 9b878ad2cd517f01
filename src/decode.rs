//! # Decoder / Loader
//!
//! Reads an encoded image from disk into a fresh, row-aligned RGBA8 [`PixelBuffer`].
//!
//! The working buffer starts as transparent black and the decoded pixels are copied over it
//! row by row. Nothing is blended against a background, so transparent source pixels keep
//! alpha 0. Any format the `image` crate can decode is accepted; inputs with fewer channels
//! or deeper samples are converted to 8-bit RGBA first.
//!
//! ## Representation Selection
//!
//! When a file carries several representations of the same picture, the one with the
//! greatest pixel area wins (the first one on ties). `image` decoders expose the chosen
//! representation directly (the ICO decoder already picks its largest entry), and
//! [`largest_representation`] applies the same rule to whatever candidates are reported.

use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageError, ImageReader, RgbaImage};
use mask_luma::{PixelBuffer, Size};

use crate::error::{TemplateError, TemplateResult};

/// Pixel extents of the chosen representation.
pub type ImageDimensions = Size;

/// Row alignment of the working buffer, in bytes.
pub const ROW_ALIGNMENT: usize = 16;

const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Load `path` into a transparent-initialized RGBA8 buffer.
pub fn load_pixel_buffer(path: &Path) -> TemplateResult<(PixelBuffer, ImageDimensions)> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| TemplateError::load(path, ImageError::IoError(e)))?;
    let decoder = reader.into_decoder().map_err(|e| TemplateError::load(path, e))?;

    let (w, h) = decoder.dimensions();
    let dims = largest_representation(&[Size { w, h }]).ok_or_else(|| TemplateError::dimension(path))?;
    log::debug!("{}: decoding {} representation", path.display(), dims);

    let image = DynamicImage::from_decoder(decoder).map_err(|e| TemplateError::load(path, e))?;
    let rgba = image.into_rgba8();
    let buf = render_rgba(path, &rgba, dims)?;

    Ok((buf, dims))
}

/// The candidate with the greatest non-zero area; the first one wins ties.
pub fn largest_representation(candidates: &[ImageDimensions]) -> Option<ImageDimensions> {
    candidates
        .iter()
        .copied()
        .filter(|size| size.area() > 0)
        .fold(None, |best: Option<Size>, size| match best {
            Some(b) if b.area() >= size.area() => Some(b),
            _ => Some(size),
        })
}

/// Copy decoded RGBA8 pixels into a new row-aligned working buffer of size `dims`.
pub fn render_rgba(path: &Path, rgba: &RgbaImage, dims: ImageDimensions) -> TemplateResult<PixelBuffer> {
    let (src_w, src_h) = rgba.dimensions();
    if (src_w, src_h) != (dims.w, dims.h) {
        return Err(TemplateError::render(
            path,
            format!("decoded {}x{} pixels, expected {}", src_w, src_h, dims),
        ));
    }

    let src = rgba.as_raw();
    let tight_row_bytes = dims.w as usize * RGBA_BYTES_PER_PIXEL;
    if src.len() != tight_row_bytes * dims.h as usize {
        return Err(TemplateError::buffer_access(
            path,
            format!("{} sample bytes for a {} image", src.len(), dims),
        ));
    }

    let mut buf = PixelBuffer::new_transparent(dims, RGBA_BYTES_PER_PIXEL, ROW_ALIGNMENT)
        .map_err(|e| TemplateError::bitmap_creation(dims.w, dims.h, e))?;

    if tight_row_bytes > 0 {
        for (y, src_row) in src.chunks_exact(tight_row_bytes).enumerate() {
            buf.row_mut(y as u32).copy_from_slice(src_row);
        }
    }

    Ok(buf)
}
