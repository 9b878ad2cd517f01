//! # Encoder / Writer
//!
//! Serializes a transformed [`PixelBuffer`] to PNG and persists it.
//!
//! Encoding finishes entirely in memory before the destination is touched. The bytes then
//! go to a temporary file in the destination's directory, are synced, and the temporary
//! file is renamed over the destination. A failure at any point leaves the destination
//! either fully old or fully new, which keeps in-place conversions safe.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use mask_luma::PixelBuffer;

use crate::error::{TemplateError, TemplateResult};

/// Encode `buf` as PNG. Row padding is stripped; alpha is stored losslessly.
pub fn encode_png(buf: &PixelBuffer) -> TemplateResult<Vec<u8>> {
    let color = match buf.bytes_per_pixel() {
        4 => ExtendedColorType::Rgba8,
        3 => ExtendedColorType::Rgb8,
        other => {
            return Err(TemplateError::encode(
                format!("{}-byte pixels (unsupported buffer shape)", other),
                None,
            ));
        }
    };

    let packed = buf.packed();
    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Default, FilterType::Adaptive)
        .write_image(&packed, buf.width(), buf.height(), color)
        .map_err(|e| TemplateError::encode(format!("{} buffer as PNG", buf.size()), Some(e)))?;

    Ok(out)
}

/// Replace `path` with `bytes` via a synced temporary file and an atomic rename.
///
/// An existing destination is resolved through symlinks first, so a linked asset is
/// updated rather than replaced by a regular file. Existing permissions are carried
/// over; a new file gets the same umask-filtered mode a plain `fs::write` would give.
pub fn write_atomically(bytes: &[u8], path: &Path) -> TemplateResult<()> {
    write_atomically_with(bytes, path, |file, bytes| file.write_all(bytes))
}

/// [`write_atomically`] with a custom `fill` step that streams `bytes` into the
/// temporary file. If `fill` fails, the temporary file is removed and `path` is untouched.
pub fn write_atomically_with<F>(bytes: &[u8], path: &Path, fill: F) -> TemplateResult<()>
where
    F: FnOnce(&mut File, &[u8]) -> io::Result<()>,
{
    let target = match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(_) => path.to_path_buf(),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".templatize-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| TemplateError::write(path, e))?;

    fill(tmp.as_file_mut(), bytes).map_err(|e| TemplateError::write(path, e))?;
    tmp.as_file().sync_all().map_err(|e| TemplateError::write(path, e))?;

    if let Ok(meta) = std::fs::metadata(&target) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| TemplateError::write(path, e))?;
        }
    }

    tmp.persist(&target).map_err(|e| TemplateError::write(path, e.error))?;
    Ok(())
}
