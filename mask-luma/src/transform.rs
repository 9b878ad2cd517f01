// SPDX-License-Identifier: MIT
//! # In-Place Template Transform
//!
//! Every pixel is rewritten to black RGB with the inverted brightness in alpha. Pixels have
//! no dependency on each other, so rows are the unit of work: the sequential path walks
//! them in order and the parallel path hands each row to rayon. Both paths run the same
//! row kernel and produce byte-identical buffers.
//!
//! Row padding (bytes past `width * bytes_per_pixel`) is never read or written.

use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::luma::inverted_alpha;

/// How rows are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// One row after another on the calling thread.
    Sequential,
    /// One rayon task per row on the global pool; joined before returning.
    #[default]
    Parallel,
}

/// Transform `buf` in place.
///
/// # Panics
///
/// Panics if the backing store is shorter than `stride * height`. [`PixelBuffer`]
/// constructors rule this out, so a panic here means a broken invariant.
pub fn apply_template(buf: &mut PixelBuffer, execution: Execution) {
    let stride = buf.stride();
    let rows = buf.height() as usize;
    let row_bytes = buf.row_bytes();
    let bpp = buf.bytes_per_pixel();

    let data = buf.as_bytes_mut();
    assert!(
        data.len() >= stride * rows,
        "pixel buffer holds {} bytes, layout needs {}",
        data.len(),
        stride * rows
    );

    // Zero-width or zero-height images have nothing to do, and a zero chunk size would panic.
    if stride == 0 || rows == 0 {
        return;
    }

    let data = &mut data[..stride * rows];
    match execution {
        Execution::Sequential => data
            .chunks_mut(stride)
            .for_each(|row| template_row(&mut row[..row_bytes], bpp)),
        Execution::Parallel => data
            .par_chunks_mut(stride)
            .for_each(|row| template_row(&mut row[..row_bytes], bpp)),
    }
}

/// Row kernel shared by both execution paths. `row` holds exactly the row's pixels.
#[inline]
pub fn template_row(row: &mut [u8], bytes_per_pixel: usize) {
    for px in row.chunks_exact_mut(bytes_per_pixel) {
        let alpha = inverted_alpha(px[0], px[1], px[2]);
        px[0] = 0;
        px[1] = 0;
        px[2] = 0;
        if bytes_per_pixel >= 4 {
            px[3] = alpha;
        }
    }
}
