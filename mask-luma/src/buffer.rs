// SPDX-License-Identifier: MIT
//! # Strided Pixel Buffer
//!
//! A [`PixelBuffer`] owns `width × height` pixels laid out row-major, each row starting
//! `stride` bytes after the previous one. Rows may carry trailing alignment padding, so
//! `stride` can exceed `width * bytes_per_pixel`.
//!
//! Every constructor validates the layout, which makes the following invariants hold for
//! the whole lifetime of a buffer:
//!
//! - `bytes_per_pixel` is 3 (RGB) or 4 (RGBA)
//! - `stride >= width * bytes_per_pixel`
//! - `data.len() == stride * height`

use std::borrow::Cow;
use std::collections::TryReserveError;

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    /// Pixel count, computed in 64 bits so it cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

#[derive(Debug)]
pub enum LayoutError {
    UnsupportedPixelWidth(usize),
    ZeroAlignment,
    StrideTooSmall { stride: usize, min: usize },
    LengthMismatch { expected: usize, actual: usize },
    Overflow,
    Alloc(TryReserveError),
}

impl From<TryReserveError> for LayoutError { fn from(e: TryReserveError) -> Self { Self::Alloc(e) } }

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::UnsupportedPixelWidth(bpp) => write!(f, "Unsupported pixel width: {} bytes (expected 3 or 4)", bpp),
            LayoutError::ZeroAlignment => write!(f, "Row alignment must be greater than 0"),
            LayoutError::StrideTooSmall { stride, min } => write!(f, "Stride {} is smaller than the packed row size {}", stride, min),
            LayoutError::LengthMismatch { expected, actual } => write!(f, "Buffer holds {} bytes, layout requires {}", actual, expected),
            LayoutError::Overflow => write!(f, "Buffer size overflows the address space"),
            LayoutError::Alloc(e) => write!(f, "Buffer allocation failed: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

/// Owned, strided pixel storage.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    data: Vec<u8>,
    size: Size,
    stride: usize,
    bytes_per_pixel: usize,
}

/// Smallest stride `>= width * bytes_per_pixel` that is a multiple of `row_align`.
pub fn aligned_stride(width: u32, bytes_per_pixel: usize, row_align: usize) -> Result<usize, LayoutError> {
    if row_align == 0 {
        return Err(LayoutError::ZeroAlignment);
    }
    let tight = (width as usize).checked_mul(bytes_per_pixel).ok_or(LayoutError::Overflow)?;
    let padded = tight.checked_add(row_align - 1).ok_or(LayoutError::Overflow)?;
    Ok(padded / row_align * row_align)
}

fn check_pixel_width(bytes_per_pixel: usize) -> Result<(), LayoutError> {
    match bytes_per_pixel {
        3 | 4 => Ok(()),
        other => Err(LayoutError::UnsupportedPixelWidth(other)),
    }
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer whose rows are padded to `row_align` bytes.
    ///
    /// Allocation goes through `try_reserve_exact`, so an oversized request surfaces as
    /// [`LayoutError::Alloc`] instead of aborting the process.
    pub fn new_transparent(size: Size, bytes_per_pixel: usize, row_align: usize) -> Result<Self, LayoutError> {
        check_pixel_width(bytes_per_pixel)?;
        let stride = aligned_stride(size.w, bytes_per_pixel, row_align)?;
        let len = stride.checked_mul(size.h as usize).ok_or(LayoutError::Overflow)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0);

        Ok(Self { data, size, stride, bytes_per_pixel })
    }

    /// Wrap existing bytes, validating them against the requested layout.
    pub fn from_raw(size: Size, stride: usize, bytes_per_pixel: usize, data: Vec<u8>) -> Result<Self, LayoutError> {
        check_pixel_width(bytes_per_pixel)?;
        let min = (size.w as usize).checked_mul(bytes_per_pixel).ok_or(LayoutError::Overflow)?;
        if stride < min {
            return Err(LayoutError::StrideTooSmall { stride, min });
        }
        let expected = stride.checked_mul(size.h as usize).ok_or(LayoutError::Overflow)?;
        if data.len() != expected {
            return Err(LayoutError::LengthMismatch { expected, actual: data.len() });
        }
        Ok(Self { data, size, stride, bytes_per_pixel })
    }

    pub fn size(&self) -> Size { self.size }
    pub fn width(&self) -> u32 { self.size.w }
    pub fn height(&self) -> u32 { self.size.h }
    pub fn stride(&self) -> usize { self.stride }
    pub fn bytes_per_pixel(&self) -> usize { self.bytes_per_pixel }

    /// Bytes of pixel data per row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        self.size.w as usize * self.bytes_per_pixel
    }

    /// Whole backing store, padding included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel bytes of row `y`, without padding. Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.row_bytes()]
    }

    /// Mutable pixel bytes of row `y`, without padding. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let row_bytes = self.row_bytes();
        &mut self.data[start..start + row_bytes]
    }

    /// Bytes of the pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let bpp = self.bytes_per_pixel;
        let start = x as usize * bpp;
        &self.row(y)[start..start + bpp]
    }

    /// Tightly packed pixel rows. Borrows when the buffer has no row padding.
    pub fn packed(&self) -> Cow<'_, [u8]> {
        let row_bytes = self.row_bytes();
        if self.stride == row_bytes {
            return Cow::Borrowed(&self.data);
        }
        if row_bytes == 0 {
            return Cow::Owned(Vec::new());
        }

        let mut packed = vec![0u8; row_bytes * self.size.h as usize];
        packed
            .chunks_exact_mut(row_bytes)
            .zip(self.data.chunks_exact(self.stride))
            .for_each(|(dst, src)| dst.copy_from_slice(&src[..row_bytes]));
        Cow::Owned(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_stride_rounds_up() {
        assert_eq!(aligned_stride(2, 4, 16).unwrap(), 16);
        assert_eq!(aligned_stride(4, 4, 16).unwrap(), 16);
        assert_eq!(aligned_stride(5, 4, 16).unwrap(), 32);
        assert_eq!(aligned_stride(3, 3, 1).unwrap(), 9);
        assert_eq!(aligned_stride(0, 4, 16).unwrap(), 0);
        assert!(matches!(aligned_stride(3, 4, 0), Err(LayoutError::ZeroAlignment)));
    }

    #[test]
    fn test_new_transparent_is_zeroed() {
        let buf = PixelBuffer::new_transparent(Size { w: 3, h: 2 }, 4, 16).unwrap();
        assert_eq!(buf.stride(), 16);
        assert_eq!(buf.as_bytes().len(), 32);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(buf.row(1).len(), 12);
    }

    #[test]
    fn test_from_raw_rejects_bad_layouts() {
        let size = Size { w: 2, h: 2 };
        assert!(matches!(
            PixelBuffer::from_raw(size, 4, 4, vec![0; 8]),
            Err(LayoutError::StrideTooSmall { stride: 4, min: 8 })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(size, 8, 4, vec![0; 15]),
            Err(LayoutError::LengthMismatch { expected: 16, actual: 15 })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(size, 8, 2, vec![0; 16]),
            Err(LayoutError::UnsupportedPixelWidth(2))
        ));
    }

    #[test]
    fn test_packed_strips_padding() {
        let data = vec![
            1, 2, 3, 4, 9, 9, 9, 9, //
            5, 6, 7, 8, 9, 9, 9, 9,
        ];
        let buf = PixelBuffer::from_raw(Size { w: 1, h: 2 }, 8, 4, data).unwrap();
        assert_eq!(&*buf.packed(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(buf.pixel(0, 1), &[5, 6, 7, 8]);
    }

    #[test]
    fn test_packed_zero_width_with_padding() {
        let buf = PixelBuffer::from_raw(Size { w: 0, h: 3 }, 16, 4, vec![5; 48]).unwrap();
        assert!(buf.packed().is_empty());
    }

    #[test]
    fn test_packed_borrows_tight_buffers() {
        let buf = PixelBuffer::from_raw(Size { w: 1, h: 1 }, 4, 4, vec![1, 2, 3, 4]).unwrap();
        assert!(matches!(buf.packed(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_area_does_not_overflow() {
        let size = Size { w: u32::MAX, h: u32::MAX };
        assert_eq!(size.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
        assert_eq!(Size { w: 640, h: 480 }.to_string(), "640x480");
    }
}
