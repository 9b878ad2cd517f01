// SPDX-License-Identifier: MIT
//! # mask-luma: Luma-to-Alpha Template Masks
//!
//! This crate turns an RGBA pixel buffer into a "template" mask: every pixel becomes
//! black and its original brightness, inverted, is stored in the alpha channel.
//! Dark source pixels end up opaque, bright ones end up nearly transparent.
//!
//! ## Key Components
//!
//! - [`buffer`]: Strided pixel buffer with layout validation
//! - [`luma`]: Fixed-weight brightness and inverted alpha computation
//! - [`transform`]: In-place transform, sequential or row-parallel via rayon
//!
//! ## Usage Example
//!
//! ```rust
//! use mask_luma::buffer::{PixelBuffer, Size};
//! use mask_luma::transform::{apply_template, Execution};
//!
//! let size = Size { w: 2, h: 1 };
//! let mut buf = PixelBuffer::from_raw(
//!     size,
//!     8,
//!     4,
//!     vec![10, 20, 30, 255, 200, 200, 200, 255],
//! )?;
//!
//! apply_template(&mut buf, Execution::Parallel);
//!
//! assert_eq!(buf.row(0), &[0, 0, 0, 237, 0, 0, 0, 55]);
//! # Ok::<(), mask_luma::buffer::LayoutError>(())
//! ```
//!
//! ## Re-application
//!
//! The transform is not idempotent. Its output is black, so running it a second time
//! computes brightness 0 everywhere and every pixel becomes fully opaque.

pub mod buffer;
pub mod luma;
pub mod transform;

pub use buffer::{LayoutError, PixelBuffer, Size};
pub use transform::{apply_template, Execution};
