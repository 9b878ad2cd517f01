// SPDX-License-Identifier: MIT
//! # Brightness and Inverted Alpha
//!
//! Brightness uses the fixed Rec. 601 luma weights over 8-bit channel values cast to `f64`,
//! summed left to right:
//!
//! ```text
//! brightness = 0.299 * R + 0.587 * G + 0.114 * B
//! ```
//!
//! The inverted alpha truncates brightness to `u8` first and then subtracts from 255.
//! Truncation is deliberate: `255 - round(brightness)` differs by one at fractional
//! boundaries and would change existing outputs.

/// Red weight.
pub const WEIGHT_R: f64 = 0.299;
/// Green weight.
pub const WEIGHT_G: f64 = 0.587;
/// Blue weight.
pub const WEIGHT_B: f64 = 0.114;

/// Perceptual brightness of an 8-bit RGB triple, in `0.0..=255.0`.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    WEIGHT_R * f64::from(r) + WEIGHT_G * f64::from(g) + WEIGHT_B * f64::from(b)
}

/// Alpha for a template pixel: `255 - (brightness as u8)`.
///
/// The `as` cast truncates toward zero and saturates, so the subtraction never underflows.
#[inline]
pub fn inverted_alpha(r: u8, g: u8, b: u8) -> u8 {
    255 - brightness(r, g, b) as u8
}
