//! Common test utilities for the template conversion tests
//!
//! Fixtures are generated on the fly with the `image` crate and written into
//! temporary directories, so tests never depend on checked-in binaries.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// Scratch directory holding generated fixtures.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `pixels` (row-major RGBA) as a PNG named `name`.
    pub fn png(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 4]]) -> PathBuf {
        assert_eq!(pixels.len(), (width * height) as usize);
        let img = RgbaImage::from_fn(width, height, |x, y| Rgba(pixels[(y * width + x) as usize]));
        let path = self.path(name);
        img.save(&path).expect("write fixture png");
        path
    }

    /// A `width × height` PNG with a deterministic color pattern.
    pub fn pattern_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let pixels: Vec<[u8; 4]> = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                [
                    (x * 13 + y * 7) as u8,
                    (x * 5 + y * 17) as u8,
                    (x * 29 + y * 3) as u8,
                    (x * 11 + y) as u8,
                ]
            })
            .collect();
        self.png(name, width, height, &pixels)
    }
}

/// Decode a PNG from disk as RGBA8.
pub fn read_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("decode output").into_rgba8()
}
