//! Per-pixel evaluation of a [`Palette`] into an RGB image.
//!
//! Pixel `(px, py)` maps to `x = (px - width/2) / pixels_per_unit` and
//! `y = (py - height/2) / pixels_per_unit`, so the origin sits at the image
//! centre. Each channel value `z` becomes `round(z * 127.5 + 127.5)`,
//! clamped to `0..=255`.
//!
//! Rows are rendered in parallel with rayon. Workers only read the palette.

// Intensity mapping converts a clamped f64 into u8
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::error::{ConfigError, RasterError};
use crate::palette::Palette;
use image::{Rgb, RgbImage};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixels per unit of `x`/`y`.
    pub pixels_per_unit: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 2048,
            height: 2048,
            pixels_per_unit: 256,
        }
    }
}

impl RenderConfig {
    /// Square canvas of `size` pixels.
    #[must_use]
    pub fn square(size: u32, pixels_per_unit: u32) -> Self {
        Self {
            width: size,
            height: size,
            pixels_per_unit,
        }
    }

    /// Check the canvas is non-empty and the scale is positive.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.pixels_per_unit == 0 {
            return Err(ConfigError::ZeroScale);
        }
        Ok(())
    }

    /// Map a pixel to its `(x, y)` coordinates.
    #[must_use]
    pub fn to_coords(&self, px: u32, py: u32) -> (f64, f64) {
        let scale = f64::from(self.pixels_per_unit);
        let x = (f64::from(px) - f64::from(self.width) / 2.0) / scale;
        let y = (f64::from(py) - f64::from(self.height) / 2.0) / scale;
        (x, y)
    }
}

/// Map an expression value to an 8-bit intensity.
#[must_use]
pub fn intensity(z: f64) -> u8 {
    (z * 127.5 + 127.5).round().clamp(0.0, 255.0) as u8
}

/// Color of a single pixel.
#[must_use]
pub fn pixel_color(palette: &Palette, config: &RenderConfig, px: u32, py: u32) -> Rgb<u8> {
    let (x, y) = config.to_coords(px, py);
    Rgb([
        intensity(palette.red.eval(x, y)),
        intensity(palette.green.eval(x, y)),
        intensity(palette.blue.eval(x, y)),
    ])
}

/// Render a palette.
///
/// # Errors
///
/// Returns an error if the canvas settings are invalid.
pub fn rasterize(palette: &Palette, config: &RenderConfig) -> Result<RgbImage, RasterError> {
    rasterize_with_progress(palette, config, || {})
}

/// Render a palette, calling `on_row` after each finished row.
///
/// `on_row` runs on worker threads, in no particular row order.
///
/// # Errors
///
/// Returns an error if the canvas settings are invalid.
pub fn rasterize_with_progress<F>(
    palette: &Palette,
    config: &RenderConfig,
    on_row: F,
) -> Result<RgbImage, RasterError>
where
    F: Fn() + Sync,
{
    config.validate()?;
    let start = Instant::now();

    let mut img = RgbImage::new(config.width, config.height);
    let row_len = config.width as usize * 3;
    let buf: &mut [u8] = &mut img;

    buf.par_chunks_mut(row_len)
        .zip(0..config.height)
        .for_each(|(row, py)| {
            for (pixel, px) in row.chunks_exact_mut(3).zip(0..config.width) {
                pixel.copy_from_slice(&pixel_color(palette, config, px, py).0);
            }
            on_row();
        });

    info!(
        "rendered {}x{} image in {:.2}s",
        config.width,
        config.height,
        start.elapsed().as_secs_f64()
    );
    Ok(img)
}

/// Save an image as PNG.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), RasterError> {
    img.save_with_format(path, image::ImageFormat::Png)?;
    info!("wrote {}", path.display());
    Ok(())
}
