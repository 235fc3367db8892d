//! On-disk layout of generated images.
//!
//! Image `i` lives in `<out>/generated_image_<i>/` as `image.png` plus a
//! `details_<tag>.txt` file naming its three expressions. The tag is a short
//! hex fingerprint of the expressions so details files from different runs
//! don't collide when copied into one place.

use crate::error::Result;
use crate::palette::Palette;
use image::RgbImage;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Length of the details-file tag.
pub const TAG_LEN: usize = 25;

/// Image file name inside an image directory.
const IMAGE_FILE: &str = "image.png";

/// Files written for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    /// Directory holding both files.
    pub dir: PathBuf,
    /// The PNG.
    pub image: PathBuf,
    /// The details file.
    pub details: PathBuf,
}

/// Hex fingerprint of `input`, repeated or cut to `len` characters.
///
/// Empty input gives an empty tag.
#[must_use]
pub fn fingerprint(input: &str, len: usize) -> String {
    if input.is_empty() {
        return String::new();
    }
    let mut h: u64 = 0x666;
    for c in input.chars() {
        h = h.wrapping_mul(25).wrapping_add(u64::from(c));
    }
    let hex = format!("{h:x}");
    hex.repeat(len / hex.len() + 1)[..len].to_string()
}

/// Details-file tag for a palette.
#[must_use]
pub fn details_tag(palette: &Palette) -> String {
    let key = format!("({})_({})_({})", palette.red, palette.green, palette.blue);
    fingerprint(&key, TAG_LEN)
}

/// Directory for image `index`.
#[must_use]
pub fn image_dir(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("generated_image_{index}"))
}

/// Details-file path for `palette` inside `dir`.
#[must_use]
pub fn details_path(dir: &Path, palette: &Palette) -> PathBuf {
    dir.join(format!("details_{}.txt", details_tag(palette)))
}

/// Write an image and its details file, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or either file cannot be written.
pub fn save(
    output_dir: &Path,
    index: usize,
    palette: &Palette,
    img: &RgbImage,
) -> Result<SavedImage> {
    let dir = image_dir(output_dir, index);
    fs::create_dir_all(&dir)?;

    let image = dir.join(IMAGE_FILE);
    crate::raster::save_png(img, &image)?;

    let details = details_path(&dir, palette);
    palette.write_details(&details)?;
    info!("wrote {}", details.display());

    Ok(SavedImage {
        dir,
        image,
        details,
    })
}
