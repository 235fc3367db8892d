//! Render command implementation.

use super::output::format_image_text;
use super::CliError;
use std::path::PathBuf;
use trigart::raster::rasterize_with_progress;
use trigart::{output, Palette, RenderConfig};

/// Options for the render command.
#[derive(Debug)]
pub(crate) struct RenderOptions {
    pub(crate) details: PathBuf,
    pub(crate) size: u32,
    pub(crate) pixels_per_unit: u32,
    pub(crate) output: PathBuf,
    pub(crate) index: usize,
    pub(crate) threads: Option<usize>,
    pub(crate) progress: bool,
}

/// Execute the render command.
///
/// # Errors
///
/// Returns an error if the details file is unreadable or malformed, or the
/// image cannot be written.
pub(crate) fn execute(opts: &RenderOptions) -> Result<(), CliError> {
    let render = RenderConfig::square(opts.size, opts.pixels_per_unit);
    render.validate()?;

    let palette = Palette::read_details(&opts.details).map_err(|e| {
        CliError::new(format!("Failed to load {}: {e}", opts.details.display()))
    })?;

    super::configure_threads(opts.threads);

    println!("Processing image from {}...", opts.details.display());
    let pb = super::row_progress(opts.progress, u64::from(render.height));
    let img = rasterize_with_progress(&palette, &render, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let saved = output::save(&opts.output, opts.index, &palette, &img)?;
    print!("{}", format_image_text(opts.index, &saved, &palette));
    println!("Finished processing image.");

    Ok(())
}
