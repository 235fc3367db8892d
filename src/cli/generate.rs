//! Generate command implementation.

use super::output::{format_image_text, JsonGenerateResult, JsonImage};
use super::{CliError, OutputFormat};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use trigart::raster::rasterize_with_progress;
use trigart::{output, GeneratorConfig, Palette, RenderConfig};

/// Options for the generate command.
#[derive(Debug)]
pub(crate) struct GenerateOptions {
    pub(crate) size: u32,
    pub(crate) pixels_per_unit: u32,
    pub(crate) count: usize,
    pub(crate) seed: Option<u64>,
    pub(crate) probability: f64,
    pub(crate) output: PathBuf,
    pub(crate) threads: Option<usize>,
    pub(crate) format: OutputFormat,
    pub(crate) progress: bool,
}

/// Execute the generate command.
///
/// # Errors
///
/// Returns an error if the settings are invalid or an image cannot be written.
pub(crate) fn execute(opts: &GenerateOptions) -> Result<(), CliError> {
    let render = RenderConfig::square(opts.size, opts.pixels_per_unit);
    render.validate()?;
    let generator = GeneratorConfig {
        probability: opts.probability,
        ..GeneratorConfig::default()
    };
    generator.validate()?;

    super::configure_threads(opts.threads);

    let seed = opts.seed.unwrap_or_else(super::clock_seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let text = opts.format == OutputFormat::Text;
    let pb = super::row_progress(
        opts.progress,
        u64::from(render.height) * opts.count as u64,
    );

    let start = Instant::now();
    let mut images = Vec::with_capacity(opts.count);

    for index in 0..opts.count {
        if text && pb.is_none() {
            println!("Processing image {}/{}...", index + 1, opts.count);
        }

        let palette = Palette::random(&mut rng, &generator)?;
        let img = rasterize_with_progress(&palette, &render, || {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        })?;
        let saved = output::save(&opts.output, index, &palette, &img)?;

        if text {
            if let Some(pb) = &pb {
                pb.println(format_image_text(index, &saved, &palette).trim_end());
            } else {
                print!("{}", format_image_text(index, &saved, &palette));
            }
        }
        images.push(JsonImage::new(index, &saved, &palette));
    }

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    match opts.format {
        OutputFormat::Text => {
            println!();
            println!(
                "Finished processing {} images in {:.2}s (seed: {seed}).",
                opts.count,
                start.elapsed().as_secs_f64()
            );
        }
        OutputFormat::Json => {
            let json_result = JsonGenerateResult {
                seed,
                generator,
                render,
                images,
            };
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
