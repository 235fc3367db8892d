//! Output formatting utilities for CLI.

use serde::Serialize;
use trigart::output::SavedImage;
use trigart::{GeneratorConfig, Palette, RenderConfig};

/// JSON-serializable result of a `generate` run.
#[derive(Debug, Serialize)]
pub(super) struct JsonGenerateResult {
    /// Seed the run started from.
    pub(super) seed: u64,
    /// Generator settings used for every palette.
    pub(super) generator: GeneratorConfig,
    /// Canvas settings used for every image.
    pub(super) render: RenderConfig,
    /// One entry per image.
    pub(super) images: Vec<JsonImage>,
}

/// JSON-serializable description of one image.
#[derive(Debug, Serialize)]
pub(super) struct JsonImage {
    /// Image index.
    pub(super) index: usize,
    /// PNG path.
    pub(super) image: String,
    /// Details file path.
    pub(super) details: String,
    /// Channel expressions in canonical text.
    pub(super) palette: Palette,
    /// Node counts per channel (red, green, blue).
    pub(super) nodes: [usize; 3],
}

impl JsonImage {
    /// Create from a saved image and its palette.
    pub(super) fn new(index: usize, saved: &SavedImage, palette: &Palette) -> Self {
        Self {
            index,
            image: saved.image.display().to_string(),
            details: saved.details.display().to_string(),
            palette: palette.clone(),
            nodes: [
                palette.red.node_count(),
                palette.green.node_count(),
                palette.blue.node_count(),
            ],
        }
    }
}

/// Format one saved image as human-readable text.
pub(super) fn format_image_text(index: usize, saved: &SavedImage, palette: &Palette) -> String {
    let mut output = String::new();

    output.push_str(&format!("Image {index}: {}\n", saved.image.display()));
    output.push_str(&format!("  Details: {}\n", saved.details.display()));
    for line in palette.to_details().lines() {
        output.push_str(&format!("  {line}\n"));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use trigart::Expr;

    #[test]
    fn test_json_result_echoes_settings() {
        let palette = Palette::new(
            Expr::sin_pi(Expr::VarX),
            Expr::times(Expr::VarX, Expr::VarY),
            Expr::ConstPi,
        );
        let saved = SavedImage {
            dir: PathBuf::from("out/generated_image_0"),
            image: PathBuf::from("out/generated_image_0/image.png"),
            details: PathBuf::from("out/generated_image_0/details_abc.txt"),
        };
        let result = JsonGenerateResult {
            seed: 42,
            generator: GeneratorConfig::default(),
            render: RenderConfig::square(512, 128),
            images: vec![JsonImage::new(0, &saved, &palette)],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["seed"], 42);
        assert_eq!(json["generator"]["probability"], 0.99);
        assert_eq!(json["generator"]["max_depth"], 64);
        assert_eq!(json["render"]["width"], 512);
        assert_eq!(json["render"]["height"], 512);
        assert_eq!(json["render"]["pixels_per_unit"], 128);

        let image = &json["images"][0];
        assert_eq!(image["palette"]["red"], "sin(pi*x)");
        assert_eq!(image["palette"]["green"], "x*y");
        assert_eq!(image["nodes"][1], 3);
    }
}
