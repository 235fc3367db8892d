//! CLI command implementations for Trigart.

pub(crate) mod generate;
pub(crate) mod render;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fmt;

/// Output format for the `generate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<trigart::Error> for CliError {
    fn from(e: trigart::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<trigart::ConfigError> for CliError {
    fn from(e: trigart::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<trigart::PaletteError> for CliError {
    fn from(e: trigart::PaletteError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<trigart::RasterError> for CliError {
    fn from(e: trigart::RasterError) -> Self {
        Self::new(e.to_string())
    }
}

/// Install the logger. `RUST_LOG` wins over the verbosity flag.
pub(crate) fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Size the global rayon pool.
pub(crate) fn configure_threads(threads: Option<usize>) {
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }
}

/// Seed from the clock when the user gave none.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

/// Progress bar over rendered rows, or `None` when disabled.
pub(crate) fn row_progress(enabled: bool, rows: u64) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new(rows);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({per_sec})")
            .expect("valid template")
            .progress_chars("=>-"),
    );
    Some(pb)
}
