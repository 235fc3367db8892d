//! Trigart CLI - generate and re-render expression art.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use trigart::expr::DEFAULT_PROBABILITY;

/// Trigart - procedural art from random trigonometric expressions
#[derive(Parser, Debug)]
#[command(name = "trigart")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate random expressions and render them
    Generate {
        /// Image width and height in pixels
        #[arg(short, long, default_value = "2048")]
        size: u32,

        /// Pixels per unit of x and y
        #[arg(short, long, default_value = "256")]
        pixels_per_unit: u32,

        /// Number of images to generate
        #[arg(short = 'c', long, default_value = "3")]
        count: usize,

        /// Random seed (default: random)
        #[arg(long)]
        seed: Option<u64>,

        /// Continuation probability at the root of each expression, in [0, 1)
        #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
        probability: f64,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Re-render an image from a details file
    Render {
        /// Details file with r_exp, g_exp and b_exp lines
        #[arg(required = true)]
        details: PathBuf,

        /// Image width and height in pixels
        #[arg(short, long, default_value = "2048")]
        size: u32,

        /// Pixels per unit of x and y
        #[arg(short, long, default_value = "256")]
        pixels_per_unit: u32,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Index of the generated_image_<N> directory to write
        #[arg(long, default_value = "0")]
        index: usize,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Check expressions and print their canonical form
    Validate {
        /// Expressions to check
        #[arg(required = true)]
        exprs: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Generate {
            size,
            pixels_per_unit,
            count,
            seed,
            probability,
            output,
            threads,
            format,
            progress,
        } => cli::generate::execute(&cli::generate::GenerateOptions {
            size,
            pixels_per_unit,
            count,
            seed,
            probability,
            output,
            threads,
            format,
            progress,
        }),

        Commands::Render {
            details,
            size,
            pixels_per_unit,
            output,
            index,
            threads,
            progress,
        } => cli::render::execute(&cli::render::RenderOptions {
            details,
            size,
            pixels_per_unit,
            output,
            index,
            threads,
            progress,
        }),

        Commands::Validate { exprs } => cli::validate::execute(&exprs),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
