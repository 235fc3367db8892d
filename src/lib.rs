// Allow unwrap and float literal comparisons in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
//! Trigart: procedural images from random trigonometric expressions.
//!
//! Each image is described by three expressions over the pixel coordinates
//! `x` and `y`, one per color channel, built from `sin`, `cos`, `pi` and `*`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ CLI: generate / render / validate    │
//! ├──────────────────┬───────────────────┤
//! │ Raster (rayon)   │ Output (PNG +     │
//! │                  │ details file)     │
//! ├──────────────────┴───────────────────┤
//! │ Palette: one expression per channel  │
//! ├──────────────────────────────────────┤
//! │ Expr: generate, print, parse, eval   │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use trigart::expr::{parse, random};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let expr = random(&mut rng);
//! let text = expr.to_string();
//! assert_eq!(parse(&text).unwrap().to_string(), text);
//! ```

pub mod error;
pub mod expr;
pub mod output;
pub mod palette;
pub mod raster;

pub use error::{ConfigError, Error, Expected, PaletteError, RasterError, Result, SyntaxError};
pub use expr::{parse, Expr, GeneratorConfig};
pub use palette::{Channel, Palette};
pub use raster::RenderConfig;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_round_trip() {
        let expr: Expr = "sin(x*y)*cos(x*pi*cos(y))".parse().unwrap();
        assert_eq!(expr.to_string(), "sin(x*y)*cos(x*pi*cos(y))");
        assert_eq!(parse("pi").unwrap(), Expr::ConstPi);
    }
}
