//! Per-channel expressions and the details-file format.
//!
//! A details file holds one line per channel:
//!
//! ```text
//! r_exp: sin(pi*x)*y
//! g_exp: cos(x*y)
//! b_exp: pi
//! ```

use crate::error::{ConfigError, PaletteError, SyntaxError};
use crate::expr::{self, Expr, GeneratorConfig};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// A color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Channel {
    /// All channels in file order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Line prefix in a details file, e.g. `r_exp`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Channel::Red => "r_exp",
            Channel::Green => "g_exp",
            Channel::Blue => "b_exp",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// One expression per color channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Red channel.
    pub red: Expr,
    /// Green channel.
    pub green: Expr,
    /// Blue channel.
    pub blue: Expr,
}

impl Palette {
    /// Create a palette from three expressions.
    #[must_use]
    pub fn new(red: Expr, green: Expr, blue: Expr) -> Self {
        Self { red, green, blue }
    }

    /// Generate three independent random expressions.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator configuration is invalid.
    pub fn random<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            red: expr::generate_with(rng, config)?,
            green: expr::generate_with(rng, config)?,
            blue: expr::generate_with(rng, config)?,
        })
    }

    /// Expression for `channel`.
    #[must_use]
    pub fn get(&self, channel: Channel) -> &Expr {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Render as details-file text.
    #[must_use]
    pub fn to_details(&self) -> String {
        let mut out = String::new();
        for channel in Channel::ALL {
            out.push_str(channel.key());
            out.push_str(": ");
            out.push_str(&self.get(channel).to_string());
            out.push('\n');
        }
        out
    }

    /// Parse details-file text.
    ///
    /// Keys may come in any order; lines without a channel key are skipped,
    /// and a repeated key overrides the earlier line.
    ///
    /// # Errors
    ///
    /// Returns an error if a channel is missing or its expression is malformed.
    pub fn from_details(text: &str) -> Result<Self, PaletteError> {
        let mut found: [Option<Expr>; 3] = [None, None, None];

        for line in text.lines() {
            let line = line.trim();
            for (slot, channel) in found.iter_mut().zip(Channel::ALL) {
                let Some(rest) = line
                    .strip_prefix(channel.key())
                    .and_then(|rest| rest.strip_prefix(':'))
                else {
                    continue;
                };
                let offset = line.len() - rest.len();
                let expr = expr::parse(rest).map_err(|source| PaletteError::Syntax {
                    channel,
                    source: shift(source, offset),
                })?;
                *slot = Some(expr);
            }
        }

        let [red, green, blue] = found;
        Ok(Self {
            red: red.ok_or(PaletteError::MissingChannel(Channel::Red))?,
            green: green.ok_or(PaletteError::MissingChannel(Channel::Green))?,
            blue: blue.ok_or(PaletteError::MissingChannel(Channel::Blue))?,
        })
    }

    /// Write a details file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_details(&self, path: &Path) -> Result<(), PaletteError> {
        fs::write(path, self.to_details())?;
        Ok(())
    }

    /// Read a details file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not describe a palette.
    pub fn read_details(path: &Path) -> Result<Self, PaletteError> {
        let text = fs::read_to_string(path)?;
        Self::from_details(&text)
    }
}

/// Move a parser position from the expression text to its (trimmed) details
/// line. Keys are ASCII, so the byte offset equals the character offset.
fn shift(mut err: SyntaxError, offset: usize) -> SyntaxError {
    err.position += offset;
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Expected;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample() -> Palette {
        Palette::new(
            Expr::times(Expr::sin_pi(Expr::VarX), Expr::VarY),
            Expr::cos(Expr::times(Expr::VarX, Expr::VarY)),
            Expr::ConstPi,
        )
    }

    #[test]
    fn test_details_format() {
        assert_eq!(
            sample().to_details(),
            "r_exp: sin(pi*x)*y\ng_exp: cos(x*y)\nb_exp: pi\n"
        );
    }

    #[test]
    fn test_details_text_round_trip() {
        let palette = sample();
        let back = Palette::from_details(&palette.to_details()).unwrap();
        assert_eq!(back.to_details(), palette.to_details());
    }

    #[test]
    fn test_details_any_order_and_noise() {
        let text = "# rendered by hand\n\nb_exp: y\nr_exp: x\n  g_exp:   cos( pi )  \n";
        let palette = Palette::from_details(text).unwrap();
        assert_eq!(palette.red, Expr::VarX);
        assert_eq!(palette.green, Expr::cos(Expr::ConstPi));
        assert_eq!(palette.blue, Expr::VarY);
    }

    #[test]
    fn test_details_missing_channel() {
        let err = Palette::from_details("r_exp: x\nb_exp: y\n").unwrap_err();
        assert!(matches!(err, PaletteError::MissingChannel(Channel::Green)));
    }

    #[test]
    fn test_details_bad_expression() {
        let err = Palette::from_details("r_exp: x\ng_exp: cos(x\nb_exp: y\n").unwrap_err();
        match err {
            PaletteError::Syntax { channel, source } => {
                assert_eq!(channel, Channel::Green);
                assert_eq!(source.expected, Expected::Literal(")"));
                // "g_exp: cos(x" has 12 characters
                assert_eq!(source.position, 12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_details_deeply_nested_expression() {
        let deep = format!("{}x{}", "(".repeat(200_000), ")".repeat(200_000));
        let text = format!("r_exp: {deep}\ng_exp: x\nb_exp: y\n");
        match Palette::from_details(&text).unwrap_err() {
            PaletteError::Syntax { channel, source } => {
                assert_eq!(channel, Channel::Red);
                assert_eq!(source.expected, Expected::Shallower);
                assert_eq!(source.position, "r_exp: ".len() + crate::expr::MAX_NESTING);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_random_palette() {
        let mut rng = SmallRng::seed_from_u64(3);
        let palette = Palette::random(&mut rng, &GeneratorConfig::default()).unwrap();
        let back = Palette::from_details(&palette.to_details()).unwrap();
        assert_eq!(back.to_details(), palette.to_details());
    }

    #[test]
    fn test_channel_keys() {
        let keys: Vec<_> = Channel::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["r_exp", "g_exp", "b_exp"]);
        assert_eq!(Channel::Blue.to_string(), "blue");
    }
}
