//! Error types for parsing, configuration, details files and rendering.

use crate::expr::MAX_NESTING;
use crate::palette::Channel;
use std::fmt;
use std::io;

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A fixed literal such as `sin(`, `pi` or `)`.
    Literal(&'static str),
    /// The start of a term: `sin(`, `cos(`, `x`, `y`, `pi` or `(`.
    Term,
    /// End of input after a complete expression.
    End,
    /// No further group, because nesting reached [`MAX_NESTING`].
    Shallower,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(lit) => write!(f, "'{lit}'"),
            Expected::Term => write!(f, "a term"),
            Expected::End => write!(f, "end of input"),
            Expected::Shallower => write!(f, "at most {MAX_NESTING} nested groups"),
        }
    }
}

/// The first point at which expression text violates the grammar.
///
/// `position` is a character index into the text as the caller wrote it,
/// whitespace included. `found` is `None` when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    /// Character index of the offending input.
    pub position: usize,
    /// The offending character, or `None` at end of input.
    pub found: Option<char>,
    /// What would have been accepted instead.
    pub expected: Expected,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.expected, self.found) {
            (Expected::Shallower, _) => write!(
                f,
                "expressions nest deeper than {MAX_NESTING} levels at index {}",
                self.position
            ),
            (Expected::Literal(_), Some(c)) => write!(
                f,
                "expected {} at index {} but found '{c}'",
                self.expected, self.position
            ),
            (Expected::Literal(_), None) => write!(
                f,
                "expected {} at index {} but found end of input",
                self.expected, self.position
            ),
            (_, Some(c)) => write!(f, "unexpected character at index {}: '{c}'", self.position),
            (_, None) => write!(f, "unexpected end of input at index {}", self.position),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Invalid generator or canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Continuation probability outside `[0, 1)` (or NaN).
    #[error("probability must be within [0, 1), got {0}")]
    InvalidProbability(f64),
    /// Canvas with a zero dimension.
    #[error("canvas must be at least 1x1 pixels, got {width}x{height}")]
    EmptyCanvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Zero pixels per unit would divide by zero in the coordinate mapping.
    #[error("pixels per unit must be positive")]
    ZeroScale,
}

/// Failure reading or writing a details file.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// No `<c>_exp:` line for a channel.
    #[error("details file has no {0} expression")]
    MissingChannel(Channel),
    /// A channel's expression text does not parse.
    #[error("{channel} expression: {source}")]
    Syntax {
        /// Channel whose expression failed.
        channel: Channel,
        /// Underlying parser error.
        #[source]
        source: SyntaxError,
    },
    /// Reading or writing the file failed.
    #[error("details file I/O: {0}")]
    Io(#[from] io::Error),
}

/// Failure producing an image.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Canvas settings are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Encoding or saving the PNG failed.
    #[error("image output: {0}")]
    Image(#[from] image::ImageError),
}

/// Failure saving a rendered image and its details file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Details file problem.
    #[error(transparent)]
    Palette(#[from] PaletteError),
    /// Rendering problem.
    #[error(transparent)]
    Raster(#[from] RasterError),
    /// Filesystem problem outside the details file itself.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
