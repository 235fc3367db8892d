//! Expression trees over the pixel coordinates `x` and `y`.
//!
//! An [`Expr`] is a strict tree: every node owns its children and nothing is
//! ever mutated after construction, so one tree can be evaluated from many
//! threads at once.
//!
//! The canonical text form is produced by the [`Display`](fmt::Display) impl
//! and read back by [`parse`]. Printing a parsed string reproduces it
//! byte-for-byte, but the parser does not recover the `pi*` sugar: both
//! `SinOfPiTimes(x)` and a hand-written `sin(pi*x)` parse as
//! `Sin(Times(ConstPi, VarX))`. Compare trees by their text, not their shape.

mod generate;
mod parser;

pub use generate::{
    generate, generate_with, random, GeneratorConfig, DEFAULT_MAX_DEPTH, DEFAULT_PROBABILITY,
};
pub use parser::{parse, MAX_NESTING};

use crate::error::SyntaxError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A scalar function of two real inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    // === Leaves ===
    /// The horizontal coordinate.
    VarX,
    /// The vertical coordinate.
    VarY,
    /// The constant π.
    ConstPi,

    // === Unary ===
    /// `sin(arg)`.
    Sin(Box<Expr>),
    /// `cos(arg)`.
    Cos(Box<Expr>),
    /// `sin(π·arg)`.
    SinOfPiTimes(Box<Expr>),
    /// `cos(π·arg)`.
    CosOfPiTimes(Box<Expr>),

    // === Binary ===
    /// `lhs·rhs`. Operand order is kept in the text form.
    Times(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// `sin(arg)`.
    #[must_use]
    pub fn sin(arg: Expr) -> Self {
        Self::Sin(Box::new(arg))
    }

    /// `cos(arg)`.
    #[must_use]
    pub fn cos(arg: Expr) -> Self {
        Self::Cos(Box::new(arg))
    }

    /// `sin(π·arg)`.
    #[must_use]
    pub fn sin_pi(arg: Expr) -> Self {
        Self::SinOfPiTimes(Box::new(arg))
    }

    /// `cos(π·arg)`.
    #[must_use]
    pub fn cos_pi(arg: Expr) -> Self {
        Self::CosOfPiTimes(Box::new(arg))
    }

    /// `lhs·rhs`.
    #[must_use]
    pub fn times(lhs: Expr, rhs: Expr) -> Self {
        Self::Times(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate at `(x, y)`.
    ///
    /// Total over finite inputs: every trig node lands in `[-1, 1]`.
    #[must_use]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::VarX => x,
            Self::VarY => y,
            Self::ConstPi => PI,
            Self::Sin(arg) => arg.eval(x, y).sin(),
            Self::Cos(arg) => arg.eval(x, y).cos(),
            Self::SinOfPiTimes(arg) => (PI * arg.eval(x, y)).sin(),
            Self::CosOfPiTimes(arg) => (PI * arg.eval(x, y)).cos(),
            Self::Times(lhs, rhs) => lhs.eval(x, y) * rhs.eval(x, y),
        }
    }

    /// Canonical text of this tree. Same as `to_string()`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Count the nodes in this tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::VarX | Self::VarY | Self::ConstPi => 1,
            Self::Sin(a) | Self::Cos(a) | Self::SinOfPiTimes(a) | Self::CosOfPiTimes(a) => {
                1 + a.node_count()
            }
            Self::Times(a, b) => 1 + a.node_count() + b.node_count(),
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::VarX | Self::VarY | Self::ConstPi => 1,
            Self::Sin(a) | Self::Cos(a) | Self::SinOfPiTimes(a) | Self::CosOfPiTimes(a) => {
                1 + a.depth()
            }
            Self::Times(a, b) => 1 + a.depth().max(b.depth()),
        }
    }

    /// Whether this is a leaf (`x`, `y` or `pi`).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::VarX | Self::VarY | Self::ConstPi)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VarX => f.write_str("x"),
            Self::VarY => f.write_str("y"),
            Self::ConstPi => f.write_str("pi"),
            Self::Sin(arg) => write!(f, "sin({arg})"),
            Self::Cos(arg) => write!(f, "cos({arg})"),
            Self::SinOfPiTimes(arg) => write!(f, "sin(pi*{arg})"),
            Self::CosOfPiTimes(arg) => write!(f, "cos(pi*{arg})"),
            // No grouping: `Times` nested on either side prints flat, which the
            // left-associative parser reads back to the same text.
            Self::Times(lhs, rhs) => write!(f, "{lhs}*{rhs}"),
        }
    }
}

impl FromStr for Expr {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}
