//! Random expression generation.
//!
//! Each node draws `u` uniformly from `[0, 1)`. If `u < p` it becomes an
//! operator and builds its children with probability `p²`; otherwise it
//! becomes a leaf. Squaring drives `p` towards zero within a few levels
//! (0.99, 0.9801, 0.9606, 0.9227, 0.8515, 0.7250, ...), so every tree is
//! finite with probability 1.

use super::Expr;
use crate::error::ConfigError;
use log::debug;
use rand::Rng;
use serde::Serialize;

/// Starting continuation probability of the default generator.
pub const DEFAULT_PROBABILITY: f64 = 0.99;

/// Depth cutoff of the default generator. At `p = 0.99` the continuation
/// probability at this depth is indistinguishable from zero, so the cutoff
/// only matters for `p` within a hair of 1.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Operator shapes, two copies each of the pi forms and `Times`.
#[derive(Debug, Clone, Copy)]
enum Operator {
    SinOfPiTimes,
    CosOfPiTimes,
    Times,
    Cos,
    Sin,
}

const OPERATORS: [Operator; 8] = [
    Operator::SinOfPiTimes,
    Operator::CosOfPiTimes,
    Operator::SinOfPiTimes,
    Operator::CosOfPiTimes,
    Operator::Times,
    Operator::Cos,
    Operator::Sin,
    Operator::Times,
];

/// Leaves: `x` and `y` twice as likely as `pi`.
const LEAVES: [Expr; 5] = [Expr::VarX, Expr::VarY, Expr::ConstPi, Expr::VarX, Expr::VarY];

/// Generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeneratorConfig {
    /// Probability that the root is an operator.
    pub probability: f64,
    /// Maximum tree depth in nodes. `None` disables the cutoff.
    pub max_depth: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            probability: DEFAULT_PROBABILITY,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl GeneratorConfig {
    /// Check the probability is a number in `[0, 1)`.
    ///
    /// At `p = 1` squaring never decays, so every node branches until the
    /// depth cutoff (or forever without one).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProbability`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (0.0..1.0).contains(&self.probability) {
            Ok(())
        } else {
            Err(ConfigError::InvalidProbability(self.probability))
        }
    }
}

/// Generate a random expression starting from continuation probability `p`.
///
/// Uses the default depth cutoff. `p` should lie in `[0, 1)`; use
/// [`generate_with`] to have it checked.
#[must_use]
pub fn generate<R: Rng>(rng: &mut R, p: f64) -> Expr {
    let expr = build(rng, p, 1, DEFAULT_MAX_DEPTH);
    debug!(
        "generated expression at p={p}: depth {}, {} nodes",
        expr.depth(),
        expr.node_count()
    );
    expr
}

/// Generate a random expression with the default probability of 0.99.
#[must_use]
pub fn random<R: Rng>(rng: &mut R) -> Expr {
    generate(rng, DEFAULT_PROBABILITY)
}

/// Generate a random expression from explicit settings.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate_with<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> Result<Expr, ConfigError> {
    config.validate()?;
    let max_depth = config.max_depth.unwrap_or(usize::MAX);
    let expr = build(rng, config.probability, 1, max_depth);
    debug!(
        "generated expression at p={}: depth {}, {} nodes",
        config.probability,
        expr.depth(),
        expr.node_count()
    );
    Ok(expr)
}

/// Build one node at `depth` (root is 1).
fn build<R: Rng>(rng: &mut R, p: f64, depth: usize, max_depth: usize) -> Expr {
    let branch = rng.gen_range(0.0..1.0) < p;
    if !branch || depth >= max_depth {
        return LEAVES[rng.gen_range(0..LEAVES.len())].clone();
    }

    let child_p = p * p;
    let child_depth = depth + 1;
    match OPERATORS[rng.gen_range(0..OPERATORS.len())] {
        Operator::SinOfPiTimes => Expr::sin_pi(build(rng, child_p, child_depth, max_depth)),
        Operator::CosOfPiTimes => Expr::cos_pi(build(rng, child_p, child_depth, max_depth)),
        Operator::Cos => Expr::cos(build(rng, child_p, child_depth, max_depth)),
        Operator::Sin => Expr::sin(build(rng, child_p, child_depth, max_depth)),
        Operator::Times => {
            let lhs = build(rng, child_p, child_depth, max_depth);
            let rhs = build(rng, child_p, child_depth, max_depth);
            Expr::times(lhs, rhs)
        }
    }
}
