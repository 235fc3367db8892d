#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use trigart::expr::generate;

/// Structured input for evaluation fuzzing.
#[derive(Arbitrary, Debug)]
struct EvalInput {
    /// Generator seed.
    seed: u64,
    /// Starting probability, scaled into [0, 1).
    probability: u16,
    /// Sample point.
    x: f64,
    /// Sample point.
    y: f64,
}

fuzz_target!(|input: EvalInput| {
    if !input.x.is_finite() || !input.y.is_finite() {
        return;
    }
    // Keep products of leaves finite
    let x = input.x.clamp(-4.0, 4.0);
    let y = input.y.clamp(-4.0, 4.0);

    let mut rng = SmallRng::seed_from_u64(input.seed);
    let p = f64::from(input.probability) / (f64::from(u16::MAX) + 1.0);
    let expr = generate(&mut rng, p);

    let value = expr.eval(x, y);
    assert!(value.is_finite(), "{expr} at ({x}, {y})");
    if !expr.is_leaf() && !matches!(expr, trigart::Expr::Times(..)) {
        assert!((-1.0..=1.0).contains(&value));
    }
});
