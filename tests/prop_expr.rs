//! Property-based tests for the expression language.
//!
//! These tests verify the print/parse round trip, evaluation totality and
//! generator termination.
//! Run with: cargo test --release prop_expr

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::cast_precision_loss)]

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use trigart::expr::{generate, generate_with, parse, random, Expr, GeneratorConfig};

/// Arbitrary trees, including the `pi*` sugar the parser never produces.
fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![Just(Expr::VarX), Just(Expr::VarY), Just(Expr::ConstPi)];
    leaf.prop_recursive(8, 64, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::sin),
            inner.clone().prop_map(Expr::cos),
            inner.clone().prop_map(Expr::sin_pi),
            inner.clone().prop_map(Expr::cos_pi),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::times(l, r)),
        ]
    })
}

/// Upper bound on `|expr(x, y)|`.
fn magnitude_bound(expr: &Expr, x: f64, y: f64) -> f64 {
    match expr {
        Expr::VarX => x.abs(),
        Expr::VarY => y.abs(),
        Expr::ConstPi => std::f64::consts::PI,
        Expr::Sin(_) | Expr::Cos(_) | Expr::SinOfPiTimes(_) | Expr::CosOfPiTimes(_) => 1.0,
        Expr::Times(l, r) => magnitude_bound(l, x, y) * magnitude_bound(r, x, y),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Every generated tree prints, parses and prints back to the same text.
    #[test]
    fn prop_generated_round_trip(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let expr = random(&mut rng);
        let text = expr.to_string();

        let parsed = parse(&text);
        prop_assert!(parsed.is_ok(), "{}: {:?}", text, parsed);
        prop_assert_eq!(parsed.unwrap().to_string(), text);
    }

    /// Round trip holds for arbitrary trees, not just generator output.
    #[test]
    fn prop_arbitrary_round_trip(expr in arb_expr()) {
        let text = expr.to_string();
        let reparsed = parse(&text).unwrap();
        prop_assert_eq!(reparsed.to_string(), text.clone());

        // Reparsing the reparsed text is a fixed point in structure too.
        let again = parse(&reparsed.to_string()).unwrap();
        prop_assert_eq!(again, reparsed);
    }

    /// Evaluation is finite and respects the operator ranges.
    #[test]
    fn prop_eval_total(
        expr in arb_expr(),
        x in -10.0f64..10.0,
        y in -10.0f64..10.0
    ) {
        let value = expr.eval(x, y);
        prop_assert!(value.is_finite());
        let bound = magnitude_bound(&expr, x, y);
        prop_assert!(value.abs() <= bound * (1.0 + 1e-12) + 1e-12, "{} > {}", value, bound);
        if !expr.is_leaf() && !matches!(expr, Expr::Times(..)) {
            prop_assert!((-1.0..=1.0).contains(&value));
        }
    }

    /// Whitespace anywhere between tokens does not change the result.
    #[test]
    fn prop_whitespace_ignored(expr in arb_expr(), spaces in proptest::collection::vec(0usize..3, 0..64)) {
        let text = expr.to_string();
        let mut spaced = String::new();
        for (i, c) in text.chars().enumerate() {
            spaced.push(c);
            let n = spaces.get(i).copied().unwrap_or(0);
            spaced.push_str(&" ".repeat(n));
        }
        prop_assert_eq!(parse(&spaced).unwrap().to_string(), text);
    }

    /// The parser never panics on arbitrary input.
    #[test]
    fn prop_parse_no_panic(text in "[sincopxy()* q]{0,40}") {
        if let Ok(expr) = parse(&text) {
            let canonical = expr.to_string();
            prop_assert_eq!(parse(&canonical).unwrap().to_string(), canonical);
        }
    }

    /// Error positions always point inside the input or at its end.
    #[test]
    fn prop_error_position_in_bounds(text in "[sincopxy()*]{0,20}") {
        if let Err(e) = parse(&text) {
            let len = text.chars().count();
            prop_assert!(e.position <= len);
            match e.found {
                Some(c) => prop_assert_eq!(text.chars().nth(e.position), Some(c)),
                None => prop_assert_eq!(e.position, len),
            }
        }
    }
}

/// Generation terminates without a depth cap, and depth stays small.
#[test]
fn test_generation_depth_statistics() {
    const RUNS: usize = 10_000;
    let config = GeneratorConfig {
        max_depth: None,
        ..GeneratorConfig::default()
    };

    let mut depths = Vec::with_capacity(RUNS);
    for seed in 0..RUNS as u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let expr = generate_with(&mut rng, &config).unwrap();
        depths.push(expr.depth());
    }

    depths.sort_unstable();
    let p999 = depths[RUNS * 999 / 1000];
    let max = depths[RUNS - 1];

    // Regression ceilings: continuation probability at depth 12 is ~1e-9.
    assert!(p999 <= 12, "99.9th percentile depth {p999}");
    assert!(max <= 16, "max depth {max}");
}

/// Lower starting probabilities give shallower trees on average.
#[test]
fn test_lower_probability_is_shallower() {
    let mean_depth = |p: f64| {
        let mut rng = SmallRng::seed_from_u64(77);
        let total: usize = (0..2000).map(|_| generate(&mut rng, p).depth()).sum();
        total as f64 / 2000.0
    };
    assert!(mean_depth(0.5) < mean_depth(0.99));
}
