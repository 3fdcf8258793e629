//! Property-based tests using proptest.
//!
//! These tests verify invariant properties across random inputs rather than
//! testing fixed examples.

use parabola::analysis::{axis_of_symmetry, direction, roots, sample_table, vertex};
use parabola::{Direction, ParabolaError, Point, Roots, fit_quadratic};
use proptest::prelude::*;

/// Leading coefficients bounded away from zero.
fn nonzero_a() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0_f64..-0.01, 0.01_f64..10.0]
}

// --- Property Test 1: vertex and axis agree ---

proptest! {
    /// The vertex x-coordinate and the axis of symmetry are the same number.
    #[test]
    fn vertex_x_equals_axis(
        a in nonzero_a(),
        b in -100.0_f64..100.0,
        c in -100.0_f64..100.0,
    ) {
        let v = vertex(a, b, c).unwrap();
        let axis = axis_of_symmetry(a, b).unwrap();
        prop_assert_eq!(v.x, axis.0);
    }
}

// --- Property Test 2: discriminant decides the root set ---

proptest! {
    /// D > 0 gives two distinct real roots that solve the equation;
    /// D < 0 gives a complex pair. Near-zero D is left to the double-root test.
    #[test]
    fn discriminant_decides_root_count(
        a in nonzero_a(),
        b in -50.0_f64..50.0,
        c in -50.0_f64..50.0,
    ) {
        let d = b * b - 4.0 * a * c;
        let scale = (b * b).max((4.0 * a * c).abs());
        prop_assume!(d.abs() > 1e-9 * scale);

        let r = roots(a, b, c).unwrap();
        if d > 0.0 {
            prop_assert_eq!(r.real_count(), 2);
            let xs = r.real();
            prop_assert!(xs[0] < xs[1], "roots not ascending: {:?}", xs);
            for x in xs {
                let residual = a * x * x + b * x + c;
                let magnitude = (a * x * x).abs() + (b * x).abs() + c.abs();
                prop_assert!(
                    residual.abs() <= 1e-9 * magnitude.max(1.0),
                    "f({}) = {} is not ~0",
                    x,
                    residual
                );
            }
        } else {
            let is_complex_pair = matches!(r, Roots::ComplexPair { im, .. } if im > 0.0);
            prop_assert!(is_complex_pair);
            prop_assert!(r.real().is_empty());
        }
    }
}

// --- Property Test 3: perfect squares have a double root ---

proptest! {
    /// a(x − r)² has the single repeated root r.
    #[test]
    fn perfect_square_has_double_root(
        a in nonzero_a(),
        r in -20.0_f64..20.0,
    ) {
        let (b, c) = (-2.0 * a * r, a * r * r);
        match roots(a, b, c).unwrap() {
            Roots::Double(x) => prop_assert!((x - r).abs() <= 1e-9 * (1.0 + r.abs())),
            other => prop_assert!(false, "expected double root, got {:?}", other),
        }
    }
}

// --- Property Test 4: direction is exhaustive ---

proptest! {
    #[test]
    fn direction_follows_sign(a in -1e6_f64..1e6) {
        let expected = if a > 0.0 {
            Direction::Upward
        } else if a < 0.0 {
            Direction::Downward
        } else {
            Direction::Degenerate
        };
        prop_assert_eq!(direction(a), expected);
    }
}

// --- Property Test 5: three-point fit round-trip ---

proptest! {
    /// Sampling a quadratic at three distinct x-values and fitting recovers
    /// the original coefficients.
    #[test]
    fn fit_recovers_coefficients(
        a in nonzero_a(),
        b in -10.0_f64..10.0,
        c in -10.0_f64..10.0,
        x1 in -10.0_f64..10.0,
        d1 in 0.5_f64..5.0,
        d2 in 0.5_f64..5.0,
    ) {
        let f = |x: f64| a * x * x + b * x + c;
        let (x2, x3) = (x1 + d1, x1 + d1 + d2);
        let q = fit_quadratic(
            Point::new(x1, f(x1)),
            Point::new(x2, f(x2)),
            Point::new(x3, f(x3)),
        )
        .unwrap();
        prop_assert!((q.a() - a).abs() < 1e-6, "a: {} vs {}", q.a(), a);
        prop_assert!((q.b() - b).abs() < 1e-6, "b: {} vs {}", q.b(), b);
        prop_assert!((q.c() - c).abs() < 1e-6, "c: {} vs {}", q.c(), c);
    }
}

// --- Property Test 6: repeated x-values are singular ---

proptest! {
    #[test]
    fn repeated_x_is_singular(
        x in -100.0_f64..100.0,
        y1 in -100.0_f64..100.0,
        y2 in -100.0_f64..100.0,
        other in -100.0_f64..100.0,
        y3 in -100.0_f64..100.0,
    ) {
        let r = fit_quadratic(Point::new(x, y1), Point::new(other, y3), Point::new(x, y2));
        let is_singular = matches!(r, Err(ParabolaError::SingularSystem { .. }));
        prop_assert!(is_singular);
    }
}

// --- Property Test 7: value tables are evenly spaced samples ---

proptest! {
    #[test]
    fn table_is_increasing_and_exact(
        a in -5.0_f64..5.0,
        b in -5.0_f64..5.0,
        c in -5.0_f64..5.0,
        start in -100.0_f64..100.0,
        width in 0.1_f64..100.0,
        count in 2_usize..200,
    ) {
        let end = start + width;
        let table = sample_table(a, b, c, start, end, count).unwrap();
        let points = table.to_vec();
        prop_assert_eq!(points.len(), count);
        prop_assert_eq!(points[0].x, start);
        prop_assert_eq!(points[count - 1].x, end);

        let step = width / (count - 1) as f64;
        for w in points.windows(2) {
            prop_assert!(w[1].x > w[0].x);
            prop_assert!(((w[1].x - w[0].x) - step).abs() <= 1e-9 * width.max(1.0));
        }
        for p in &points {
            prop_assert!((p.y - (a * p.x * p.x + b * p.x + c)).abs() <= 1e-12 * (1.0 + p.y.abs()));
        }
    }
}
