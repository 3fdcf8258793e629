//! Recover `(a, b, c)` from three points on the parabola.
//!
//! The unknowns enter linearly, giving the Vandermonde system
//!
//! ```text
//! ⎡x₁² x₁ 1⎤ ⎡a⎤   ⎡y₁⎤
//! ⎢x₂² x₂ 1⎥ ⎢b⎥ = ⎢y₂⎥
//! ⎣x₃² x₃ 1⎦ ⎣c⎦   ⎣y₃⎦
//! ```
//!
//! which is non-singular exactly when the three x-values are pairwise
//! distinct. It is solved by LU decomposition with partial pivoting.

use nalgebra::{Matrix3, Vector3};

use crate::error::{self, ParabolaError};
use crate::types::{Coefficients, Point};
use crate::validate::validate_finite;

/// Relative tolerance under which two x-values are treated as equal.
const COINCIDENCE_TOL: f64 = 1e-12;
/// A solved coefficient whose largest contribution to any `y` is below this
/// fraction of the largest |y| is round-off and snapped to zero.
const ROUNDOFF_TOL: f64 = 1e-12;

/// Find the quadratic passing through three points.
///
/// Collinear points yield `a = 0`, which downstream analysis reports as
/// degenerate.
///
/// # Examples
/// ```
/// use parabola::{Point, fit_quadratic};
///
/// let q = fit_quadratic(Point::new(0.0, 1.0), Point::new(1.0, 4.0), Point::new(2.0, 9.0))?;
/// assert!((q.a() - 1.0).abs() < 1e-12);
/// assert!((q.b() - 2.0).abs() < 1e-12);
/// assert!((q.c() - 1.0).abs() < 1e-12);
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
///
/// # Errors
/// Returns [`ParabolaError::SingularSystem`] if two x-values coincide or the
/// solver finds the matrix singular, [`ParabolaError::InvalidInput`] for
/// non-finite coordinates.
pub fn fit_quadratic(p1: Point, p2: Point, p3: Point) -> error::Result<Coefficients> {
    let points = [p1, p2, p3];
    for (i, p) in points.iter().enumerate() {
        validate_finite(p.x, &format!("x{}", i + 1))?;
        validate_finite(p.y, &format!("y{}", i + 1))?;
    }

    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        let (xi, xj) = (points[i].x, points[j].x);
        if (xi - xj).abs() <= COINCIDENCE_TOL * xi.abs().max(xj.abs()) {
            return Err(ParabolaError::SingularSystem {
                message: format!(
                    "points {} and {} share x = {xi}; no unique quadratic passes through them",
                    i + 1,
                    j + 1
                ),
            });
        }
    }

    #[rustfmt::skip]
    let m = Matrix3::new(
        p1.x * p1.x, p1.x, 1.0,
        p2.x * p2.x, p2.x, 1.0,
        p3.x * p3.x, p3.x, 1.0,
    );
    let rhs = Vector3::new(p1.y, p2.y, p3.y);

    let solution = m
        .lu()
        .solve(&rhs)
        .ok_or_else(|| ParabolaError::SingularSystem {
            message: "coefficient matrix is singular".into(),
        })?;
    if solution.iter().any(|v| !v.is_finite()) {
        return Err(ParabolaError::SingularSystem {
            message: "coefficient matrix is numerically singular".into(),
        });
    }

    let (a, b, c) = snap_roundoff(&points, (solution[0], solution[1], solution[2]));

    #[cfg(feature = "logging")]
    tracing::debug!(a, b, c, "three-point fit solved");

    Coefficients::new(a, b, c)
}

/// Zero out coefficients that only carry round-off.
///
/// Each coefficient is judged by its contribution over the x-range, so
/// `a` is compared in units of `y/x²`, `b` in `y/x` and `c` in `y`. The
/// snapped curve is kept only if it still passes through the points as
/// closely as the raw solution does.
fn snap_roundoff(points: &[Point; 3], raw: (f64, f64, f64)) -> (f64, f64, f64) {
    let x_scale = points.iter().map(|p| p.x.abs()).fold(0.0_f64, f64::max);
    let y_scale = points.iter().map(|p| p.y.abs()).fold(0.0_f64, f64::max);
    let tol = ROUNDOFF_TOL * y_scale;
    let snap = |v: f64, power: i32| {
        if (v * x_scale.powi(power)).abs() < tol { 0.0 } else { v }
    };
    let (a, b, c) = raw;
    let snapped = (snap(a, 2), snap(b, 1), snap(c, 0));

    let worst_miss = |(a, b, c): (f64, f64, f64)| {
        points
            .iter()
            .map(|p| (a * p.x * p.x + b * p.x + c - p.y).abs())
            .fold(0.0_f64, f64::max)
    };
    if worst_miss(snapped) <= worst_miss(raw) + 4.0 * tol {
        snapped
    } else {
        raw
    }
}
