//! Roots of `a·x² + b·x + c = 0`.
//!
//! The discriminant `D = b² − 4ac` decides the shape of the solution set:
//!
//! ```text
//! D > 0  →  two distinct real roots
//! D = 0  →  one repeated real root (returned once)
//! D < 0  →  complex-conjugate pair re ± im·i
//! ```
//!
//! Distinct real roots use the cancellation-free form
//! `q = −(b + sign(b)·√D) / 2`, `x₁ = q / a`, `x₂ = c / q`.

use serde::{Deserialize, Serialize};

use crate::analysis::features::normalize_zero;
use crate::error::{self, ParabolaError};
use crate::validate::validate_finite;

/// Relative tolerance under which the discriminant counts as zero.
const DISCRIMINANT_TOL: f64 = 1e-12;

/// Solution set of a true quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Roots {
    /// Two distinct real roots, ordered so that `.0 < .1`.
    TwoReal(f64, f64),
    /// One repeated real root.
    Double(f64),
    /// The complex-conjugate pair `re ± im·i`, with `im > 0`.
    ComplexPair { re: f64, im: f64 },
}

impl Roots {
    /// Real roots only, ascending. Empty for a complex pair.
    ///
    /// # Examples
    /// ```
    /// use parabola::analysis::roots;
    ///
    /// assert_eq!(roots(1.0, 0.0, -4.0)?.real(), vec![-2.0, 2.0]);
    /// assert_eq!(roots(1.0, 2.0, 1.0)?.real(), vec![-1.0]);
    /// assert!(roots(1.0, 0.0, 4.0)?.real().is_empty());
    /// # Ok::<(), parabola::ParabolaError>(())
    /// ```
    pub fn real(&self) -> Vec<f64> {
        match *self {
            Roots::TwoReal(x1, x2) => vec![x1, x2],
            Roots::Double(x) => vec![x],
            Roots::ComplexPair { .. } => Vec::new(),
        }
    }

    /// Number of distinct real roots (0, 1 or 2).
    pub fn real_count(&self) -> usize {
        match self {
            Roots::TwoReal(..) => 2,
            Roots::Double(_) => 1,
            Roots::ComplexPair { .. } => 0,
        }
    }

    pub fn is_real(&self) -> bool {
        !matches!(self, Roots::ComplexPair { .. })
    }
}

/// Solve `a·x² + b·x + c = 0`.
///
/// # Errors
/// Returns [`ParabolaError::DegenerateInput`] when `a = 0` (the equation is
/// linear or constant), [`ParabolaError::InvalidInput`] for non-finite input.
pub fn roots(a: f64, b: f64, c: f64) -> error::Result<Roots> {
    validate_finite(a, "a")?;
    validate_finite(b, "b")?;
    validate_finite(c, "c")?;
    if a == 0.0 {
        return Err(ParabolaError::degenerate(a));
    }

    // Roots are invariant under scaling all three coefficients, so rescale
    // when b² or 4ac would overflow.
    let (a, b, c) = if (b * b).is_finite() && (4.0 * a * c).is_finite() {
        (a, b, c)
    } else {
        let s = a.abs().max(b.abs()).max(c.abs());
        (a / s, b / s, c / s)
    };

    let b2 = b * b;
    let four_ac = 4.0 * a * c;
    let d = b2 - four_ac;

    if d.abs() <= DISCRIMINANT_TOL * b2.max(four_ac.abs()) {
        return Ok(Roots::Double(normalize_zero(-b / (2.0 * a))));
    }

    if d > 0.0 {
        let sq = d.sqrt();
        // signum() is ±1 even for ±0.0, so q is never zero here.
        let q = -0.5 * (b + b.signum() * sq);
        let x1 = normalize_zero(q / a);
        let x2 = normalize_zero(c / q);
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        Ok(Roots::TwoReal(lo, hi))
    } else {
        Ok(Roots::ComplexPair {
            re: normalize_zero(-b / (2.0 * a)),
            im: (-d).sqrt() / (2.0 * a).abs(),
        })
    }
}
