//! Intercept, vertex, axis of symmetry and opening direction.

use crate::error::{self, ParabolaError};
use crate::types::{AxisOfSymmetry, Direction, Vertex};
use crate::validate::validate_finite;

/// Map `-0.0` to `+0.0`; leaves every other value unchanged.
pub(crate) fn normalize_zero(x: f64) -> f64 {
    x + 0.0
}

/// The y-intercept `f(0) = c`. Always defined.
pub fn y_intercept(c: f64) -> f64 {
    c
}

/// The axis of symmetry `x = −b / 2a`.
///
/// # Errors
/// Returns [`ParabolaError::DegenerateInput`] when `a = 0`.
pub fn axis_of_symmetry(a: f64, b: f64) -> error::Result<AxisOfSymmetry> {
    validate_finite(a, "a")?;
    validate_finite(b, "b")?;
    if a == 0.0 {
        return Err(ParabolaError::degenerate(a));
    }
    Ok(AxisOfSymmetry(normalize_zero(-b / (2.0 * a))))
}

/// The vertex `(−b / 2a, f(−b / 2a))`.
///
/// The x-coordinate is computed by [`axis_of_symmetry`], so the two agree
/// bit for bit.
///
/// # Examples
/// ```
/// use parabola::analysis::vertex;
///
/// let v = vertex(1.0, 0.0, -4.0)?;
/// assert_eq!((v.x, v.y), (0.0, -4.0));
/// assert!(vertex(0.0, 2.0, 3.0).is_err());
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
///
/// # Errors
/// Returns [`ParabolaError::DegenerateInput`] when `a = 0`.
pub fn vertex(a: f64, b: f64, c: f64) -> error::Result<Vertex> {
    let x = axis_of_symmetry(a, b)?.0;
    validate_finite(c, "c")?;
    let y = normalize_zero(a * x * x + b * x + c);
    Ok(Vertex { x, y })
}

/// Classify the opening direction by the sign of `a`.
///
/// NaN is neither positive nor negative and falls into
/// [`Direction::Degenerate`].
pub fn direction(a: f64) -> Direction {
    if a > 0.0 {
        Direction::Upward
    } else if a < 0.0 {
        Direction::Downward
    } else {
        Direction::Degenerate
    }
}
