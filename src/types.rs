//! Core value types for quadratic analysis.
//!
//! All types here are immutable `Copy` values created fresh per computation.
//!
//! # Why no `Eq` or `Ord`?
//! These types wrap `f64`, which does not implement `Eq` or `Ord` because `NaN`
//! breaks total ordering. We derive `PartialEq` only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{self, ParabolaError};
use crate::validate::validate_finite;

/// Coefficients of `y = a·x² + b·x + c`.
///
/// `a` may be zero; such a set is *degenerate* (linear or constant) and
/// quadratic-only derivations report [`ParabolaError::DegenerateInput`].
///
/// # Examples
/// ```
/// use parabola::Coefficients;
///
/// let q = Coefficients::new(1.0, 0.0, -4.0)?;
/// assert_eq!(q.eval(2.0), 0.0);
/// assert_eq!(q.discriminant(), 16.0);
/// assert_eq!(q.to_string(), "y = 1.00x² + 0.00x - 4.00");
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoefficientsRaw")]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

#[derive(Deserialize)]
struct CoefficientsRaw {
    a: f64,
    b: f64,
    c: f64,
}

impl TryFrom<CoefficientsRaw> for Coefficients {
    type Error = ParabolaError;
    fn try_from(raw: CoefficientsRaw) -> Result<Self, Self::Error> {
        Self::new(raw.a, raw.b, raw.c)
    }
}

impl Coefficients {
    /// Create a coefficient set.
    ///
    /// # Errors
    /// Returns [`ParabolaError::InvalidInput`] if any coefficient is NaN or infinite.
    pub fn new(a: f64, b: f64, c: f64) -> error::Result<Self> {
        validate_finite(a, "a")?;
        validate_finite(b, "b")?;
        validate_finite(c, "c")?;
        Ok(Self { a, b, c })
    }

    /// Coefficient of the x² term.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of the x term.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// `(a, b, c)` as a tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Evaluate `a·x² + b·x + c`.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Discriminant `b² − 4ac`.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// `true` when `a ≠ 0`.
    pub fn is_quadratic(&self) -> bool {
        self.a != 0.0
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |v: f64| if v < 0.0 { '-' } else { '+' };
        write!(
            f,
            "y = {:.2}x² {} {:.2}x {} {:.2}",
            self.a,
            sign(self.b),
            self.b.abs(),
            sign(self.c),
            self.c.abs()
        )
    }
}

/// An `(x, y)` pair: fitting input, tabulated output and plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Turning point of the parabola, at `x = −b/2a`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// The vertical line `x = −b/2a` through the vertex.
///
/// # Examples
/// ```
/// use parabola::AxisOfSymmetry;
/// let axis = AxisOfSymmetry(1.5);
/// assert_eq!(axis.0, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct AxisOfSymmetry(pub f64);

/// Which way the parabola opens, decided by the sign of `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `a > 0`.
    Upward,
    /// `a < 0`.
    Downward,
    /// `a = 0`: not a quadratic.
    Degenerate,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Upward => "opens upward",
            Direction::Downward => "opens downward",
            Direction::Degenerate => "degenerate",
        };
        f.write_str(s)
    }
}
