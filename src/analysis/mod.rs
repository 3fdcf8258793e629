//! Derived geometric facts about `y = a·x² + b·x + c`.
//!
//! Every function takes bare `f64` coefficients and is pure: no I/O, no
//! shared state. Quadratic-only derivations (roots, vertex, axis) return
//! [`ParabolaError::DegenerateInput`](crate::ParabolaError::DegenerateInput)
//! when `a = 0` instead of dividing by zero.
//!
//! - [`roots`] — real roots or a complex-conjugate pair
//! - [`vertex`], [`axis_of_symmetry`], [`y_intercept`], [`direction`]
//! - [`sample_table`] — lazily evaluated value table
//! - [`Analysis`] — all of the above in one record for the presenter

pub mod features;
pub mod roots;
pub mod table;

pub use features::{axis_of_symmetry, direction, vertex, y_intercept};
pub use roots::{Roots, roots};
pub use table::{
    DEFAULT_SAMPLE_COUNT, Domain, MAX_SAMPLE_COUNT, SamplePoints, SampleTable, sample_table,
};

use serde::{Deserialize, Serialize};

use crate::error;
use crate::types::{AxisOfSymmetry, Coefficients, Direction, Vertex};

/// Quadratic-only features, or the degenerate flag when `a = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Quadratic {
        roots: Roots,
        vertex: Vertex,
        axis: AxisOfSymmetry,
    },
    /// Linear or constant: no vertex, axis, or quadratic roots.
    Degenerate,
}

impl Shape {
    fn derive(q: &Coefficients) -> error::Result<Self> {
        let (a, b, c) = q.as_tuple();
        Ok(Shape::Quadratic {
            roots: roots(a, b, c)?,
            vertex: vertex(a, b, c)?,
            axis: axis_of_symmetry(a, b)?,
        })
    }
}

/// Everything the presenter needs to describe one quadratic.
///
/// Construction is total: a zero leading coefficient yields
/// [`Shape::Degenerate`] rather than an error.
///
/// # Examples
/// ```
/// use parabola::{Analysis, Coefficients, Direction};
///
/// let analysis = Analysis::of(Coefficients::new(1.0, 0.0, -4.0)?);
/// assert_eq!(analysis.x_intercepts(), vec![-2.0, 2.0]);
/// assert_eq!(analysis.y_intercept, -4.0);
/// assert_eq!(analysis.direction, Direction::Upward);
///
/// let v = analysis.vertex().unwrap();
/// assert_eq!((v.x, v.y), (0.0, -4.0));
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub coefficients: Coefficients,
    pub y_intercept: f64,
    pub direction: Direction,
    pub shape: Shape,
}

impl Analysis {
    pub fn of(coefficients: Coefficients) -> Self {
        // Coefficients are finite, so a = 0 is the only way derive() can fail.
        let shape = Shape::derive(&coefficients).unwrap_or(Shape::Degenerate);

        #[cfg(feature = "logging")]
        tracing::debug!(
            a = coefficients.a(),
            b = coefficients.b(),
            c = coefficients.c(),
            degenerate = matches!(shape, Shape::Degenerate),
            "quadratic analyzed"
        );

        Self {
            coefficients,
            y_intercept: y_intercept(coefficients.c()),
            direction: direction(coefficients.a()),
            shape,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self.shape, Shape::Degenerate)
    }

    pub fn roots(&self) -> Option<Roots> {
        match self.shape {
            Shape::Quadratic { roots, .. } => Some(roots),
            Shape::Degenerate => None,
        }
    }

    pub fn vertex(&self) -> Option<Vertex> {
        match self.shape {
            Shape::Quadratic { vertex, .. } => Some(vertex),
            Shape::Degenerate => None,
        }
    }

    pub fn axis(&self) -> Option<AxisOfSymmetry> {
        match self.shape {
            Shape::Quadratic { axis, .. } => Some(axis),
            Shape::Degenerate => None,
        }
    }

    /// Real roots, ascending. Empty for complex roots and degenerate input.
    pub fn x_intercepts(&self) -> Vec<f64> {
        self.roots().map(|r| r.real()).unwrap_or_default()
    }

    /// Value table over `domain` for these coefficients.
    pub fn table(&self, domain: Domain, count: usize) -> SampleTable {
        SampleTable::new(self.coefficients, domain, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(a: f64, b: f64, c: f64) -> Analysis {
        Analysis::of(Coefficients::new(a, b, c).unwrap())
    }

    #[test]
    fn upward_parabola_with_two_roots() {
        let an = analyze(1.0, 0.0, -4.0);
        assert!(!an.is_degenerate());
        assert_eq!(an.roots(), Some(Roots::TwoReal(-2.0, 2.0)));
        assert_eq!(an.vertex(), Some(Vertex { x: 0.0, y: -4.0 }));
        assert_eq!(an.axis(), Some(AxisOfSymmetry(0.0)));
        assert_eq!(an.y_intercept, -4.0);
        assert_eq!(an.direction, Direction::Upward);
    }

    #[test]
    fn degenerate_input_is_flagged() {
        let an = analyze(0.0, 2.0, 3.0);
        assert!(an.is_degenerate());
        assert_eq!(an.direction, Direction::Degenerate);
        assert_eq!(an.y_intercept, 3.0);
        assert!(an.roots().is_none());
        assert!(an.vertex().is_none());
        assert!(an.axis().is_none());
        assert!(an.x_intercepts().is_empty());
    }

    #[test]
    fn complex_roots_have_no_x_intercepts() {
        let an = analyze(-1.0, 0.0, -1.0);
        assert_eq!(an.direction, Direction::Downward);
        assert!(an.x_intercepts().is_empty());
        assert!(matches!(an.roots(), Some(Roots::ComplexPair { .. })));
    }

    #[test]
    fn vertex_and_axis_agree() {
        let an = analyze(3.0, -7.0, 2.0);
        assert_eq!(an.vertex().unwrap().x, an.axis().unwrap().0);
    }

    #[test]
    fn table_uses_analysis_coefficients() {
        let an = analyze(1.0, 0.0, 0.0);
        let table = an.table(Domain::new(0.0, 2.0).unwrap(), 3);
        let ys: Vec<f64> = table.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 1.0, 4.0]);
    }

    #[test]
    fn serde_roundtrip() {
        let an = analyze(1.0, 2.0, 5.0);
        let json = serde_json::to_string(&an).unwrap();
        let back: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(an, back);
    }
}
