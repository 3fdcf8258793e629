//! # parabola
//!
//! Analytic geometry of quadratic functions `y = a·x² + b·x + c`.
//!
//! Two entry points feed a shared presentation layer:
//! coefficients → [`Analysis`] (roots, intercepts, vertex, axis, direction,
//! value table), or three points → [`fit_quadratic`] → coefficients →
//! [`Analysis`].
//!
//! ## Architecture
//!
//! - **`analysis`** — Pure derivations from `(a, b, c)`
//! - **`fit`** — Coefficient recovery from three points (3×3 LU solve)
//! - **`present`** — Text report, value table and text-mode chart
//!
//! ## Design
//!
//! - **Bare `f64` inputs, typed outputs.** Functions take raw coefficients;
//!   results come back as [`Roots`], [`Vertex`], [`AxisOfSymmetry`],
//!   [`Direction`] and [`Point`].
//! - **No panics.** `a = 0` is reported as
//!   [`ParabolaError::DegenerateInput`], a repeated x-value in a fit as
//!   [`ParabolaError::SingularSystem`]. Library code never calls `unwrap()`
//!   or `expect()`.
//! - **Complex roots are kept.** A negative discriminant yields
//!   [`Roots::ComplexPair`]; [`Roots::real`] gives the real-only view.
//! - **The core never depends on `present`.**
//!
//! ## Example
//!
//! ```
//! use parabola::{Analysis, Point, fit_quadratic};
//!
//! let q = fit_quadratic(Point::new(-1.0, 0.0), Point::new(0.0, -1.0), Point::new(1.0, 0.0))?;
//! let analysis = Analysis::of(q);
//! assert_eq!(analysis.x_intercepts().len(), 2);
//! # Ok::<(), parabola::ParabolaError>(())
//! ```

pub mod analysis;
pub mod error;
pub mod fit;
pub mod present;
pub mod types;
mod validate;

#[doc(inline)]
pub use analysis::{Analysis, Roots, SampleTable, Shape};
#[doc(inline)]
pub use error::{ParabolaError, Result};
#[doc(inline)]
pub use fit::fit_quadratic;
#[doc(inline)]
pub use types::{AxisOfSymmetry, Coefficients, Direction, Point, Vertex};
