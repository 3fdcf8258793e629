//! Linear mapping from chart coordinates to character cells.
//!
//! A [`LinearScale`] maps its domain `[min, max]` onto `[0, 1]`; the
//! [`Viewport`] stretches that onto a grid of cells and flips the y-axis,
//! since rows grow downward while chart y grows upward.

use crate::error::{self, ParabolaError};
use crate::validate::{validate_finite, validate_interval};

/// Largest number of ticks [`LinearScale::ticks`] will produce.
pub const MAX_TICKS: usize = 10_000;

/// Affine mapping between `[min, max]` and `[0, 1]`. Out-of-range values
/// map outside `[0, 1]`; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    min: f64,
    max: f64,
}

impl LinearScale {
    pub fn new(min: f64, max: f64) -> error::Result<Self> {
        validate_interval(min, max, "scale domain")?;
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Multiples of `step` inside the domain, ascending.
    ///
    /// # Errors
    /// Returns [`ParabolaError::InvalidInput`] unless `step` is positive and
    /// finite and yields at most [`MAX_TICKS`] ticks.
    pub fn ticks(&self, step: f64) -> error::Result<Vec<f64>> {
        validate_finite(step, "grid step")?;
        if step <= 0.0 {
            return Err(ParabolaError::InvalidInput {
                message: format!("grid step must be positive, got {step}"),
            });
        }
        let span = (self.max - self.min) / step;
        if span > MAX_TICKS as f64 {
            return Err(ParabolaError::InvalidInput {
                message: format!(
                    "grid step {step} gives more than {MAX_TICKS} ticks over [{}, {}]",
                    self.min, self.max
                ),
            });
        }
        // Nudge the quotients so exact multiples are not lost to round-off.
        let eps = 1e-9;
        let first = (self.min / step - eps).ceil() as i64;
        let last = (self.max / step + eps).floor() as i64;
        Ok((first..=last).map(|k| k as f64 * step).collect())
    }
}

/// A `width × height` cell grid showing the rectangle `x × y`.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: LinearScale,
    pub y: LinearScale,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    /// Fractional column of `x`; column 0 is `x.min()`.
    pub fn column(&self, x: f64) -> f64 {
        self.x.normalize(x) * (self.width - 1) as f64
    }

    /// Fractional row of `y`; row 0 is `y.max()`.
    pub fn row(&self, y: f64) -> f64 {
        (1.0 - self.y.normalize(y)) * (self.height - 1) as f64
    }

    /// Cell of `(x, y)`, or `None` when it falls outside the grid.
    pub fn cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = self.column(x).round();
        let row = self.row(y).round();
        let inside = |v: f64, n: usize| v.is_finite() && v >= 0.0 && v <= (n - 1) as f64;
        (inside(col, self.width) && inside(row, self.height)).then(|| (row as usize, col as usize))
    }
}
