//! Equally spaced value tables over a closed domain.
//!
//! A [`SampleTable`] stores only the coefficients, domain and point count.
//! Points are computed lazily by [`SamplePoints`]; calling
//! [`SampleTable::iter`] again restarts from the first point.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error;
use crate::types::{Coefficients, Point};
use crate::validate::{validate_at_most, validate_interval};

/// Number of points in the default table (`x = −10, −9, …, 10`).
pub const DEFAULT_SAMPLE_COUNT: usize = 21;
/// Largest `count` accepted by [`sample_table`].
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// Closed sampling interval `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainRaw")]
pub struct Domain {
    start: f64,
    end: f64,
}

#[derive(Deserialize)]
struct DomainRaw {
    start: f64,
    end: f64,
}

impl TryFrom<DomainRaw> for Domain {
    type Error = error::ParabolaError;
    fn try_from(raw: DomainRaw) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Domain {
    /// # Errors
    /// Returns [`ParabolaError::InvalidInput`](crate::ParabolaError::InvalidInput)
    /// unless both ends are finite and `start < end`.
    pub fn new(start: f64, end: f64) -> error::Result<Self> {
        validate_interval(start, end, "domain")?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}

impl Default for Domain {
    /// `[−10, 10]`.
    fn default() -> Self {
        Self {
            start: -10.0,
            end: 10.0,
        }
    }
}

/// `count` points `(x, f(x))` spaced evenly across a [`Domain`].
///
/// # Examples
/// ```
/// use parabola::Coefficients;
/// use parabola::analysis::SampleTable;
///
/// let q = Coefficients::new(1.0, 0.0, 0.0)?;
/// let table = SampleTable::standard(q);
/// assert_eq!(table.len(), 21);
///
/// let first = table.iter().next().unwrap();
/// assert_eq!((first.x, first.y), (-10.0, 100.0));
///
/// // Restartable: a second pass yields the same points.
/// assert_eq!(table.iter().count(), table.iter().count());
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    coefficients: Coefficients,
    domain: Domain,
    count: usize,
}

impl SampleTable {
    pub fn new(coefficients: Coefficients, domain: Domain, count: usize) -> Self {
        Self {
            coefficients,
            domain,
            count,
        }
    }

    /// 21 points over `[−10, 10]`, one unit apart.
    pub fn standard(coefficients: Coefficients) -> Self {
        Self::new(coefficients, Domain::default(), DEFAULT_SAMPLE_COUNT)
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Spacing between consecutive x-values; `None` with fewer than two points.
    pub fn step(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.domain.width() / (self.count - 1) as f64)
    }

    /// The i-th x-value. The last one is exactly `domain.end()`.
    fn x_at(&self, i: usize) -> f64 {
        match self.step() {
            None => self.domain.start,
            Some(_) if i + 1 == self.count => self.domain.end,
            Some(step) => self.domain.start + step * i as f64,
        }
    }

    fn point_at(&self, i: usize) -> Point {
        let x = self.x_at(i);
        Point::new(x, self.coefficients.eval(x))
    }

    /// A fresh iterator over the table's points.
    pub fn iter(&self) -> SamplePoints {
        SamplePoints {
            table: *self,
            front: 0,
            back: self.count,
        }
    }

    /// Collect the points.
    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a SampleTable {
    type Item = Point;
    type IntoIter = SamplePoints;

    fn into_iter(self) -> SamplePoints {
        self.iter()
    }
}

/// Lazy iterator over the points of a [`SampleTable`].
#[derive(Debug, Clone)]
pub struct SamplePoints {
    table: SampleTable,
    front: usize,
    back: usize,
}

impl Iterator for SamplePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        let p = self.table.point_at(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SamplePoints {
    fn next_back(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.table.point_at(self.back))
    }
}

impl ExactSizeIterator for SamplePoints {}

impl FusedIterator for SamplePoints {}

/// Build a table of `count` points of `a·x² + b·x + c` over `[start, end]`.
///
/// # Errors
/// Returns [`ParabolaError::InvalidInput`](crate::ParabolaError::InvalidInput)
/// for non-finite coefficients, an empty/reversed domain, or a `count`
/// above [`MAX_SAMPLE_COUNT`].
pub fn sample_table(
    a: f64,
    b: f64,
    c: f64,
    start: f64,
    end: f64,
    count: usize,
) -> error::Result<SampleTable> {
    let coefficients = Coefficients::new(a, b, c)?;
    let domain = Domain::new(start, end)?;
    validate_at_most(count, MAX_SAMPLE_COUNT, "table count")?;

    #[cfg(feature = "logging")]
    tracing::debug!(start, end, count, "sample table built");

    Ok(SampleTable::new(coefficients, domain, count))
}
