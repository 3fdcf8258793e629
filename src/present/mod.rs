//! Console presentation of analysis results.
//!
//! Consumes the plain data produced by [`analysis`](crate::analysis) and
//! [`fit`](crate::fit); nothing in the core depends on this module.
//!
//! - [`report`] — roots, intercepts, vertex, axis and direction as text
//! - [`value_table`] — the `(x, y)` table
//! - [`render_chart`] — a text-mode plot (see [`chart`])

pub mod chart;
pub mod scale;

pub use chart::{ChartConfig, render_chart};
pub use scale::{LinearScale, Viewport};

use crate::analysis::{Analysis, Roots, SampleTable};
use crate::types::{Coefficients, Direction};

/// Format a number with at most four decimals, dropping trailing zeros.
///
/// ```
/// use parabola::present::number;
/// assert_eq!(number(2.0), "2");
/// assert_eq!(number(-0.5), "-0.5");
/// assert_eq!(number(1.0 / 3.0), "0.3333");
/// assert_eq!(number(-0.0), "0");
/// ```
pub fn number(x: f64) -> String {
    let s = format!("{x:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn direction_sentence(direction: Direction) -> &'static str {
    match direction {
        Direction::Upward => "The parabola opens upwards.",
        Direction::Downward => "The parabola opens downwards.",
        Direction::Degenerate => "This is not a valid quadratic equation.",
    }
}

/// `[-2, 2]`, `[-1]`, or `none (complex roots: -1 ± 2i)`.
pub fn format_roots(roots: &Roots) -> String {
    match *roots {
        Roots::TwoReal(x1, x2) => format!("[{}, {}]", number(x1), number(x2)),
        Roots::Double(x) => format!("[{}] (double root)", number(x)),
        Roots::ComplexPair { re, im } => {
            format!("none (complex roots: {} ± {}i)", number(re), number(im))
        }
    }
}

/// `The quadratic equation is: y = …`.
pub fn equation_line(q: &Coefficients) -> String {
    format!("The quadratic equation is: {q}")
}

/// Textual summary of the features of one quadratic.
///
/// # Examples
/// ```
/// use parabola::{Analysis, Coefficients};
/// use parabola::present::report;
///
/// let text = report(&Analysis::of(Coefficients::new(1.0, 0.0, -4.0)?));
/// assert!(text.contains("x-intercepts (roots): [-2, 2]"));
/// assert!(text.contains("Vertex: (0, -4)"));
/// assert!(text.contains("The parabola opens upwards."));
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
pub fn report(analysis: &Analysis) -> String {
    let mut lines = Vec::with_capacity(5);
    match (analysis.roots(), analysis.vertex(), analysis.axis()) {
        (Some(roots), Some(v), Some(axis)) => {
            lines.push(format!("x-intercepts (roots): {}", format_roots(&roots)));
            lines.push(format!("y-intercept: {}", number(analysis.y_intercept)));
            lines.push(format!("Vertex: ({}, {})", number(v.x), number(v.y)));
            lines.push(format!("Axis of symmetry: x = {}", number(axis.0)));
        }
        _ => {
            lines.push("x-intercepts (roots): undefined, a = 0 is not a quadratic".to_string());
            lines.push(format!("y-intercept: {}", number(analysis.y_intercept)));
            lines.push("Vertex: undefined (a = 0)".to_string());
            lines.push("Axis of symmetry: undefined (a = 0)".to_string());
        }
    }
    lines.push(direction_sentence(analysis.direction).to_string());
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

/// The value table, x and y left-aligned in 10-character columns.
///
/// ```text
/// Table of (x, y) values:
/// x          y
/// -10        96.00
/// ```
pub fn value_table(table: &SampleTable) -> String {
    let mut out = String::from("Table of (x, y) values:\n");
    out.push_str(format!("{:<10} {:<10}", "x", "y").trim_end());
    out.push('\n');
    for p in table {
        out.push_str(format!("{:<10} {:<10.2}", number(p.x), p.y).trim_end());
        out.push('\n');
    }
    out
}
