//! Analyze a few quadratics from their coefficients.
//!
//! Shows how to:
//!   - Query roots, vertex, axis and direction one by one
//!   - Bundle them with `Analysis::of` and print the text report
//!   - Handle the degenerate `a = 0` case
//!
//! Run with: `cargo run --example analyze`

use parabola::analysis::{self, Roots};
use parabola::present::{self, ChartConfig};
use parabola::{Analysis, Coefficients, ParabolaError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ---------------------------------------------------------------
    // 1. Individual derivations
    // ---------------------------------------------------------------

    let (a, b, c) = (2.0, -4.0, -6.0);
    let v = analysis::vertex(a, b, c)?;
    println!("y = {a}x² + {b}x + {c}");
    println!("  vertex:    ({}, {})", v.x, v.y);
    println!("  axis:      x = {}", analysis::axis_of_symmetry(a, b)?.0);
    println!("  direction: {}", analysis::direction(a));
    match analysis::roots(a, b, c)? {
        Roots::TwoReal(x1, x2) => println!("  roots:     {x1}, {x2}"),
        Roots::Double(x) => println!("  root:      {x} (double)"),
        Roots::ComplexPair { re, im } => println!("  roots:     {re} ± {im}i"),
    }

    // ---------------------------------------------------------------
    // 2. Full report and chart
    // ---------------------------------------------------------------

    let analysis = Analysis::of(Coefficients::new(-0.5, 1.0, 4.0)?);
    println!();
    print!("{}", present::report(&analysis));
    println!();
    print!(
        "{}",
        present::render_chart(&analysis, &ChartConfig::default().width(41).height(21))?
    );

    // ---------------------------------------------------------------
    // 3. Degenerate input
    // ---------------------------------------------------------------

    println!();
    match analysis::vertex(0.0, 3.0, 1.0) {
        Err(ParabolaError::DegenerateInput { message }) => println!("a = 0: {message}"),
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
