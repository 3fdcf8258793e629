//! Recover a quadratic from three points and tabulate it.
//!
//! Run with: `cargo run --example fit_points`

use parabola::analysis::{Domain, SampleTable};
use parabola::present;
use parabola::{Analysis, Point, fit_quadratic};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let points = [
        Point::new(-2.0, 3.0),
        Point::new(1.0, -1.5),
        Point::new(4.0, 9.0),
    ];

    let q = fit_quadratic(points[0], points[1], points[2])?;
    println!("{}", present::equation_line(&q));
    for p in &points {
        println!("  f({}) = {:.6} (expected {})", p.x, q.eval(p.x), p.y);
    }

    let analysis = Analysis::of(q);
    println!();
    print!("{}", present::report(&analysis));

    let table = SampleTable::new(q, Domain::new(-4.0, 6.0)?, 11);
    println!();
    print!("{}", present::value_table(&table));

    // Two points sharing an x-value cannot determine a unique quadratic.
    let err = fit_quadratic(Point::new(1.0, 5.0), Point::new(1.0, 7.0), Point::new(2.0, 9.0))
        .unwrap_err();
    println!("\n{err}");

    Ok(())
}
