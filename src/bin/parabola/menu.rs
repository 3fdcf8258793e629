//! Interactive two-option menu.

use std::io::{self, BufRead, Write};

use parabola::Coefficients;

use crate::OutputOptions;
use crate::input::{parse_choice, parse_number, parse_point, prompt};

const MENU: &str = "\
Choose an option:
1. Graph a quadratic equation and find its features (intercepts, vertex, symmetry, direction).
2. Find the quadratic equation from 3 points.";

/// Run one menu round: pick a mode, collect its inputs, print the results.
///
/// End of input at any prompt ends the session without output.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, opts: &OutputOptions) -> io::Result<()> {
    writeln!(out, "{MENU}")?;
    let Some(choice) = prompt(input, out, "Enter your choice (1 or 2): ", parse_choice)? else {
        return Ok(());
    };
    tracing::debug!(choice, "menu choice");

    match choice {
        1 => {
            writeln!(out, "You chose quadratic equation graphing.")?;
            let mut coefs = [0.0; 3];
            let prompts = [
                "Enter the coefficient a (x² term): ",
                "Enter the coefficient b (x term): ",
                "Enter the constant c: ",
            ];
            for (slot, message) in coefs.iter_mut().zip(prompts) {
                match prompt(input, out, message, parse_number)? {
                    Some(v) => *slot = v,
                    None => return Ok(()),
                }
            }
            match Coefficients::new(coefs[0], coefs[1], coefs[2]) {
                Ok(q) => crate::show_analysis(q, opts, out),
                Err(e) => writeln!(out, "{}", crate::describe(&e)),
            }
        }
        2 => {
            writeln!(out, "You chose finding the quadratic equation from 3 points.")?;
            let mut points = Vec::with_capacity(3);
            for ordinal in ["first", "second", "third"] {
                let n = points.len() + 1;
                let message =
                    format!("Enter the {ordinal} point (x{n}, y{n}) as space-separated values: ");
                match prompt(input, out, &message, parse_point)? {
                    Some(p) => points.push(p),
                    None => return Ok(()),
                }
            }
            crate::show_fit(points[0], points[1], points[2], opts, out)
        }
        _ => writeln!(out, "Invalid choice. Please try again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn session(input: &str, args: &[&str]) -> String {
        let cli = crate::Cli::parse_from(std::iter::once("parabola").chain(args.iter().copied()));
        let mut out = Vec::new();
        run(&mut Cursor::new(input.to_string()), &mut out, &cli.output).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn coefficient_mode_prints_features_and_table() {
        let text = session("1\n1\n0\n-4\n", &["--no-chart"]);
        assert!(text.starts_with("Choose an option:\n"));
        assert!(text.contains("You chose quadratic equation graphing."));
        assert!(text.contains("x-intercepts (roots): [-2, 2]"));
        assert!(text.contains("Vertex: (0, -4)"));
        assert!(text.contains("Axis of symmetry: x = 0"));
        assert!(text.contains("The parabola opens upwards."));
        assert!(text.contains("Table of (x, y) values:"));
        assert!(!text.contains("Graph of"));
    }

    #[test]
    fn coefficient_mode_reprompts_on_bad_number() {
        let text = session("1\nabc\n2\n0\n0\n", &["--no-chart", "--no-table"]);
        assert!(text.contains("Invalid input: 'abc' is not a number. Please try again."));
        assert!(text.contains("Vertex: (0, 0)"));
    }

    #[test]
    fn coefficient_mode_degenerate() {
        let text = session("1\n0\n2\n3\n", &["--no-table"]);
        assert!(text.contains("Vertex: undefined"));
        assert!(text.contains("This is not a valid quadratic equation."));
        assert!(text.contains("Graph of"));
    }

    #[test]
    fn points_mode_prints_equation_table_chart() {
        let text = session("2\n0 1\n1 4\n2 9\n", &[]);
        assert!(text.contains("You chose finding the quadratic equation from 3 points."));
        assert!(text.contains("The quadratic equation is: y = 1.00x² + 2.00x + 1.00"));
        let eq = text.find("The quadratic equation is").unwrap();
        let table = text.find("Table of (x, y) values:").unwrap();
        let chart = text.find("Graph of").unwrap();
        assert!(eq < table && table < chart);
    }

    #[test]
    fn points_mode_singular() {
        let text = session("2\n1 5\n1 7\n2 9\n", &[]);
        assert!(text.contains("No unique quadratic passes through these points"));
        assert!(!text.contains("Table of"));
    }

    #[test]
    fn invalid_choice_terminates() {
        let text = session("3\n", &[]);
        assert!(text.ends_with("Invalid choice. Please try again.\n"));
    }

    #[test]
    fn non_numeric_choice_reprompts() {
        let text = session("one\n3\n", &[]);
        assert!(text.contains("Invalid input: 'one' is not a number."));
        assert!(text.ends_with("Invalid choice. Please try again.\n"));
    }

    #[test]
    fn eof_ends_session_quietly() {
        let text = session("1\n2\n", &[]);
        assert!(!text.contains("Vertex"));
    }
}
