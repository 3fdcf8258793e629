//! Parsing of console input.
//!
//! Malformed input never reaches the library: every parser here returns an
//! [`InputError`] the menu turns into a re-prompt.

use std::io::{self, BufRead, Write};

use parabola::Point;
use thiserror::Error;

/// Input that cannot be turned into the requested value.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("no input given")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("expected {expected} values, got {got}")]
    WrongArity { expected: usize, got: usize },
}

/// A finite decimal number. `nan` and `inf` are rejected.
pub fn parse_number(s: &str) -> Result<f64, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber(s.to_string())),
    }
}

/// A whole number, for menu selection.
pub fn parse_choice(s: &str) -> Result<i64, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InputError::Empty);
    }
    s.parse::<i64>()
        .map_err(|_| InputError::NotANumber(s.to_string()))
}

/// A point written as `x y`, `x,y`, `x, y` or `(x, y)`.
pub fn parse_point(s: &str) -> Result<Point, InputError> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [] => Err(InputError::Empty),
        [x, y] => Ok(Point::new(parse_number(x)?, parse_number(y)?)),
        other => Err(InputError::WrongArity {
            expected: 2,
            got: other.len(),
        }),
    }
}

/// Print `message`, read one line and parse it, re-prompting until it parses.
///
/// Returns `Ok(None)` at end of input.
pub fn prompt<R, W, T, F>(input: &mut R, out: &mut W, message: &str, parse: F) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    let mut line = String::new();
    loop {
        write!(out, "{message}")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                tracing::debug!(input = line.trim(), error = %e, "malformed input");
                writeln!(out, "Invalid input: {e}. Please try again.")?;
            }
        }
    }
}
