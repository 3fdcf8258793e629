//! `parabola` command-line front end.
//!
//! ```text
//! parabola coefficients 1 0 -4
//! parabola points 0,1 1,4 2,9
//! parabola            # interactive menu
//! ```
//!
//! Set `RUST_LOG` (or pass `-v`) for diagnostics on stderr.

mod input;
mod menu;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parabola::analysis::{DEFAULT_SAMPLE_COUNT, Domain, SampleTable, sample_table};
use parabola::present::{self, ChartConfig};
use parabola::{Analysis, Coefficients, Direction, ParabolaError, Point, fit_quadratic};

#[derive(Debug, Parser)]
#[command(
    name = "parabola",
    version,
    about = "Find the roots, vertex and axis of a quadratic, or fit one through three points"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    output: OutputOptions,

    /// Log more (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze y = ax² + bx + c.
    Coefficients {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
        #[arg(allow_hyphen_values = true)]
        c: f64,
    },
    /// Find the quadratic through three points, each written X,Y.
    Points {
        #[arg(allow_hyphen_values = true, value_parser = input::parse_point)]
        p1: Point,
        #[arg(allow_hyphen_values = true, value_parser = input::parse_point)]
        p2: Point,
        #[arg(allow_hyphen_values = true, value_parser = input::parse_point)]
        p3: Point,
    },
    /// Interactive menu (the default).
    Menu,
}

/// Presentation settings shared by every mode.
#[derive(Debug, Args)]
struct OutputOptions {
    /// Chart width in cells.
    #[arg(long, default_value_t = ChartConfig::default().width, global = true)]
    width: usize,

    /// Chart height in cells.
    #[arg(long, default_value_t = ChartConfig::default().height, global = true)]
    height: usize,

    /// Distance between chart gridlines.
    #[arg(long, default_value_t = ChartConfig::default().grid_step, global = true)]
    grid_step: f64,

    /// First x-value of the value table.
    #[arg(long, default_value_t = Domain::default().start(), allow_hyphen_values = true, global = true)]
    table_start: f64,

    /// Last x-value of the value table.
    #[arg(long, default_value_t = Domain::default().end(), allow_hyphen_values = true, global = true)]
    table_end: f64,

    /// Number of rows in the value table.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT, global = true)]
    table_count: usize,

    /// Skip the chart.
    #[arg(long, global = true)]
    no_chart: bool,

    /// Skip the value table.
    #[arg(long, global = true)]
    no_table: bool,
}

impl OutputOptions {
    fn chart_config(&self) -> ChartConfig {
        ChartConfig::default()
            .width(self.width)
            .height(self.height)
            .grid_step(self.grid_step)
    }

    fn table(&self, q: Coefficients) -> parabola::Result<SampleTable> {
        let (a, b, c) = q.as_tuple();
        sample_table(a, b, c, self.table_start, self.table_end, self.table_count)
    }
}

/// User-facing text for a library error.
fn describe(err: &ParabolaError) -> String {
    match err {
        ParabolaError::DegenerateInput { .. } => {
            format!("This is not a valid quadratic equation ({err}).")
        }
        ParabolaError::SingularSystem { message } => {
            format!("No unique quadratic passes through these points: {message}.")
        }
        _ => format!("Error: {err}"),
    }
}

fn write_chart<W: Write>(analysis: &Analysis, opts: &OutputOptions, out: &mut W) -> io::Result<()> {
    if opts.no_chart {
        return Ok(());
    }
    match present::render_chart(analysis, &opts.chart_config()) {
        Ok(chart) => writeln!(out, "{chart}"),
        Err(e) => writeln!(out, "{}", describe(&e)),
    }
}

fn write_table<W: Write>(q: Coefficients, opts: &OutputOptions, out: &mut W) -> io::Result<()> {
    if opts.no_table {
        return Ok(());
    }
    match opts.table(q) {
        Ok(table) => writeln!(out, "\n{}", present::value_table(&table)),
        Err(e) => writeln!(out, "{}", describe(&e)),
    }
}

/// Mode 1: chart, feature report, value table.
fn show_analysis<W: Write>(q: Coefficients, opts: &OutputOptions, out: &mut W) -> io::Result<()> {
    let analysis = Analysis::of(q);
    write_chart(&analysis, opts, out)?;
    write!(out, "{}", present::report(&analysis))?;
    write_table(q, opts, out)
}

/// Mode 2: fitted equation, value table, chart.
fn show_fit<W: Write>(
    p1: Point,
    p2: Point,
    p3: Point,
    opts: &OutputOptions,
    out: &mut W,
) -> io::Result<()> {
    let q = match fit_quadratic(p1, p2, p3) {
        Ok(q) => q,
        Err(e) => return writeln!(out, "{}", describe(&e)),
    };
    writeln!(out, "{}", present::equation_line(&q))?;
    if !q.is_quadratic() {
        writeln!(out, "{}", present::direction_sentence(Direction::Degenerate))?;
    }
    write_table(q, opts, out)?;
    write_chart(&Analysis::of(q), opts, out)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Some(Command::Coefficients { a, b, c }) => match Coefficients::new(a, b, c) {
            Ok(q) => show_analysis(q, &cli.output, &mut out),
            Err(e) => writeln!(out, "{}", describe(&e)),
        },
        Some(Command::Points { p1, p2, p3 }) => show_fit(p1, p2, p3, &cli.output, &mut out),
        Some(Command::Menu) | None => menu::run(&mut io::stdin().lock(), &mut out, &cli.output),
    };

    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "output failed");
            eprintln!("parabola: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("parabola").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn coefficients_accept_negative_values() {
        let cli = parse(&["coefficients", "1", "-3", "-4.5"]);
        match cli.command {
            Some(Command::Coefficients { a, b, c }) => assert_eq!((a, b, c), (1.0, -3.0, -4.5)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn points_parse_as_pairs() {
        let cli = parse(&["points", "0,1", "-1,4", "2,9", "--no-chart"]);
        match cli.command {
            Some(Command::Points { p1, p2, p3 }) => {
                assert_eq!(p1, Point::new(0.0, 1.0));
                assert_eq!(p2, Point::new(-1.0, 4.0));
                assert_eq!(p3, Point::new(2.0, 9.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(cli.output.no_chart);
    }

    #[test]
    fn malformed_point_is_a_usage_error() {
        let r = Cli::try_parse_from(["parabola", "points", "0,1", "1", "2,9"]);
        assert!(r.is_err());
    }

    #[test]
    fn defaults_match_library_defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.output.chart_config(), ChartConfig::default());
        assert_eq!(cli.output.table_count, 21);
        assert_eq!((cli.output.table_start, cli.output.table_end), (-10.0, 10.0));
    }

    #[test]
    fn analysis_output_order() {
        let cli = parse(&[]);
        let q = Coefficients::new(1.0, 0.0, -4.0).unwrap();
        let text = run_to_string(|out| show_analysis(q, &cli.output, out));
        let chart = text.find("Graph of").unwrap();
        let report = text.find("x-intercepts (roots)").unwrap();
        let table = text.find("Table of (x, y) values:").unwrap();
        assert!(chart < report && report < table);
    }

    #[test]
    fn bad_table_domain_is_reported() {
        let cli = parse(&["--table-start", "5", "--table-end", "-5", "--no-chart"]);
        let q = Coefficients::new(1.0, 0.0, 0.0).unwrap();
        let text = run_to_string(|out| show_analysis(q, &cli.output, out));
        assert!(text.contains("Error: invalid input"));
    }

    #[test]
    fn oversized_flags_are_reported_not_fatal() {
        let cli = parse(&["--grid-step", "1e-300", "--table-count", "18446744073709551615"]);
        let q = Coefficients::new(1.0, 0.0, 0.0).unwrap();
        let text = run_to_string(|out| show_analysis(q, &cli.output, out));
        assert!(text.contains("grid step"));
        assert!(text.contains("table count must be at most"));
        assert!(text.contains("Vertex: (0, 0)"));
    }

    #[test]
    fn collinear_points_flagged_degenerate() {
        let cli = parse(&["--no-chart", "--no-table"]);
        let text = run_to_string(|out| {
            show_fit(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
                &cli.output,
                out,
            )
        });
        assert!(text.contains("This is not a valid quadratic equation."));
    }

    #[test]
    fn describe_singular() {
        let err = ParabolaError::SingularSystem {
            message: "points 1 and 2 share x = 1".into(),
        };
        assert_eq!(
            describe(&err),
            "No unique quadratic passes through these points: points 1 and 2 share x = 1."
        );
    }
}
