//! Text-mode chart of a quadratic.
//!
//! Layers, back to front: gridlines (`·`) at equal intervals, the x/y axes
//! (`-`, `|`, `+` at the origin), the axis of symmetry (`:`), the curve
//! (`*`), then the y-intercept (`Y`), x-intercepts (`X`) and vertex (`V`).
//! Anything outside the configured bounds is clipped.

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::error::{self, ParabolaError};
use crate::present::number;
use crate::present::scale::{LinearScale, Viewport};
use crate::validate::validate_at_most;

/// Largest accepted chart width or height, in cells.
pub const MAX_CHART_CELLS: usize = 1_000;
/// Largest accepted number of curve samples.
pub const MAX_CHART_SAMPLES: usize = 100_000;

/// Chart geometry and sampling.
///
/// # Examples
/// ```
/// use parabola::present::ChartConfig;
///
/// let config = ChartConfig::default().width(41).height(21).grid_step(5.0);
/// assert_eq!(config.x_range, (-10.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Plot area width in cells.
    pub width: usize,
    /// Plot area height in cells.
    pub height: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Distance between gridlines, in chart units.
    pub grid_step: f64,
    /// Number of points evaluated along the curve.
    pub samples: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 61,
            height: 31,
            x_range: (-10.0, 10.0),
            y_range: (-10.0, 10.0),
            grid_step: 2.0,
            samples: 400,
        }
    }
}

impl ChartConfig {
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = (min, max);
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = (min, max);
        self
    }

    pub fn grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    fn viewport(&self) -> error::Result<Viewport> {
        if self.width < 2 || self.height < 2 {
            return Err(ParabolaError::InvalidInput {
                message: format!(
                    "chart must be at least 2x2 cells, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if self.samples < 2 {
            return Err(ParabolaError::InvalidInput {
                message: format!("chart needs at least 2 samples, got {}", self.samples),
            });
        }
        validate_at_most(self.width, MAX_CHART_CELLS, "chart width")?;
        validate_at_most(self.height, MAX_CHART_CELLS, "chart height")?;
        validate_at_most(self.samples, MAX_CHART_SAMPLES, "chart samples")?;
        Ok(Viewport {
            x: LinearScale::new(self.x_range.0, self.x_range.1)?,
            y: LinearScale::new(self.y_range.0, self.y_range.1)?,
            width: self.width,
            height: self.height,
        })
    }
}

/// Row-major grid of characters.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, ch: char) {
        self.cells[row * self.width + col] = ch;
    }

    fn row_string(&self, row: usize) -> String {
        self.cells[row * self.width..(row + 1) * self.width]
            .iter()
            .collect()
    }
}

/// Rasterize the analysis onto a canvas.
pub(crate) fn draw(analysis: &Analysis, config: &ChartConfig) -> error::Result<Canvas> {
    let vp = config.viewport()?;
    let x_ticks = vp.x.ticks(config.grid_step)?;
    let y_ticks = vp.y.ticks(config.grid_step)?;
    let mut canvas = Canvas::new(vp.width, vp.height);
    let last_row = (vp.height - 1) as f64;

    for &ty in &y_ticks {
        for &tx in &x_ticks {
            if let Some((r, c)) = vp.cell(tx, ty) {
                canvas.set(r, c, '·');
            }
        }
    }

    let origin_row = vp.y.contains(0.0).then(|| vp.row(0.0).round() as usize);
    let origin_col = vp.x.contains(0.0).then(|| vp.column(0.0).round() as usize);
    if let Some(r) = origin_row {
        for c in 0..vp.width {
            canvas.set(r, c, '-');
        }
    }
    if let Some(c) = origin_col {
        for r in 0..vp.height {
            canvas.set(r, c, '|');
        }
    }
    if let (Some(r), Some(c)) = (origin_row, origin_col) {
        canvas.set(r, c, '+');
    }

    if let Some(axis) = analysis.axis().filter(|a| vp.x.contains(a.0)) {
        let c = vp.column(axis.0).round() as usize;
        for r in 0..vp.height {
            if matches!(canvas.get(r, c), ' ' | '·') {
                canvas.set(r, c, ':');
            }
        }
    }

    // Curve: connect consecutive samples vertically so steep parts stay solid.
    let q = analysis.coefficients;
    let (x0, x1) = config.x_range;
    let mut prev_row: Option<f64> = None;
    for i in 0..config.samples {
        let x = x0 + (x1 - x0) * i as f64 / (config.samples - 1) as f64;
        let col = vp.column(x).round();
        let row = vp.row(q.eval(x));
        if !row.is_finite() || col < 0.0 || col > (vp.width - 1) as f64 {
            prev_row = None;
            continue;
        }
        let (lo, hi) = match prev_row {
            Some(p) => (p.min(row), p.max(row)),
            None => (row, row),
        };
        let (lo, hi) = (lo.round().max(0.0), hi.round().min(last_row));
        if lo <= hi {
            for r in lo as usize..=hi as usize {
                canvas.set(r, col as usize, '*');
            }
        }
        prev_row = Some(row);
    }

    if let Some((r, c)) = vp.cell(0.0, analysis.y_intercept) {
        canvas.set(r, c, 'Y');
    }
    for root in analysis.x_intercepts() {
        if let Some((r, c)) = vp.cell(root, 0.0) {
            canvas.set(r, c, 'X');
        }
    }
    if let Some(v) = analysis.vertex() {
        if let Some((r, c)) = vp.cell(v.x, v.y) {
            canvas.set(r, c, 'V');
        }
    }

    Ok(canvas)
}

/// Render the chart with its title, tick labels and legend.
///
/// # Examples
/// ```
/// use parabola::{Analysis, Coefficients};
/// use parabola::present::{ChartConfig, render_chart};
///
/// let analysis = Analysis::of(Coefficients::new(1.0, 0.0, -4.0)?);
/// let chart = render_chart(&analysis, &ChartConfig::default())?;
/// assert!(chart.starts_with("Graph of y = 1.00x² + 0.00x - 4.00"));
/// assert!(chart.contains('V'));
/// # Ok::<(), parabola::ParabolaError>(())
/// ```
///
/// # Errors
/// Returns [`ParabolaError::InvalidInput`] for an unusable [`ChartConfig`]
/// (fewer than 2×2 cells or 2 samples, empty ranges, non-positive grid step),
/// or one beyond [`MAX_CHART_CELLS`], [`MAX_CHART_SAMPLES`] or
/// [`MAX_TICKS`](crate::present::scale::MAX_TICKS).
pub fn render_chart(analysis: &Analysis, config: &ChartConfig) -> error::Result<String> {
    let canvas = draw(analysis, config)?;
    let vp = config.viewport()?;

    let y_labels: Vec<(usize, String)> = vp
        .y
        .ticks(config.grid_step)?
        .into_iter()
        .map(|ty| (vp.row(ty).round() as usize, number(ty)))
        .collect();
    let margin = y_labels.iter().map(|(_, l)| l.chars().count()).max().unwrap_or(0);

    let mut out = format!("Graph of {}\n\n", analysis.coefficients);
    for r in 0..canvas.height {
        let label = y_labels
            .iter()
            .find(|(row, _)| *row == r)
            .map(|(_, l)| l.as_str())
            .unwrap_or("");
        let line = format!("{label:>margin$} {}", canvas.row_string(r));
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let mut axis_line = vec![' '; margin + 1 + canvas.width + 8];
    let mut next_free = 0;
    for tx in vp.x.ticks(config.grid_step)? {
        let label: Vec<char> = number(tx).chars().collect();
        let center = margin + 1 + vp.column(tx).round() as usize;
        let start = center.saturating_sub(label.len() / 2);
        if start < next_free || start + label.len() > axis_line.len() {
            continue;
        }
        axis_line[start..start + label.len()].copy_from_slice(&label);
        next_free = start + label.len() + 1;
    }
    out.push_str(axis_line.iter().collect::<String>().trim_end());
    out.push_str("\n\n");

    out.push_str(&legend(analysis));

    #[cfg(feature = "logging")]
    tracing::debug!(width = config.width, height = config.height, "chart rendered");

    Ok(out)
}

fn legend(analysis: &Analysis) -> String {
    let intercepts = analysis.x_intercepts();
    let roots = if intercepts.is_empty() {
        "none".to_string()
    } else {
        intercepts.iter().map(|&x| number(x)).collect::<Vec<_>>().join(", ")
    };

    let mut lines = vec![
        format!("  * {}", analysis.coefficients),
        format!("  X x-intercepts: {roots}"),
        format!("  Y y-intercept: (0, {})", number(analysis.y_intercept)),
    ];
    match (analysis.vertex(), analysis.axis()) {
        (Some(v), Some(axis)) => {
            lines.push(format!("  V vertex: ({}, {})", number(v.x), number(v.y)));
            lines.push(format!("  : axis of symmetry: x = {}", number(axis.0)));
        }
        _ => lines.push("  (a = 0: not a quadratic, no vertex or axis of symmetry)".into()),
    }
    let mut s = lines.join("\n");
    s.push('\n');
    s
}
