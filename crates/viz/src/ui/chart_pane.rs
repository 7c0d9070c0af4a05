//! Chart Pane Widget
//!
//! Plots the running partial sums against the constant π line. Both series
//! share the term-index x-axis; the y-axis is pinned to `[2, 4]`, the band
//! the partial sums stay in after the first term. Faint dotted lines at the
//! inner y ticks play the part of a background grid.

use leibniz_series::ApproximationPoint;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

/// Visible y-range of the chart
pub const Y_BOUNDS: [f64; 2] = [2.0, 4.0];

/// Color of the approximation line
pub const APPROXIMATION_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);

/// Color of the π line
pub const REFERENCE_COLOR: Color = Color::Rgb(0x82, 0xca, 0x9d);

/// Color of the horizontal grid lines
pub const GRID_COLOR: Color = Color::DarkGray;

/// Y-axis label values; the inner ones also get a grid line
pub const Y_TICKS: [f64; 5] = [2.0, 2.5, 3.0, 3.5, 4.0];

pub const APPROXIMATION_LABEL: &str = "Approximation";
pub const REFERENCE_LABEL: &str = "True value of π";

/// Chart-ready copy of a sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartContent {
    /// `(term_index, partial_sum)` pairs
    pub approximation: Vec<(f64, f64)>,
    /// `(term_index, π)` pairs
    pub reference: Vec<(f64, f64)>,
}

impl ChartContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build both series from a generated sequence
    pub fn from_points(points: &[ApproximationPoint]) -> Self {
        let approximation = points
            .iter()
            .map(|p| (p.term_index as f64, p.partial_sum))
            .collect();
        let reference = points
            .iter()
            .map(|p| (p.term_index as f64, p.reference))
            .collect();
        Self {
            approximation,
            reference,
        }
    }

    /// Number of points in each series
    pub fn len(&self) -> usize {
        self.approximation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approximation.is_empty()
    }

    /// X-axis bounds: `[1, terms]`, widened so a single point still has a range
    pub fn x_bounds(&self) -> [f64; 2] {
        [1.0, self.len().max(2) as f64]
    }

    /// Horizontal grid segments across the x-range, one per inner y tick
    pub fn grid_lines(&self) -> Vec<[(f64, f64); 2]> {
        let [lo, hi] = self.x_bounds();
        Y_TICKS[1..Y_TICKS.len() - 1]
            .iter()
            .map(|&y| [(lo, y), (hi, y)])
            .collect()
    }
}

/// The chart pane widget
pub struct ChartPane<'a> {
    content: &'a ChartContent,
    /// Glyph for the approximation line
    marker: Marker,
    /// 0-based index of the highlighted point
    probe: Option<usize>,
    /// Single-point series for the highlight (the dataset borrows it)
    probe_point: [(f64, f64); 1],
}

impl<'a> ChartPane<'a> {
    pub fn new(content: &'a ChartContent) -> Self {
        Self {
            content,
            marker: Marker::Braille,
            probe: None,
            probe_point: [(0.0, 0.0)],
        }
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Highlight one point (ignored when out of range)
    pub fn probe(mut self, index: usize) -> Self {
        if let Some(&point) = self.content.approximation.get(index) {
            self.probe = Some(index);
            self.probe_point = [point];
        }
        self
    }

    fn x_labels(&self) -> Vec<Span<'a>> {
        let [lo, hi] = self.content.x_bounds();
        let mid = ((lo + hi) / 2.0).round();
        let style = Style::default().fg(Color::Gray);
        let mut labels = vec![Span::styled(format!("{}", lo), style)];
        if mid > lo && mid < hi {
            labels.push(Span::styled(format!("{}", mid), style));
        }
        labels.push(Span::styled(format!("{}", hi), style));
        labels
    }
}

fn y_labels() -> Vec<Span<'static>> {
    let style = Style::default().fg(Color::Gray);
    Y_TICKS
        .iter()
        .map(|y| Span::styled(format!("{:.1}", y), style))
        .collect()
}

impl Widget for &ChartPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = self.content.grid_lines();
        // Unnamed, so they stay out of the legend; drawn first so the series cover them
        let mut datasets: Vec<Dataset> = grid
            .iter()
            .map(|segment| {
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(GRID_COLOR))
                    .data(segment)
            })
            .collect();

        datasets.extend([
            Dataset::default()
                .name(APPROXIMATION_LABEL)
                .marker(self.marker)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(APPROXIMATION_COLOR))
                .data(&self.content.approximation),
            // Dots stand in for a dashed stroke
            Dataset::default()
                .name(REFERENCE_LABEL)
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(REFERENCE_COLOR))
                .data(&self.content.reference),
        ]);

        if self.probe.is_some() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::Yellow))
                    .data(&self.probe_point),
            );
        }

        let block = Block::default()
            .title(Line::from(" Leibniz series vs π ").alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Number of terms")
                    .style(Style::default().fg(Color::Gray))
                    .bounds(self.content.x_bounds())
                    .labels(self.x_labels()),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "Value",
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .style(Style::default().fg(Color::Gray))
                    .bounds(Y_BOUNDS)
                    .labels(y_labels()),
            )
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        chart.render(area, buf);
    }
}
