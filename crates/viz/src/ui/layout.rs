//! Layout Manager
//!
//! Stacks the slider, the chart row, the caption and the status bar
//! vertically. The chart row is split horizontally between the chart (left)
//! and the value inspector (right).

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout configuration
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Percentage of the chart row given to the inspector (0-100)
    pub inspector_width_percent: u16,
    /// Minimum chart width before the inspector is dropped
    pub min_chart_width: u16,
    /// Height of the slider pane (including border)
    pub slider_height: u16,
    /// Height of the caption pane (including border)
    pub caption_height: u16,
    /// Height reserved for status bar
    pub status_bar_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inspector_width_percent: 28,
            min_chart_width: 40,
            slider_height: 3,
            caption_height: 4,
            status_bar_height: 1,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inspector width percentage
    pub fn inspector_width(mut self, percent: u16) -> Self {
        self.inspector_width_percent = percent.clamp(10, 60);
        self
    }
}

/// The computed layout areas
#[derive(Debug, Clone, Copy)]
pub struct ComputedLayout {
    pub slider: Rect,
    pub chart: Rect,
    /// Empty when hidden or when the terminal is too narrow
    pub inspector: Rect,
    pub caption: Rect,
    pub status: Rect,
}

impl ComputedLayout {
    /// Compute the layout for a given terminal area
    pub fn compute(area: Rect, config: &LayoutConfig, show_inspector: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(config.slider_height),
                Constraint::Min(0),
                Constraint::Length(config.caption_height),
                Constraint::Length(config.status_bar_height),
            ])
            .split(area);

        let chart_row = rows[1];

        // The inspector needs its share plus a usable chart beside it
        let inspector_width =
            (chart_row.width as u32 * config.inspector_width_percent as u32 / 100) as u16;
        let fits = chart_row.width.saturating_sub(inspector_width) >= config.min_chart_width;

        let (chart, inspector) = if show_inspector && fits {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(100 - config.inspector_width_percent),
                    Constraint::Percentage(config.inspector_width_percent),
                ])
                .split(chart_row);
            (columns[0], columns[1])
        } else {
            (chart_row, Rect::default())
        };

        Self {
            slider: rows[0],
            chart,
            inspector,
            caption: rows[2],
            status: rows[3],
        }
    }

    /// Check if the inspector pane is visible
    pub fn inspector_visible(&self) -> bool {
        self.inspector.width > 0 && self.inspector.height > 0
    }
}

/// Status bar content
#[derive(Debug, Clone, Default)]
pub struct StatusContent {
    /// Application name shown on the left
    pub title: String,
    /// Current term count
    pub terms: String,
    /// Error after the last term
    pub error: String,
    /// Key hint shown on the right
    pub hint: String,
}

impl StatusContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Format for display
    pub fn format(&self, width: u16) -> String {
        let left = format!(" {} ", self.title);
        let middle = format!("terms {} | error {}", self.terms, self.error);
        let right = format!(" {} ", self.hint);

        let padding_needed = (width as usize)
            .saturating_sub(left.chars().count())
            .saturating_sub(middle.chars().count())
            .saturating_sub(right.chars().count());

        let left_pad = padding_needed / 2;
        let right_pad = padding_needed - left_pad;

        format!(
            "{}{}{}{}{}",
            left,
            " ".repeat(left_pad),
            middle,
            " ".repeat(right_pad),
            right
        )
    }
}
