//! Inspector Pane Widget
//!
//! Shows the exact values behind one point of the chart, the way a hover
//! tooltip would: term index, approximation, π, absolute and signed error,
//! and which side of π the approximation is on.

use leibniz_series::ApproximationPoint;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Digits after the decimal point for displayed values
const PRECISION: usize = 10;

/// The inspector pane widget
pub struct InspectorPane<'a> {
    point: Option<&'a ApproximationPoint>,
    /// Whether the user moved the probe away from the last point
    pinned: bool,
}

impl<'a> InspectorPane<'a> {
    pub fn new(point: Option<&'a ApproximationPoint>) -> Self {
        Self {
            point,
            pinned: false,
        }
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    fn row(label: &str, value: String, style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<8}", label), Style::default().fg(Color::Gray)),
            Span::styled(value, style),
        ])
    }

    /// Build the display lines
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let Some(point) = self.point else {
            return vec![Line::from(Span::styled(
                "(no data)",
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let value_style = Style::default().fg(Color::White);
        let signed_error = point.signed_error();
        let (side, side_color) = if signed_error > 0.0 {
            ("above π", Color::Red)
        } else {
            ("below π", Color::Blue)
        };

        vec![
            Self::row(
                "Terms",
                point.term_index.to_string(),
                value_style.add_modifier(Modifier::BOLD),
            ),
            Self::row(
                "Approx",
                format!("{:.*}", PRECISION, point.partial_sum),
                Style::default().fg(Color::Rgb(0x88, 0x84, 0xd8)),
            ),
            Self::row(
                "π",
                format!("{:.*}", PRECISION, point.reference),
                Style::default().fg(Color::Rgb(0x82, 0xca, 0x9d)),
            ),
            Self::row(
                "Error",
                format!("{:.*}", PRECISION, point.absolute_error),
                value_style,
            ),
            Self::row(
                "Signed",
                format!("{:+.*}", PRECISION, signed_error),
                Style::default().fg(side_color),
            ),
            Self::row("Side", side.to_string(), Style::default().fg(side_color)),
            Line::default(),
            Line::from(Span::styled(
                if self.pinned {
                    "[ ] move  (pinned)"
                } else {
                    "[ ] move  (following)"
                },
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for &InspectorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Inspector ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(self.build_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leibniz_series::generate;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_for_point() {
        let points = generate(2);
        let pane = InspectorPane::new(points.last());
        let lines: Vec<String> = pane.build_lines().iter().map(line_text).collect();

        assert!(lines[0].contains("Terms") && lines[0].contains('2'));
        assert!(lines[1].contains("2.6666666667"));
        assert!(lines[2].contains("3.1415926536"));
        assert!(lines[3].contains("0.4749259869"));
        assert!(lines[4].contains("-0.4749259869"));
        assert!(lines[5].contains("below π"));
        assert!(lines[7].contains("following"));
    }

    #[test]
    fn test_above_reference() {
        let points = generate(1);
        let pane = InspectorPane::new(points.first()).pinned(true);
        let lines: Vec<String> = pane.build_lines().iter().map(line_text).collect();
        assert!(lines[4].contains("+0.8584073464"));
        assert!(lines[5].contains("above π"));
        assert!(lines[7].contains("pinned"));
    }

    #[test]
    fn test_no_point() {
        let pane = InspectorPane::new(None);
        let lines = pane.build_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "(no data)");
    }

    #[test]
    fn test_inspector_render() {
        let points = generate(20);
        let pane = InspectorPane::new(points.get(9));
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        (&pane).render(area, &mut buf);

        // Just verify it doesn't panic
    }
}
