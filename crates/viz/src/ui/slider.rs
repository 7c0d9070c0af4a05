//! Slider Widget
//!
//! Range control for the term count: a line gauge between the bounds, with
//! the current value in the title.

use leibniz_series::TermCount;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph, Widget},
};

/// The slider widget
pub struct SliderPane {
    terms: TermCount,
}

impl SliderPane {
    pub fn new(terms: TermCount) -> Self {
        Self { terms }
    }

    fn title(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" Number of terms: "),
            Span::styled(
                self.terms.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ])
    }
}

impl Widget for &SliderPane {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let min_label = format!("{} ", TermCount::min());
        let max_label = format!(" {}", TermCount::max());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(min_label.len() as u16),
                Constraint::Min(0),
                Constraint::Length(max_label.len() as u16),
            ])
            .split(inner);

        let bound_style = Style::default().fg(Color::Gray);
        Paragraph::new(Span::styled(min_label, bound_style)).render(columns[0], buf);
        Paragraph::new(Span::styled(max_label, bound_style)).render(columns[2], buf);

        LineGauge::default()
            .ratio(self.terms.ratio())
            .label("")
            .line_set(symbols::line::THICK)
            .filled_style(Style::default().fg(Color::Rgb(0x88, 0x84, 0xd8)))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .render(columns[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_slider_render() {
        let pane = SliderPane::new(TermCount::default());
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        (&pane).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Number of terms: 20"));
        let gauge_row = row_text(&buf, 1);
        assert!(gauge_row.contains("1 "));
        assert!(gauge_row.contains(" 50"));
    }

    #[test]
    fn test_slider_at_bounds() {
        for terms in [TermCount::min(), TermCount::max()] {
            let pane = SliderPane::new(terms);
            let area = Rect::new(0, 0, 30, 3);
            let mut buf = Buffer::empty(area);
            (&pane).render(area, &mut buf);
            assert!(row_text(&buf, 0).contains(&format!("Number of terms: {}", terms)));
        }
    }
}
