//! Caption Widget
//!
//! Static observations under the chart. The text does not depend on the data.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const CAPTION_TITLE: &str = " Observations ";

pub const CAPTION: &str = "The approximation line shows how the partial sums approach the true \
value of π (dotted line). Notice how convergence is faster at first and then slows down.";

/// The caption widget
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionPane;

impl Widget for &CaptionPane {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::styled(
                CAPTION_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        Paragraph::new(CAPTION)
            .style(Style::default().fg(Color::White))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_render() {
        let area = Rect::new(0, 0, 200, 3);
        let mut buf = Buffer::empty(area);
        (&CaptionPane).render(area, &mut buf);

        let row: String = (0..200)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("The approximation line shows"));
    }
}
