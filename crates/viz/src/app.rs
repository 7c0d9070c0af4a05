//! TUI Application
//!
//! Main application state. The only state the user changes is the term
//! count; the generated sequence and the chart series are derived from it
//! and rebuilt from scratch on every change.

use crate::config::Config;
use crate::error::Result;
use crate::keys::{Command, convert_key};
use crate::ui::caption::CaptionPane;
use crate::ui::chart_pane::{ChartContent, ChartPane};
use crate::ui::inspector::InspectorPane;
use crate::ui::layout::{ComputedLayout, LayoutConfig, StatusContent};
use crate::ui::slider::SliderPane;
use crossterm::event::KeyEvent;
use leibniz_series::{ApproximationPoint, TermCount, generate};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::debug;

/// Key hint shown in the status bar
const KEY_HINT: &str = "←/→ terms  [/] inspect  r reset  q quit";

/// Main application state
pub struct App {
    /// Current term count (the slider value)
    terms: TermCount,
    /// Term count restored by `r`
    initial_terms: TermCount,
    /// Sequence for the current term count
    points: Vec<ApproximationPoint>,
    /// Chart series derived from `points`
    chart: ChartContent,
    /// Inspected point; `None` follows the last point
    probe: Option<usize>,
    /// Times the sequence was regenerated
    recomputations: u64,
    /// Layout configuration
    pub layout_config: LayoutConfig,
    /// Chart line glyph
    pub marker: Marker,
    /// Whether the inspector pane is shown
    pub show_inspector: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message (clears after next key)
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(TermCount::default())
    }
}

impl App {
    /// Create an app starting at `terms`
    pub fn new(terms: TermCount) -> Self {
        let mut app = Self {
            terms,
            initial_terms: terms,
            points: Vec::new(),
            chart: ChartContent::new(),
            probe: None,
            recomputations: 0,
            layout_config: LayoutConfig::default(),
            marker: Marker::Braille,
            show_inspector: true,
            should_quit: false,
            status_message: None,
        };
        app.recompute();
        app
    }

    /// Create an app from loaded configuration, with an optional override
    pub fn from_config(config: &Config, terms: Option<TermCount>) -> Result<Self> {
        let terms = match terms {
            Some(t) => t,
            None => config.initial_terms()?,
        };
        let mut app = Self::new(terms);
        app.marker = config.display.marker.marker();
        app.show_inspector = config.display.show_inspector;
        if let Some(percent) = config.display.inspector_width {
            app.layout_config = LayoutConfig::new().inspector_width(percent);
        }
        Ok(app)
    }

    pub fn terms(&self) -> TermCount {
        self.terms
    }

    pub fn points(&self) -> &[ApproximationPoint] {
        &self.points
    }

    pub fn chart(&self) -> &ChartContent {
        &self.chart
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Change the term count, regenerating the sequence if it differs.
    ///
    /// Returns whether anything changed.
    pub fn set_terms(&mut self, terms: TermCount) -> bool {
        if terms == self.terms {
            return false;
        }
        self.terms = terms;
        self.recompute();
        true
    }

    /// Rebuild the sequence and chart series from scratch
    fn recompute(&mut self) {
        self.points = generate(self.terms.get());
        self.chart = ChartContent::from_points(&self.points);
        self.recomputations += 1;

        // A pinned probe past the new end falls back to following
        if let Some(index) = self.probe
            && index + 1 >= self.points.len()
        {
            self.probe = None;
        }

        debug!(
            terms = self.terms.get(),
            final_error = self.final_error(),
            "regenerated sequence"
        );
    }

    /// Index of the inspected point
    pub fn probe_index(&self) -> usize {
        self.probe
            .unwrap_or_else(|| self.points.len().saturating_sub(1))
    }

    /// The inspected point
    pub fn probed_point(&self) -> Option<&ApproximationPoint> {
        self.points.get(self.probe_index())
    }

    /// Whether the probe was moved off the last point
    pub fn probe_pinned(&self) -> bool {
        self.probe.is_some()
    }

    /// Absolute error after the last term
    pub fn final_error(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.absolute_error)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear status message on any key
        self.status_message = None;

        if let Some(command) = convert_key(key) {
            self.apply(command);
        }
    }

    /// Apply a slider command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Step(delta) => {
                let next = self.terms.step(delta);
                if !self.set_terms(next) {
                    self.report_bound();
                }
            }
            Command::First => {
                if !self.set_terms(TermCount::min()) {
                    self.report_bound();
                }
            }
            Command::Last => {
                if !self.set_terms(TermCount::max()) {
                    self.report_bound();
                }
            }
            Command::Reset => {
                self.probe = None;
                self.set_terms(self.initial_terms);
                self.status_message = Some(format!("Reset to {} terms", self.initial_terms));
            }
            Command::Probe(delta) => self.move_probe(delta),
            Command::Quit => self.should_quit = true,
        }
    }

    fn report_bound(&mut self) {
        let message = if self.terms.is_min() {
            format!("Already at the minimum of {} term", self.terms)
        } else if self.terms.is_max() {
            format!("Already at the maximum of {} terms", self.terms)
        } else {
            return;
        };
        self.status_message = Some(message);
    }

    /// Move the probe; landing on the last point resumes following
    fn move_probe(&mut self, delta: isize) {
        let last = self.points.len().saturating_sub(1);
        let index = self.probe_index().saturating_add_signed(delta).min(last);
        self.probe = if index == last { None } else { Some(index) };
    }

    /// Render the application to a frame
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = ComputedLayout::compute(area, &self.layout_config, self.show_inspector);

        let slider = SliderPane::new(self.terms);
        frame.render_widget(&slider, layout.slider);

        let chart = ChartPane::new(&self.chart)
            .marker(self.marker)
            .probe(self.probe_index());
        frame.render_widget(&chart, layout.chart);

        if self.show_inspector && layout.inspector_visible() {
            let inspector = InspectorPane::new(self.probed_point()).pinned(self.probe_pinned());
            frame.render_widget(&inspector, layout.inspector);
        }

        frame.render_widget(&CaptionPane, layout.caption);

        self.render_status_bar(frame, layout.status);
    }

    /// Render the status bar
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status_text = if let Some(msg) = &self.status_message {
            format!(" {}", msg)
        } else {
            StatusContent::new()
                .title("piviz")
                .terms(self.terms.to_string())
                .error(format!("{:.6}", self.final_error()))
                .hint(KEY_HINT)
                .format(area.width)
        };

        let style = Style::default().bg(Color::DarkGray).fg(Color::White);
        let paragraph = Paragraph::new(Line::from(Span::styled(status_text, style)));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkerKind;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_app_creation() {
        let app = App::default();
        assert_eq!(app.terms().get(), 20);
        assert_eq!(app.points().len(), 20);
        assert_eq!(app.chart().len(), 20);
        assert_eq!(app.recomputations(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_step_recomputes() {
        let mut app = App::default();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.terms().get(), 21);
        assert_eq!(app.points().len(), 21);
        assert_eq!(app.chart().len(), 21);
        assert_eq!(app.recomputations(), 2);

        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.terms().get(), 19);
        assert_eq!(app.points().len(), 19);
        assert_eq!(app.recomputations(), 4);
    }

    #[test]
    fn test_points_match_generator() {
        let mut app = App::default();
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.points(), generate(30).as_slice());
    }

    #[test]
    fn test_same_value_does_not_recompute() {
        let mut app = App::default();
        assert!(!app.set_terms(TermCount::default()));
        assert_eq!(app.recomputations(), 1);
    }

    #[test]
    fn test_saturates_at_bounds() {
        let mut app = App::default();
        press(&mut app, KeyCode::End);
        assert_eq!(app.terms(), TermCount::max());
        assert_eq!(app.points().len(), 50);
        let before = app.recomputations();

        press(&mut app, KeyCode::Right);
        assert_eq!(app.terms(), TermCount::max());
        assert_eq!(app.recomputations(), before);
        assert!(app.status_message.as_deref().is_some_and(|m| m.contains("maximum")));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.terms().get(), 1);
        assert_eq!(app.points().len(), 1);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.terms().get(), 1);
        assert!(app.status_message.as_deref().is_some_and(|m| m.contains("minimum")));
    }

    #[test]
    fn test_status_message_clears_on_next_key() {
        let mut app = App::new(TermCount::max());
        press(&mut app, KeyCode::Right);
        assert!(app.status_message.is_some());
        press(&mut app, KeyCode::Left);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_reset() {
        let start = TermCount::new(7).unwrap();
        let mut app = App::new(start);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.terms().get(), 17);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.terms(), start);
        assert_eq!(app.points().len(), 7);
    }

    #[test]
    fn test_probe_follows_last_point() {
        let mut app = App::default();
        assert_eq!(app.probe_index(), 19);
        assert!(!app.probe_pinned());

        press(&mut app, KeyCode::Right);
        assert_eq!(app.probe_index(), 20);
        assert_eq!(app.probed_point().map(|p| p.term_index), Some(21));
    }

    #[test]
    fn test_probe_pins_and_moves() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.probe_index(), 17);
        assert!(app.probe_pinned());

        // Growing the sequence keeps a pinned probe in place
        press(&mut app, KeyCode::Right);
        assert_eq!(app.probe_index(), 17);

        // Moving back onto the last point resumes following
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(']'));
        assert!(!app.probe_pinned());
        assert_eq!(app.probe_index(), 20);

        // Cannot move past the last point
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.probe_index(), 20);
    }

    #[test]
    fn test_probe_clamps_when_shrinking() {
        let mut app = App::default();
        for _ in 0..5 {
            press(&mut app, KeyCode::Char('['));
        }
        assert_eq!(app.probe_index(), 14);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.terms().get(), 10);
        assert!(!app.probe_pinned());
        assert_eq!(app.probe_index(), 9);
    }

    #[test]
    fn test_probe_cannot_go_below_first_point() {
        let mut app = App::new(TermCount::new(3).unwrap());
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('['));
        }
        assert_eq!(app.probe_index(), 0);
        assert_eq!(app.probed_point().map(|p| p.partial_sum), Some(4.0));
    }

    #[test]
    fn test_quit_command() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::default();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_toml(
            "[display]\ninitial_terms = 42\nmarker = \"block\"\nshow_inspector = false\n",
        )
        .unwrap();
        let app = App::from_config(&config, None).unwrap();
        assert_eq!(app.terms().get(), 42);
        assert_eq!(app.marker, MarkerKind::Block.marker());
        assert!(!app.show_inspector);

        let app = App::from_config(&config, Some(TermCount::new(5).unwrap())).unwrap();
        assert_eq!(app.terms().get(), 5);
    }

    #[test]
    fn test_from_config_inspector_width() {
        let config = Config::from_toml("[display]\ninspector_width = 45\n").unwrap();
        let app = App::from_config(&config, None).unwrap();
        assert_eq!(app.layout_config.inspector_width_percent, 45);

        let config = Config::from_toml("[display]\ninspector_width = 90\n").unwrap();
        let app = App::from_config(&config, None).unwrap();
        assert_eq!(app.layout_config.inspector_width_percent, 60);

        let app = App::from_config(&Config::default(), None).unwrap();
        assert_eq!(app.layout_config.inspector_width_percent, 28);
    }

    #[test]
    fn test_from_config_rejects_bad_terms() {
        let config = Config::from_toml("[display]\ninitial_terms = 60\n").unwrap();
        assert!(App::from_config(&config, None).is_err());
    }

    #[test]
    fn test_render() {
        let app = App::default();
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Number of terms: 20"));
        assert!(text.contains("Inspector"));
        assert!(text.contains("Observations"));
        assert!(text.contains("piviz"));
    }

    #[test]
    fn test_render_small_terminal() {
        let mut app = App::new(TermCount::min());
        app.status_message = Some("hello".into());
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        // Just verify it doesn't panic
    }
}
