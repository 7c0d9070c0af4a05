//! Terminal explorer for the Leibniz series
//!
//! Provides a stacked-pane terminal interface with:
//! - A term-count slider bounded to 1..=50
//! - A chart of the partial sums against π, recomputed on every change
//! - An inspector with the exact values behind one point
//! - A static caption describing the convergence

pub mod app;
pub mod config;
pub mod error;
pub mod keys;
pub mod print;
pub mod ui;

pub use error::{Result, VizError};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use tracing::info;

/// Run the explorer until the user quits
pub fn run(app: app::App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| VizError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(VizError::Terminal(format!(
            "Failed to enter alternate screen: {}",
            e
        )));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(VizError::Terminal(format!(
                "Failed to create terminal: {}",
                e
            )));
        }
    };

    info!(terms = app.terms().get(), "starting explorer");

    // Run the app
    let result = run_app(&mut terminal, app);

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(VizError::from)
}

/// Internal run loop (specialized for CrosstermBackend)
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: app::App,
) -> io::Result<()> {
    use crossterm::event::{self, Event};
    use std::time::Duration;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        terms = app.terms().get(),
        recomputations = app.recomputations(),
        "explorer closed"
    );
    Ok(())
}
