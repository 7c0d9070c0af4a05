//! Key conversion from crossterm to slider commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terms moved by PageUp/PageDown
pub const PAGE_STEP: isize = 10;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the term count by a signed amount
    Step(isize),
    /// Jump to the smallest term count
    First,
    /// Jump to the largest term count
    Last,
    /// Back to the startup term count
    Reset,
    /// Move the inspected point by a signed amount
    Probe(isize),
    Quit,
}

/// Convert a crossterm KeyEvent to a command.
///
/// Releases and repeats reported by some terminals are ignored, as are
/// unbound keys.
pub fn convert_key(event: KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match event.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Command::Step(1),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Command::Step(-1),
        KeyCode::PageUp => Command::Step(PAGE_STEP),
        KeyCode::PageDown => Command::Step(-PAGE_STEP),
        KeyCode::Home => Command::First,
        KeyCode::End => Command::Last,
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char(']') => Command::Probe(1),
        KeyCode::Char('[') => Command::Probe(-1),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}
