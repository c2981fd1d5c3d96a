use std::env;
use std::io::{self, stdout, Stdout};
use std::sync::Once;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::available_color_count,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::constants::{MIN_COLORS, MIN_HEIGHT, MIN_WIDTH};
use crate::error::StartupError;

static PANIC_HOOK: Once = Once::new();

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// value. Dropping it puts the terminal back the way it was.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn acquire() -> io::Result<Self> {
        install_panic_hook();

        // Setup terminal
        terminal::enable_raw_mode()?;
        let mut out = stdout();

        // Nothing owns the raw mode yet, so undo it by hand on failure
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide) {
            restore().ok();
            return Err(err);
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                restore().ok();
                Err(err)
            }
        }
    }

    /// Verifies the terminal can show the game at all.
    pub fn check(&self) -> Result<(), StartupError> {
        let (width, height) = terminal::size()?;
        check_terminal(color_count(), width, height)
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            warn!("failed to restore terminal: {}", err);
        }
    }
}

/// Number of colors the terminal can show, as far as the environment tells.
pub fn color_count() -> u16 {
    let term = env::var("TERM").ok();
    let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    color_count_for(term.as_deref(), no_color)
}

/// crossterm reports at least 8 colors for any `TERM`, including `dumb` or
/// none at all, so those cases are ruled out here first.
pub fn color_count_for(term: Option<&str>, no_color: bool) -> u16 {
    match term.map(str::trim) {
        _ if no_color => 0,
        None | Some("") | Some("dumb") => 0,
        Some(_) => available_color_count(),
    }
}

pub fn check_terminal(colors: u16, width: u16, height: u16) -> Result<(), StartupError> {
    if colors < MIN_COLORS {
        return Err(StartupError::NoColorSupport);
    }
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(StartupError::TerminalTooSmall {
            width,
            height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}

fn restore() -> io::Result<()> {
    // Keep going on failure so as much state as possible gets restored
    let raw = terminal::disable_raw_mode();
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show).ok();
    raw
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore().ok();
            original_hook(info);
        }));
    });
}
