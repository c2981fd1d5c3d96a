use crossterm::event;
use log::warn;
use ratatui::{backend::Backend, Terminal};
use std::io;

use floodit::game::Game;
use floodit::input::handle_input;
use floodit::logging;
use floodit::terminal::TerminalSession;
use floodit::ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to the file named by FLOODIT_LOG, if any
    logging::init()?;

    // Setup terminal; the session is dropped, restoring the terminal, before anything is printed
    let diagnostic = {
        let mut session = TerminalSession::acquire()?;
        match session.check() {
            Ok(()) => {
                // Game loop
                run(session.terminal_mut())?;
                None
            }
            Err(err) if err.is_diagnostic() => Some(err),
            Err(err) => return Err(err.into()),
        }
    };

    // Cleanup already happened, report why the game never started
    if let Some(err) = diagnostic {
        warn!("startup check failed: {}", err);
        println!("{}", err);
    }

    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut game = Game::new();

    while !game.should_quit() {
        // Render
        terminal.draw(|f| ui(f, &game))?;

        // Handle input; blocks until the next event
        let event = event::read()?;
        handle_input(&mut game, &event);
    }

    Ok(())
}
