//! Terminal front end for tictac_rewind.
//!
//! The front end owns a [`tictac_rewind::GameSession`] and a cell cursor.
//! Key presses become session intents; every frame is drawn from a fresh
//! [`tictac_rewind::GameView`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use input::move_cursor;
pub use terminal::TerminalGuard;
pub use ui::draw;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info, instrument};

/// Runs the draw/read loop until the user quits.
///
/// Events are handled one at a time, each to completion before the next
/// frame is drawn.
#[instrument(skip_all)]
pub fn run(terminal: &mut DefaultTerminal) -> Result<()> {
    let mut app = App::new();
    info!("Entering event loop");

    while !app.should_quit() {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key.code);
        }
    }

    info!("Leaving event loop");
    Ok(())
}
