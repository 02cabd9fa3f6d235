//! Application state and key handling.

use crossterm::event::KeyCode;
use tictac_rewind::{GameSession, GameView, Position};
use tracing::debug;

use super::input::move_cursor;

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Fresh view of the board in view.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translates a key press into a session intent.
    pub fn handle_key(&mut self, key: KeyCode) {
        let move_index = self.session.history().cursor();

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => {
                self.session.restart();
                self.cursor = Position::Center;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.on_cell_clicked(self.cursor.to_index());
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.session.on_cell_clicked(index);
            }
            KeyCode::Char('[') => {
                if let Some(previous) = move_index.checked_sub(1) {
                    self.session.on_move_selected(previous);
                }
            }
            KeyCode::Char(']') => {
                self.session.on_move_selected(move_index + 1);
            }
            KeyCode::Home => {
                self.session.on_move_selected(0);
            }
            KeyCode::End => {
                self.session.on_move_selected(self.session.history().len() - 1);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => debug!(?other, "Unbound key"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_rewind::{Player, Square, Status};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Up, KeyCode::Enter]);

        assert_eq!(app.cursor(), Position::TopCenter);
        assert_eq!(
            app.view().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_digit_plays_and_moves_cursor() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('9')]);

        assert_eq!(app.cursor(), Position::BottomRight);
        assert_eq!(app.view().status(), Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_brackets_step_through_history() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('[')]);
        assert_eq!(app.session().history().cursor(), 1);

        press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.session().history().cursor(), 0);

        press(&mut app, &[KeyCode::End]);
        assert_eq!(app.session().history().cursor(), 2);

        press(&mut app, &[KeyCode::Char(']')]);
        assert_eq!(app.session().history().cursor(), 2);

        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.session().history().cursor(), 0);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Left, KeyCode::Char('r')]);

        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.cursor(), Position::Center);
        assert!(!app.should_quit());

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
