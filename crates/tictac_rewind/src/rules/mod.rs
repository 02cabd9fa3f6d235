//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Nothing here is cached: callers
//! recompute a [`Verdict`] from the board in view each time they need one.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Win, WinningLine, check_winner, evaluate};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome information derived from one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Winner, if a line is complete.
    pub winner: Option<Player>,
    /// The completed line, for highlighting.
    pub winning_line: Option<WinningLine>,
    /// Board is full with no winner.
    pub is_draw: bool,
}

impl Verdict {
    /// Evaluates `board`.
    pub fn of(board: &Board) -> Self {
        let win = evaluate(board);
        Self {
            winner: win.map(|w| w.player()),
            winning_line: win.map(|w| w.line()),
            is_draw: is_draw(board),
        }
    }

    /// True when the game on this board is over.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}
