//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order.
///
/// Rows come first, then columns, then diagonals. The first uniform
/// line wins, so the order fixes which line is reported for boards
/// that hold more than one.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three cells that complete a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the cell indexes of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Win {
    /// Owner of the line.
    #[getter(copy)]
    player: Player,
    /// The completed line.
    #[getter(copy)]
    line: WinningLine,
}

/// Finds the first winning line on the board.
///
/// Returns `None` when no line is uniformly occupied. Partially filled
/// boards are valid input.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Win> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| Win {
                player,
                line: WinningLine(line),
            });
        }
    }

    None
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player)
}
