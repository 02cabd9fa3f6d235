//! Move history with a movable cursor.
//!
//! The history is a linear log of board snapshots. Moving the cursor back
//! never deletes anything, but the next move played from there discards
//! every snapshot after the cursor before appending.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::check_winner;
use crate::{Board, JumpError, MoveError, Player, Position};
use tracing::{debug, instrument, warn};

/// Ordered board snapshots plus the index of the one in view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    boards: Vec<Board>,
    cursor: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Builds a history from raw parts without validation.
    ///
    /// Used to exercise invariant checks against malformed histories.
    #[cfg(test)]
    pub(crate) fn from_parts(boards: Vec<Board>, cursor: usize) -> Self {
        Self { boards, cursor }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Snapshots after the cursor are discarded, the new board is appended,
    /// and the cursor moves to it. Returns the player who moved.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the board in view already has a winner.
    /// - `MoveError::SquareOccupied` if `pos` is taken.
    ///
    /// The history is unchanged on error.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.boards.len()))]
    pub fn play_move(&mut self, pos: Position) -> Result<Player, MoveError> {
        let current = self.current_board();

        if let Some(winner) = check_winner(current) {
            return Err(MoveError::GameOver(winner));
        }

        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player();
        let next = current.with_mark(pos, player);

        let discarded = self.boards.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after cursor");
        }
        self.boards.truncate(self.cursor + 1);
        self.boards.push(next);
        self.cursor = self.boards.len() - 1;

        debug!(%player, position = %pos, move_number = self.cursor, "Move played");
        self.debug_check_invariants();

        Ok(player)
    }

    /// Plays at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for indexes past 8, otherwise as
    /// [`GameHistory::play_move`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<Player, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play_move(pos)
    }

    /// Moves the cursor to snapshot `index`. Snapshots are kept.
    ///
    /// # Errors
    ///
    /// `JumpError::OutOfRange` if no snapshot `index` exists. The cursor
    /// is not clamped.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.boards.len() {
            return Err(JumpError::OutOfRange {
                index,
                len: self.boards.len(),
            });
        }

        self.cursor = index;
        debug!(cursor = index, "Cursor moved");
        self.debug_check_invariants();
        Ok(())
    }

    /// The board in view.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.cursor]
    }

    /// The player to move on the board in view.
    pub fn current_player(&self) -> Player {
        Player::for_move(self.cursor)
    }

    /// Index of the board in view.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// All recorded snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// True when the cursor is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.boards.len()
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(%violation, "History invariant violated");
            }
            debug_assert!(violations.is_empty(), "History invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
