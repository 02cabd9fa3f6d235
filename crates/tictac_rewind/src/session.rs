//! Game session: the boundary a front end talks to.
//!
//! A front end sends user intents (cell clicked, move selected) and reads
//! back a [`GameView`]. Invalid intents are absorbed: they are logged and
//! leave the session unchanged. Every view is rebuilt from the board in
//! view, so status and highlight can never go stale.

use crate::rules::{Verdict, WinningLine};
use crate::{Board, GameHistory, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status line for the board in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full with no winner.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the jump-to-move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index; 0 is the game start.
    pub index: usize,
    /// Whether this snapshot is in view.
    pub is_current: bool,
}

impl MoveEntry {
    /// Button label for this entry.
    pub fn label(&self) -> String {
        match (self.index, self.is_current) {
            (0, true) => "You are at game start".to_string(),
            (0, false) => "Go to game start".to_string(),
            (k, true) => format!("You are at move #{}", k),
            (k, false) => format!("Go to move #{}", k),
        }
    }
}

/// Render-ready snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board in view.
    board: Board,
    /// Status line.
    #[getter(copy)]
    status: Status,
    /// Line to highlight, if the board is won.
    #[getter(copy)]
    winning_line: Option<WinningLine>,
    /// Jump-to-move entries in history order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Text for the status line.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

/// A single game with time travel, owned by one front end.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    history: GameHistory,
}

impl GameSession {
    /// Starts a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting game session");
        Self {
            history: GameHistory::new(),
        }
    }

    /// Read access to the underlying history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Handles a click on cell `index` (0-8).
    ///
    /// Returns whether the session changed. Clicks on occupied cells, on a
    /// decided board, or outside the board are ignored.
    #[instrument(skip(self))]
    pub fn on_cell_clicked(&mut self, index: usize) -> bool {
        match self.history.play_index(index) {
            Ok(player) => {
                debug!(%player, index, "Cell click accepted");
                true
            }
            Err(e) => {
                debug!(error = %e, "Cell click ignored");
                false
            }
        }
    }

    /// Handles selection of move `index` in the move list.
    ///
    /// Returns whether the session changed. Indexes with no recorded
    /// snapshot are ignored.
    #[instrument(skip(self))]
    pub fn on_move_selected(&mut self, index: usize) -> bool {
        if index == self.history.cursor() {
            return false;
        }
        match self.history.jump_to(index) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Move selection ignored");
                false
            }
        }
    }

    /// Discards the whole history and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len() - 1, "Restarting game session");
        self.history = GameHistory::new();
    }

    /// Status of the board in view.
    pub fn status(&self) -> Status {
        let verdict = Verdict::of(self.history.current_board());
        match verdict.winner {
            Some(player) => Status::Winner(player),
            None if verdict.is_draw => Status::Draw,
            None => Status::NextPlayer(self.history.current_player()),
        }
    }

    /// Jump-to-move entries, one per recorded snapshot.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let cursor = self.history.cursor();
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                is_current: index == cursor,
            })
            .collect()
    }

    /// Builds a fresh view of the board in view.
    #[instrument(level = "trace", skip(self))]
    pub fn view(&self) -> GameView {
        let board = self.history.current_board().clone();
        let verdict = Verdict::of(&board);
        GameView {
            status: self.status(),
            winning_line: verdict.winning_line,
            moves: self.move_list(),
            board,
        }
    }
}
