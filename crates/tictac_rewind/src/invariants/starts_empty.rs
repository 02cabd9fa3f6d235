//! Starting snapshot invariant.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: the first snapshot is the all-empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
