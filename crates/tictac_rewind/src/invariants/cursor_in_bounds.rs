//! Cursor bounds invariant.

use super::Invariant;
use crate::GameHistory;

/// Invariant: the cursor selects a recorded snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor() < history.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
