//! Rejection reasons for history transitions.
//!
//! The session layer absorbs these without changing state; they exist so
//! the reason is visible to callers and to the trace log.

use crate::{Player, Position};

/// Why a move was not played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The board in view already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Why the cursor was not moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested entry does not exist.
    #[display("Move #{} does not exist (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested entry.
        index: usize,
        /// Number of recorded entries.
        len: usize,
    },
}
