//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a single [`Board`]
//! - **History**: a linear log of board snapshots with a movable cursor
//! - **Session**: the front-end boundary; takes user intents, returns a
//!   render-ready [`GameView`]
//!
//! # Example
//!
//! ```
//! use tictac_rewind::GameSession;
//!
//! let mut session = GameSession::new();
//! session.on_cell_clicked(4);
//! session.on_cell_clicked(0);
//! assert_eq!(session.view().status_text(), "Next player: X");
//!
//! // Back to the start; the two moves stay in the list until a new move is played.
//! session.on_move_selected(0);
//! assert_eq!(session.view().moves().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use error::{JumpError, MoveError};
pub use history::GameHistory;
pub use position::Position;
pub use rules::{Verdict, Win, WinningLine};
pub use session::{GameSession, GameView, MoveEntry, Status};
pub use types::{Board, Player, Square};
