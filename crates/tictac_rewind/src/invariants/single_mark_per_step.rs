//! Step invariant: each snapshot adds exactly one mark for the player on turn.

use super::Invariant;
use crate::{GameHistory, Player, Square};

/// Invariant: snapshot `k` equals snapshot `k - 1` plus one mark.
///
/// The added mark belongs to X on odd `k` and O on even `k`, and no
/// previously occupied square changes.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameHistory> for SingleMarkPerStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.boards().windows(2).enumerate().all(|(step, pair)| {
            let expected = Square::Occupied(Player::for_move(step));
            let mut changed = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after);

            matches!(
                (changed.next(), changed.next()),
                (Some((Square::Empty, after)), None) if *after == expected
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player on turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_history_holds() {
        let mut history = GameHistory::new();
        history.play_move(Position::Center).unwrap();
        history.play_move(Position::TopLeft).unwrap();
        assert!(SingleMarkPerStepInvariant::holds(&history));
    }

    #[test]
    fn test_wrong_player_violates() {
        let start = Board::new();
        let o_first = start.with_mark(Position::Center, Player::O);
        let history = GameHistory::from_parts(vec![start, o_first], 1);
        assert!(!SingleMarkPerStepInvariant::holds(&history));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let start = Board::new();
        let skipped = start
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let history = GameHistory::from_parts(vec![start, skipped], 1);
        assert!(!SingleMarkPerStepInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let start = Board::new();
        let first = start.with_mark(Position::Center, Player::X);
        let overwrite = first.with_mark(Position::Center, Player::O);
        let history = GameHistory::from_parts(vec![start, first, overwrite], 2);
        assert!(!SingleMarkPerStepInvariant::holds(&history));
    }
}
