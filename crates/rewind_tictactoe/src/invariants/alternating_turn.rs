//! Alternating turn invariant: X and O take turns starting with X.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: snapshot `k` holds `ceil(k/2)` X marks and `floor(k/2)` O marks.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .iter()
            .enumerate()
            .all(|(k, board)| {
                board.count(Player::X) == k.div_ceil(2) && board.count(Player::O) == k / 2
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, History, Position};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 1, 2, 3] {
            engine.play_move(cell).expect("legal move");
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Player::X);
        let second = first.with_mark(Position::Center, Player::X);
        let engine = GameEngine {
            history: History::from_boards(vec![Board::new(), first, second]).expect("non-empty"),
            current_move: 2,
        };
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
