//! Move representation and history records.
//!
//! A Kuba move is a marble selection plus a push direction. Accepted moves
//! are recorded with the marble they ejected (if any) so a history can be
//! replayed or inspected after the fact.

use serde::{Deserialize, Serialize};

use super::board::Marble;
use super::coord::{Coord, Direction};
use super::player::PlayerId;
use crate::rules::GameResult;

/// Push the marble at `coord` one cell in `direction`.
///
/// ```
/// use kuba_engine::core::{Coord, Direction, Move};
///
/// let mv = Move::new((6, 6), Direction::Forward);
/// assert_eq!(mv.coord, Coord::new(6, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(coord: impl Into<Coord>, direction: Direction) -> Self {
        Self {
            coord: coord.into(),
            direction,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.coord, self.direction)
    }
}

/// What an accepted move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Marble pushed off the board, if any.
    pub ejected: Option<Marble>,

    /// True if the ejected marble was Neutral and credited to the mover.
    pub captured: bool,

    /// Player due to move next.
    pub next_turn: PlayerId,

    /// Set when this move decided the game.
    pub result: Option<GameResult>,
}

/// A recorded move for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move made.
    pub mv: Move,

    /// 1-based count of accepted moves, this one included.
    pub ply: u32,

    /// Marble pushed off the board, if any.
    pub ejected: Option<Marble>,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, ply: u32, ejected: Option<Marble>) -> Self {
        Self {
            player,
            mv,
            ply,
            ejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_new() {
        let mv = Move::new((2, 3), Direction::Left);
        assert_eq!(mv.coord, Coord::new(2, 3));
        assert_eq!(mv.direction, Direction::Left);
        assert_eq!(mv.to_string(), "(2,3) L");
    }

    #[test]
    fn test_move_record() {
        let mv = Move::new((0, 1), Direction::Backward);
        let record = MoveRecord::new(PlayerId::B, mv, 4, Some(Marble::Neutral));

        assert_eq!(record.player, PlayerId::B);
        assert_eq!(record.mv, mv);
        assert_eq!(record.ply, 4);
        assert_eq!(record.ejected, Some(Marble::Neutral));
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(PlayerId::A, Move::new((5, 5), Direction::Right), 1, None);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
