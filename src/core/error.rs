//! Rule and query errors.

use std::fmt;

use super::coord::Coord;

/// Why a move or query was refused.
///
/// `KubaGame::attempt_move` collapses every move error into `false`;
/// `KubaGame::try_move` and the queries report the specific kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// Acting out of turn, or after the game ended.
    InvalidTurn,
    /// Move coordinate outside the board.
    InvalidCoordinate(Coord),
    /// Selected cell is empty or holds a marble the mover does not own.
    InvalidSelection(Coord),
    /// The cell behind the selected marble is occupied.
    BlockedAccess(Coord),
    /// The selected marble would be pushed off the board by its own move.
    SelfEdgeExit(Coord),
    /// The move would recreate the position before the opponent's last move.
    KoViolation,
    /// Name does not belong to either player.
    InvalidPlayer(String),
    /// Query coordinate outside the board.
    OutOfBounds(Coord),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::InvalidTurn => write!(f, "not this player's turn"),
            RuleError::InvalidCoordinate(c) => write!(f, "coordinate {c} is off the board"),
            RuleError::InvalidSelection(c) => write!(f, "no marble of the mover's color at {c}"),
            RuleError::BlockedAccess(c) => write!(f, "marble at {c} has no vacant cell behind it"),
            RuleError::SelfEdgeExit(c) => write!(f, "marble at {c} would push itself off the board"),
            RuleError::KoViolation => write!(f, "move would undo the opponent's last move"),
            RuleError::InvalidPlayer(name) => write!(f, "unknown player {name:?}"),
            RuleError::OutOfBounds(c) => write!(f, "coordinate {c} is out of bounds"),
        }
    }
}

impl std::error::Error for RuleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            RuleError::BlockedAccess(Coord::new(0, 1)).to_string(),
            "marble at (0,1) has no vacant cell behind it"
        );
        assert_eq!(
            RuleError::InvalidPlayer("zed".to_string()).to_string(),
            "unknown player \"zed\""
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RuleError::InvalidTurn);
        assert_eq!(err.to_string(), "not this player's turn");
    }
}
