//! Rules engine trait.
//!
//! The trait is the seam between a concrete rule set and anything that drives
//! games generically (random playouts, benchmarks):
//! - What moves are legal
//! - How a move changes the game
//! - When the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::{Move, MoveOutcome};
use crate::core::config::RuleConfig;
use crate::core::error::RuleError;
use crate::core::player::PlayerId;

/// How the game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Reached the capture target of Neutral marbles.
    Captures,
    /// Every opposing marble left the board.
    Elimination,
    /// The opponent had no legal move.
    NoLegalMoves,
}

/// Result of a completed game. Kuba has no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: PlayerId, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: every move `apply_move` would accept for the player now
/// - `apply_move`: atomic; a rejected move leaves no trace
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the rule configuration.
    fn config(&self) -> &RuleConfig;

    /// Player due to move, or `None` before the first move and after the end.
    fn active_player(&self) -> Option<PlayerId>;

    /// Legal moves for `player`. Empty if the player cannot act.
    fn legal_moves(&self, player: PlayerId) -> Vec<Move>;

    /// Apply a move for `player`.
    fn apply_move(&mut self, player: PlayerId, mv: Move) -> Result<MoveOutcome, RuleError>;

    /// `Some(result)` once the game has ended.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// True if `player` has at least one legal move.
    fn has_legal_move(&self, player: PlayerId) -> bool {
        !self.legal_moves(player).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::new(PlayerId::B, WinReason::Captures);
        assert!(!result.is_winner(PlayerId::A));
        assert!(result.is_winner(PlayerId::B));
    }
}
