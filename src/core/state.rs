//! Game state: everything that changes during a Kuba game.
//!
//! ## GameState
//!
//! - Board contents
//! - Seated players (name and color) and their capture counters
//! - Turn and result
//! - Move history (persistent `im::Vector`, O(1) clone)
//! - Ko guard: the board as it stood before the most recent accepted move
//!
//! `GameState` is plain data. Validation and the transitions between states
//! belong to `games::kuba::KubaGame`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::{Board, Color, Marble};
use super::player::{Player, PlayerId, PlayerMap};
use crate::rules::GameResult;

/// The board before a move, remembered for the Ko rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoGuard {
    /// Position before `mover`'s move.
    pub board: Board,
    pub mover: PlayerId,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,

    pub players: PlayerMap<Player>,

    /// Neutral marbles each player has pushed off.
    pub captured: PlayerMap<u8>,

    /// Player due to move. `None` until the first accepted move.
    pub turn: Option<PlayerId>,

    /// Set once, when the game is decided.
    pub result: Option<GameResult>,

    /// Accepted moves so far.
    pub ply: u32,

    pub history: Vector<MoveRecord>,

    pub ko_guard: Option<KoGuard>,
}

impl GameState {
    /// Fresh game on the starting board.
    #[must_use]
    pub fn new(player_a: Player, player_b: Player) -> Self {
        Self {
            board: Board::starting(),
            players: PlayerMap::from_pair(player_a, player_b),
            captured: PlayerMap::with_value(0),
            turn: None,
            result: None,
            ply: 0,
            history: Vector::new(),
            ko_guard: None,
        }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn color_of(&self, player: PlayerId) -> Color {
        self.players[player].color
    }

    /// The player owning `color`, if any.
    #[must_use]
    pub fn owner_of(&self, color: Color) -> Option<PlayerId> {
        self.players.find(|p| p.color == color)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// The position `mover` may not recreate under the Ko rule.
    ///
    /// Only a guard left by the opponent counts; after an extra turn the
    /// guard belongs to the mover and restricts nothing.
    #[must_use]
    pub fn ko_board_for(&self, mover: PlayerId) -> Option<&Board> {
        self.ko_guard
            .as_ref()
            .filter(|guard| guard.mover != mover)
            .map(|guard| &guard.board)
    }

    /// Commit an accepted move: new board, history, ko guard, capture credit.
    pub fn record_move(&mut self, record: MoveRecord, before: Board, after: Board) {
        if record.ejected == Some(Marble::Neutral) {
            self.captured[record.player] += 1;
        }
        self.ko_guard = Some(KoGuard {
            board: before,
            mover: record.player,
        });
        self.board = after;
        self.ply = record.ply;
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Move};

    fn state() -> GameState {
        GameState::new(Player::new("alice", Color::White), Player::new("bob", Color::Black))
    }

    #[test]
    fn test_game_state_new() {
        let s = state();

        assert_eq!(s.board, Board::starting());
        assert_eq!(s.player(PlayerId::A).name, "alice");
        assert_eq!(s.color_of(PlayerId::B), Color::Black);
        assert_eq!(s.captured[PlayerId::A], 0);
        assert_eq!(s.turn, None);
        assert!(!s.is_over());
        assert!(s.history.is_empty());
    }

    #[test]
    fn test_owner_of() {
        let s = state();
        assert_eq!(s.owner_of(Color::White), Some(PlayerId::A));
        assert_eq!(s.owner_of(Color::Black), Some(PlayerId::B));
    }

    #[test]
    fn test_record_move_credits_neutral_only() {
        let mut s = state();
        let before = s.board;
        let mv = Move::new((0, 0), Direction::Right);

        s.record_move(MoveRecord::new(PlayerId::A, mv, 1, Some(Marble::Neutral)), before, before);
        s.record_move(MoveRecord::new(PlayerId::B, mv, 2, Some(Marble::White)), before, before);

        assert_eq!(s.captured[PlayerId::A], 1);
        assert_eq!(s.captured[PlayerId::B], 0);
        assert_eq!(s.ply, 2);
        assert_eq!(s.history.len(), 2);
    }

    #[test]
    fn test_ko_board_only_from_opponent() {
        let mut s = state();
        let before = s.board;
        let mut after = before;
        after.push(crate::core::Coord::new(0, 0), Direction::Right);

        s.record_move(
            MoveRecord::new(PlayerId::A, Move::new((0, 0), Direction::Right), 1, None),
            before,
            after,
        );

        assert_eq!(s.ko_board_for(PlayerId::B), Some(&before));
        assert_eq!(s.ko_board_for(PlayerId::A), None);
    }

    #[test]
    fn test_state_serialization() {
        let s = state();
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }

    #[test]
    fn test_clone_shares_history() {
        let mut s = state();
        let before = s.board;
        s.record_move(
            MoveRecord::new(PlayerId::A, Move::new((0, 0), Direction::Right), 1, None),
            before,
            before,
        );

        let mut cloned = s.clone();
        cloned.record_move(
            MoveRecord::new(PlayerId::B, Move::new((0, 6), Direction::Left), 2, None),
            before,
            before,
        );

        assert_eq!(s.history.len(), 1);
        assert_eq!(cloned.history.len(), 2);
    }
}
