//! # kuba-engine
//!
//! Rule engine for Kuba, the two-player marble pushing game.
//!
//! ## Design Principles
//!
//! 1. **Atomic moves**: a move is validated against a copy of the board and
//!    committed only if every check passes. Rejected moves leave no trace.
//!
//! 2. **Two reporting modes**: `attempt_move` answers yes/no, `try_move`
//!    reports the specific `RuleError`.
//!
//! 3. **Configuration over convention**: the classic engine behavior is the
//!    default; Ko, extra turns and the no-moves loss are opt-in via
//!    `RuleConfig`.
//!
//! ## Modules
//!
//! - `core`: coordinates, board, players, moves, configuration, errors, RNG, state
//! - `rules`: `RulesEngine` trait and game results
//! - `games`: the Kuba engine and random playouts

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, Coord, Direction, GameRng, GameState, Marble, MarbleCounts,
    Move, MoveOutcome, MoveRecord, Player, PlayerId, PlayerMap,
    RuleConfig, RuleError,
};

pub use crate::rules::{GameResult, RulesEngine, WinReason};

pub use crate::games::kuba::{random_playout, KubaGame, PlayoutEnd, PlayoutSummary};
