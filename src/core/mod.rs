//! Core engine types: coordinates, board, players, moves, configuration,
//! errors, RNG and game state.
//!
//! Everything here is plain data plus the grid push primitive. The rules that
//! decide which pushes are legal live in `games::kuba`.

pub mod coord;
pub mod board;
pub mod player;
pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use coord::{Coord, Direction, ParseCoordError, ParseDirectionError, BOARD_SIZE};
pub use board::{Board, Color, Marble, MarbleCounts};
pub use player::{Player, PlayerId, PlayerMap};
pub use action::{Move, MoveOutcome, MoveRecord};
pub use config::{RuleConfig, DEFAULT_CAPTURE_TARGET};
pub use error::RuleError;
pub use rng::GameRng;
pub use state::{GameState, KoGuard};
