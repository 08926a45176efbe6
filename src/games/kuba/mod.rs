//! Kuba: two players push marbles on a 7x7 board.
//!
//! - Each player owns 8 marbles (White or Black); 13 Neutral red marbles sit
//!   in a cross at the center
//! - On a turn, a player slides one of their marbles one cell along a row or
//!   column, pushing any marbles in front of it; the cell behind it must be
//!   vacant or off the board
//! - A marble pushed off the edge is removed; Neutral marbles count as a
//!   capture for the pusher
//! - First to capture 7 Neutral marbles, or to remove every opposing marble, wins

mod game;
pub mod playout;

pub use game::KubaGame;
pub use playout::{random_playout, PlayoutEnd, PlayoutSummary};
