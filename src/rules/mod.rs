//! Rules engine trait for game implementations.
//!
//! Rule sets implement `RulesEngine` to define:
//! - Legal moves for each player
//! - How moves modify state
//! - Win conditions
//!
//! Generic drivers (playouts, benchmarks) only talk to the trait.

pub mod engine;

pub use engine::{GameResult, RulesEngine, WinReason};
