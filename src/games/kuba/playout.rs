//! Seeded random playouts.
//!
//! Plays uniformly random legal moves until the game ends, no move is
//! available, or a ply limit is hit. Used to exercise the rules over many
//! positions in tests and benchmarks.

use log::{debug, warn};

use crate::core::{GameRng, PlayerId};
use crate::rules::{GameResult, RulesEngine};

/// How a playout ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// The game was decided.
    Finished(GameResult),
    /// The player to move had no legal move (and the rules did not end the game).
    Stuck(PlayerId),
    /// Stopped after `max_plies` moves.
    PlyLimit,
}

/// Summary of a random playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayoutSummary {
    /// Moves applied by this playout.
    pub plies: u32,
    pub end: PlayoutEnd,
}

/// Play random legal moves on `engine`.
///
/// If nobody has moved yet, the opening player is picked at random.
pub fn random_playout<E: RulesEngine>(engine: &mut E, rng: &mut GameRng, max_plies: u32) -> PlayoutSummary {
    let mut plies = 0;

    let end = loop {
        if let Some(result) = engine.is_terminal() {
            break PlayoutEnd::Finished(result);
        }
        if plies >= max_plies {
            break PlayoutEnd::PlyLimit;
        }

        let active = engine.active_player().unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                PlayerId::A
            } else {
                PlayerId::B
            }
        });
        let moves = engine.legal_moves(active);
        let Some(&mv) = rng.choose(&moves) else {
            break PlayoutEnd::Stuck(active);
        };

        if let Err(err) = engine.apply_move(active, mv) {
            warn!("legal move {mv} for {active} was refused: {err}");
            break PlayoutEnd::Stuck(active);
        }
        plies += 1;
    };

    debug!("playout (seed {}) ended after {plies} plies: {end:?}", rng.seed());
    PlayoutSummary { plies, end }
}
