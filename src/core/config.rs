//! Rule configuration.
//!
//! The defaults reproduce the classic engine behavior: every accepted move
//! passes the turn, positions may repeat, and the game ends only on seven
//! captures or elimination. The optional rules bring the engine closer to
//! the published Kuba ruleset:
//! - `ko_rule`: forbid undoing the opponent's last move exactly
//! - `extra_turn_on_capture`: ejecting a Neutral or opposing marble keeps the turn
//! - `no_moves_loses`: a player left without a legal move loses

use serde::{Deserialize, Serialize};

/// Neutral marbles needed to win by capture.
pub const DEFAULT_CAPTURE_TARGET: u8 = 7;

/// Rule switches for a Kuba game.
///
/// ## Example
///
/// ```
/// use kuba_engine::core::RuleConfig;
///
/// let rules = RuleConfig::new().with_ko_rule().with_extra_turn_on_capture();
/// assert!(rules.ko_rule);
/// assert!(rules.extra_turn_on_capture);
/// assert_eq!(rules.capture_target, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Captured Neutral marbles needed to win.
    pub capture_target: u8,

    /// Reject a move that recreates the board as it stood before the
    /// opponent's preceding move.
    pub ko_rule: bool,

    /// Keep the turn after ejecting a Neutral or opposing marble.
    pub extra_turn_on_capture: bool,

    /// The player due to move loses if they have no legal move.
    pub no_moves_loses: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            capture_target: DEFAULT_CAPTURE_TARGET,
            ko_rule: false,
            extra_turn_on_capture: false,
            no_moves_loses: false,
        }
    }
}

impl RuleConfig {
    /// Classic rules (see module docs).
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional rule enabled.
    pub fn full_rules() -> Self {
        Self::new()
            .with_ko_rule()
            .with_extra_turn_on_capture()
            .with_no_moves_loses()
    }

    /// Set the capture target.
    ///
    /// Panics if `target` is 0.
    #[must_use]
    pub fn with_capture_target(mut self, target: u8) -> Self {
        assert!(target > 0, "Capture target must be at least 1");
        self.capture_target = target;
        self
    }

    #[must_use]
    pub fn with_ko_rule(mut self) -> Self {
        self.ko_rule = true;
        self
    }

    #[must_use]
    pub fn with_extra_turn_on_capture(mut self) -> Self {
        self.extra_turn_on_capture = true;
        self
    }

    #[must_use]
    pub fn with_no_moves_loses(mut self) -> Self {
        self.no_moves_loses = true;
        self
    }
}
