//! Kuba rule engine.

use im::Vector;
use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use crate::core::{
    Board, Color, Coord, Direction, GameState, Marble, MarbleCounts, Move, MoveOutcome, MoveRecord, Player,
    PlayerId, RuleConfig, RuleError,
};
use crate::rules::{GameResult, RulesEngine, WinReason};

/// A single Kuba game between two named players.
///
/// Moves are validated against a copy of the board and committed only when
/// every check passes, so a rejected move never changes observable state.
///
/// ## Example
///
/// ```
/// use kuba_engine::core::{Color, Direction, Marble};
/// use kuba_engine::games::kuba::KubaGame;
///
/// let mut game = KubaGame::new(("alice", Color::White), ("bob", Color::Black));
///
/// assert!(game.attempt_move("alice", (6, 5), Direction::Forward));
/// assert_eq!(game.current_turn(), Some("bob"));
/// assert_eq!(game.marble_at((4, 5)).unwrap(), Marble::White);
///
/// // Out of turn.
/// assert!(!game.attempt_move("alice", (6, 6), Direction::Forward));
/// ```
#[derive(Clone, Debug)]
pub struct KubaGame {
    config: RuleConfig,
    state: GameState,
    /// Player lookup by name.
    seats: FxHashMap<String, PlayerId>,
}

impl KubaGame {
    /// Start a game with classic rules.
    ///
    /// Panics if the players share a name or a color.
    pub fn new(player_a: impl Into<Player>, player_b: impl Into<Player>) -> Self {
        Self::with_config(player_a, player_b, RuleConfig::default())
    }

    /// Start a game with the given rule configuration.
    pub fn with_config(player_a: impl Into<Player>, player_b: impl Into<Player>, config: RuleConfig) -> Self {
        Self::from_state(GameState::new(player_a.into(), player_b.into()), config)
    }

    /// Resume from an existing state.
    ///
    /// Panics if the players share a name or a color.
    pub fn from_state(state: GameState, config: RuleConfig) -> Self {
        let (a, b) = (state.player(PlayerId::A), state.player(PlayerId::B));
        assert_ne!(a.name, b.name, "Player names must be unique");
        assert_ne!(a.color, b.color, "Players must have complementary colors");

        let seats = PlayerId::all()
            .map(|p| (state.player(p).name.clone(), p))
            .collect();

        Self { config, state, seats }
    }

    // === Moves ===

    /// Attempt a move; `true` if it was accepted.
    ///
    /// Every refusal reason collapses to `false`. Use [`KubaGame::try_move`]
    /// for the specific [`RuleError`].
    pub fn attempt_move(&mut self, player_name: &str, coord: impl Into<Coord>, direction: Direction) -> bool {
        self.try_move(player_name, coord, direction).is_ok()
    }

    /// Attempt a move, reporting why it was refused.
    pub fn try_move(
        &mut self,
        player_name: &str,
        coord: impl Into<Coord>,
        direction: Direction,
    ) -> Result<MoveOutcome, RuleError> {
        if self.state.is_over() {
            trace!("rejected move by {player_name}: game is over");
            return Err(RuleError::InvalidTurn);
        }
        let player = self.player_id(player_name)?;
        self.apply_move(player, Move::new(coord, direction))
    }

    // === Queries ===

    /// Name of the player due to move; `None` before the first move.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.state.turn.map(|p| self.player_name(p))
    }

    /// Name of the winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.state.result.map(|r| self.player_name(r.winner))
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    /// Neutral marbles captured by the named player.
    pub fn captured_count(&self, player_name: &str) -> Result<u8, RuleError> {
        let player = self.player_id(player_name)?;
        Ok(self.state.captured[player])
    }

    /// Contents of a cell.
    pub fn marble_at(&self, coord: impl Into<Coord>) -> Result<Marble, RuleError> {
        let coord = coord.into();
        self.state.board.get(coord).ok_or(RuleError::OutOfBounds(coord))
    }

    /// Marbles of each kind still on the board.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        self.state.board.counts()
    }

    pub fn player_color(&self, player_name: &str) -> Result<Color, RuleError> {
        let player = self.player_id(player_name)?;
        Ok(self.state.color_of(player))
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.state.player(player).name
    }

    /// Resolve a player name to its slot.
    pub fn player_id(&self, player_name: &str) -> Result<PlayerId, RuleError> {
        self.seats
            .get(player_name)
            .copied()
            .ok_or_else(|| RuleError::InvalidPlayer(player_name.to_string()))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.state.history
    }

    // === Rule checks ===

    /// Validate `mv` for `player` and compute the resulting board.
    ///
    /// Returns the new board and the ejected marble, if any. Checks run in a
    /// fixed order and the first failure wins.
    fn check_move(&self, player: PlayerId, mv: Move) -> Result<(Board, Option<Marble>), RuleError> {
        if self.state.is_over() {
            return Err(RuleError::InvalidTurn);
        }
        if self.state.turn.is_some_and(|turn| turn != player) {
            return Err(RuleError::InvalidTurn);
        }

        let Move { coord, direction } = mv;
        if !coord.in_bounds() {
            return Err(RuleError::InvalidCoordinate(coord));
        }
        if self.state.board.get(coord) != Some(self.state.color_of(player).marble()) {
            return Err(RuleError::InvalidSelection(coord));
        }
        // Only the selected marble is protected; own marbles further along
        // the run may still be forced off.
        if !coord.step(direction).in_bounds() {
            return Err(RuleError::SelfEdgeExit(coord));
        }
        if !self.state.board.is_vacant(coord.step(direction.opposite())) {
            return Err(RuleError::BlockedAccess(coord));
        }

        let mut after = self.state.board;
        let ejected = after.push(coord, direction);

        if self.config.ko_rule && self.state.ko_board_for(player) == Some(&after) {
            return Err(RuleError::KoViolation);
        }

        Ok((after, ejected))
    }

    /// True if ejecting `marble` earns `player` another move.
    fn earns_extra_turn(&self, player: PlayerId, marble: Option<Marble>) -> bool {
        let opposing = self.state.color_of(player.opponent()).marble();
        self.config.extra_turn_on_capture && matches!(marble, Some(m) if m == Marble::Neutral || m == opposing)
    }

    /// Termination checks after an accepted move, first match wins:
    /// capture target, then elimination, then (optionally) no legal move.
    fn evaluate_result(&self, next: PlayerId) -> Option<GameResult> {
        if let Some(p) = PlayerId::all().find(|&p| self.state.captured[p] >= self.config.capture_target) {
            return Some(GameResult::new(p, WinReason::Captures));
        }

        let counts = self.state.board.counts();
        if let Some(p) = PlayerId::all().find(|&p| counts.of(self.state.color_of(p)) == 0) {
            return Some(GameResult::new(p.opponent(), WinReason::Elimination));
        }

        if self.config.no_moves_loses && !self.has_legal_move(next) {
            return Some(GameResult::new(next.opponent(), WinReason::NoLegalMoves));
        }

        None
    }
}

impl RulesEngine for KubaGame {
    fn config(&self) -> &RuleConfig {
        &self.config
    }

    fn active_player(&self) -> Option<PlayerId> {
        if self.state.is_over() {
            None
        } else {
            self.state.turn
        }
    }

    fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        if self.state.is_over() || self.state.turn.is_some_and(|turn| turn != player) {
            return vec![];
        }

        let own = self.state.color_of(player).marble();
        Coord::all()
            .filter(|&c| self.state.board.get(c) == Some(own))
            .flat_map(|c| Direction::ALL.into_iter().map(move |d| Move::new(c, d)))
            .filter(|&mv| self.check_move(player, mv).is_ok())
            .collect()
    }

    fn apply_move(&mut self, player: PlayerId, mv: Move) -> Result<MoveOutcome, RuleError> {
        let (after, ejected) = self.check_move(player, mv).map_err(|err| {
            trace!("rejected {mv} by {player}: {err}");
            err
        })?;

        let before = self.state.board;
        let ply = self.state.ply + 1;
        self.state.record_move(MoveRecord::new(player, mv, ply, ejected), before, after);

        let captured = ejected == Some(Marble::Neutral);
        let next = if self.earns_extra_turn(player, ejected) {
            player
        } else {
            player.opponent()
        };
        self.state.turn = Some(next);

        debug!(
            "ply {ply}: {} pushed {mv}, ejected {:?}, captures {}",
            self.player_name(player),
            ejected,
            self.state.captured[player]
        );

        let result = self.evaluate_result(next);
        if let Some(result) = result {
            info!(
                "{} wins by {:?} after {ply} moves",
                self.player_name(result.winner),
                result.reason
            );
            self.state.result = Some(result);
        }

        Ok(MoveOutcome {
            ejected,
            captured,
            next_turn: next,
            result,
        })
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.state.result
    }
}
