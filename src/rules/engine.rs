//! The game engine: command API over one mutable state record.
//!
//! ## Driving a roll
//!
//! `roll()` only fixes the dice. The rest of the roll is a sequence of
//! discrete steps an external scheduler drives with `tick()`, so
//! animation can pace the token without the engine knowing about time:
//!
//! ```
//! use board_engine::core::{GameConfig, Phase, ScriptedRng};
//! use board_engine::rules::Engine;
//!
//! let rng = ScriptedRng::new().with_roll(2, 3);
//! let mut engine = Engine::new(GameConfig::default(), rng);
//!
//! engine.roll();
//! assert_eq!(engine.phase(), Phase::Rolling);
//!
//! engine.tick(); // resolve the roll
//! assert_eq!(engine.phase(), Phase::Moving);
//!
//! engine.settle(); // step the token home
//! assert_eq!(engine.current_player().position.index(), 5);
//! assert_eq!(engine.phase(), Phase::Action); // Reading Railroad is for sale
//! ```
//!
//! Callers that don't animate can use `play_roll()`.

use super::arrival::{self, Arrival};
use super::card_effects;
use super::command::Command;
use super::error::Rejection;
use super::jail::{self, JailRoll};
use super::movement;
use super::property;
use super::turn::{advance_seat, finish_turn};
use crate::board::{Board, TileId};
use crate::core::{
    Dice, GameConfig, GameEvent, GameRng, GameState, Ownership, Phase, Player, PlayerId,
    RandomSource, Snapshot,
};

/// Turn-based game engine.
///
/// Owns the state, the configuration, and the random source. Every
/// command runs to completion before the next one can start; the engine
/// is not internally concurrent. Share it across threads behind a single
/// `Mutex<Engine>` so each command's read-modify-write stays atomic.
#[derive(Debug)]
pub struct Engine<R: RandomSource = GameRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
    /// Journal length at the last `new_events` call.
    seen: usize,
}

impl Engine<GameRng> {
    /// Engine with a seeded ChaCha RNG.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    #[must_use]
    pub fn new(config: GameConfig, rng: R) -> Self {
        let state = GameState::new(&config);
        log::info!(
            "new game: {} players on a {}-tile board",
            config.player_count(),
            config.board.len()
        );
        Self::from_state(config, state, rng)
    }

    /// Resume from a prepared state.
    ///
    /// The state must have been built for this config (same seats, same board).
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Self {
        let seen = state.events.len();
        Self {
            config,
            state,
            rng,
            seen,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.config.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn dice(&self) -> Dice {
        self.state.dice
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.state.current_player()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    #[must_use]
    pub fn ownership(&self, tile: TileId) -> Option<&Ownership> {
        self.state.ownership(tile)
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Full event journal since the game started.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.state.events.iter()
    }

    /// Events recorded since the previous call.
    ///
    /// Only a read cursor moves; the journal keeps every event, so
    /// `events()` still returns the whole game.
    pub fn new_events(&mut self) -> Vec<GameEvent> {
        let fresh: Vec<GameEvent> = self.state.events.iter().skip(self.seen).cloned().collect();
        self.seen = self.state.events.len();
        fresh
    }

    // === Commands ===

    /// Apply a command, reporting why it was rejected.
    ///
    /// A rejected command leaves the state as it was. The one exception is
    /// short-funded bail, which also sets a notification.
    pub fn execute(&mut self, command: Command) -> Result<(), Rejection> {
        match command {
            Command::Roll => self.try_roll(),
            Command::Tick => {
                if self.tick() {
                    Ok(())
                } else {
                    Err(Rejection::WrongPhase(self.state.phase))
                }
            }
            Command::AcknowledgeCard => self.try_acknowledge_card(),
            Command::BuyProperty { tile } => {
                property::buy(&mut self.state, &self.config, tile)?;
                finish_turn(&mut self.state);
                Ok(())
            }
            Command::BuildOnProperty { tile } => {
                property::build(&mut self.state, &self.config, tile)?;
                finish_turn(&mut self.state);
                Ok(())
            }
            Command::SkipPendingAction => self.try_skip(),
            Command::PayBail { player } => jail::pay_bail(&mut self.state, &self.config, player),
            Command::UseEscapeCard { player } => jail::use_escape_card(&mut self.state, player),
            Command::AdvanceToNextPlayer => self.try_advance(),
            Command::ClearNotification => {
                self.state.notification = None;
                Ok(())
            }
        }
    }

    fn run(&mut self, command: Command) -> bool {
        match self.execute(command) {
            Ok(()) => true,
            Err(rejection) => {
                log::debug!("{:?} rejected: {}", command, rejection);
                false
            }
        }
    }

    /// Roll the dice. No-op unless idle.
    pub fn roll(&mut self) {
        self.run(Command::Roll);
    }

    /// Apply the pending card to the current player.
    pub fn acknowledge_card(&mut self) {
        self.run(Command::AcknowledgeCard);
    }

    /// Buy the tile offered by the pending buy prompt.
    pub fn buy_property(&mut self, tile: TileId) {
        self.run(Command::BuyProperty { tile });
    }

    /// Improve the tile offered by the pending build prompt.
    pub fn build_on_property(&mut self, tile: TileId) {
        self.run(Command::BuildOnProperty { tile });
    }

    /// Decline the pending buy or build prompt.
    pub fn skip_pending_action(&mut self) {
        self.run(Command::SkipPendingAction);
    }

    /// Pay bail for a jailed player. Returns whether it was paid.
    pub fn pay_bail(&mut self, player: PlayerId) -> bool {
        self.run(Command::PayBail { player })
    }

    pub fn use_escape_card(&mut self, player: PlayerId) {
        self.run(Command::UseEscapeCard { player });
    }

    /// Hand play to the next seat, dropping any pending prompt or card.
    pub fn advance_to_next_player(&mut self) {
        self.run(Command::AdvanceToNextPlayer);
    }

    pub fn clear_notification(&mut self) {
        self.run(Command::ClearNotification);
    }

    // === Driver ===

    /// Advance an in-flight roll by one discrete step.
    ///
    /// Returns false when there is nothing to advance (`Idle` or `Action`).
    pub fn tick(&mut self) -> bool {
        match self.state.phase {
            Phase::Rolling => {
                self.resolve_roll();
                true
            }
            Phase::Moving => {
                if movement::step(&mut self.state, &self.config) {
                    self.arrive();
                }
                true
            }
            Phase::Idle | Phase::Action => false,
        }
    }

    /// Tick until the engine is idle or waiting on a decision.
    pub fn settle(&mut self) -> Phase {
        while self.tick() {}
        self.state.phase
    }

    /// Roll and resolve in one call.
    pub fn play_roll(&mut self) -> Phase {
        self.roll();
        self.settle()
    }

    // === Transitions ===

    fn try_roll(&mut self) -> Result<(), Rejection> {
        if self.state.phase != Phase::Idle {
            return Err(Rejection::WrongPhase(self.state.phase));
        }

        let dice = Dice(self.rng.roll_die(), self.rng.roll_die());
        let player = self.state.current_id();

        self.state.dice = dice;
        self.state.rolled_doubles = dice.is_doubles();
        self.state.notification = None;
        self.state.phase = Phase::Rolling;
        self.state.record(GameEvent::Rolled { player, dice });
        log::info!("{} rolled {} ({})", player, dice, dice.total());
        Ok(())
    }

    fn resolve_roll(&mut self) {
        let total = self.state.dice.total();

        if !self.state.in_jail(self.state.current_id()) {
            movement::start_moving(&mut self.state, total);
            return;
        }

        match jail::resolve_jailed_roll(&mut self.state, &self.config) {
            JailRoll::Released => movement::start_moving(&mut self.state, total),
            JailRoll::Served | JailRoll::ForcedOut => finish_turn(&mut self.state),
        }
    }

    fn arrive(&mut self) {
        self.state.moving_position = None;
        match arrival::resolve(&mut self.state, &self.config, &mut self.rng) {
            Arrival::Blocked => {}
            Arrival::Done => finish_turn(&mut self.state),
        }
    }

    fn try_acknowledge_card(&mut self) -> Result<(), Rejection> {
        if self.state.phase != Phase::Action {
            return Err(Rejection::WrongPhase(self.state.phase));
        }
        let drawn = self.state.pending_card.take().ok_or(Rejection::NoPendingCard)?;

        let player = self.state.current_id();
        card_effects::apply(&mut self.state, &self.config, player, &drawn.card.effect);
        finish_turn(&mut self.state);
        Ok(())
    }

    fn try_skip(&mut self) -> Result<(), Rejection> {
        if self.state.phase != Phase::Action {
            return Err(Rejection::WrongPhase(self.state.phase));
        }
        if self.state.pending_action.is_none() {
            return Err(Rejection::NoPendingAction);
        }

        log::debug!("{} skipped {:?}", self.state.current_id(), self.state.pending_action);
        finish_turn(&mut self.state);
        Ok(())
    }

    fn try_advance(&mut self) -> Result<(), Rejection> {
        if matches!(self.state.phase, Phase::Rolling | Phase::Moving) {
            return Err(Rejection::WrongPhase(self.state.phase));
        }

        self.state.pending_action = None;
        self.state.pending_card = None;
        self.state.rolled_doubles = false;
        advance_seat(&mut self.state);
        Ok(())
    }
}
