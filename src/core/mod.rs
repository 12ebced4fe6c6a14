//! Core engine types: players, state, phases, events, RNG, configuration.
//!
//! This module holds the data the rules operate on. It has no
//! dependency on presentation.

pub mod config;
pub mod event;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use event::{GameEvent, ReleaseReason};
pub use phase::{Dice, DrawnCard, Ownership, PendingAction, Phase};
pub use player::{JailStatus, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use state::{GameState, Snapshot};
