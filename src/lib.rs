//! # board-engine
//!
//! A turn-based property board game engine.
//!
//! ## Design Principles
//!
//! 1. **One State Record**: All game data lives in `GameState`, owned by
//!    the `Engine`. Presentation reads a `Snapshot` and issues commands.
//!
//! 2. **Explicit Phases**: The engine never waits on a clock. A roll is a
//!    sequence of discrete `tick()` steps an external scheduler drives.
//!
//! 3. **Injectable Randomness**: Dice and card draws go through
//!    `RandomSource`, so tests script exact games.
//!
//! 4. **Rejection, Not Failure**: Invalid commands leave the state
//!    unchanged. `Engine::execute` reports why.
//!
//! ## Modules
//!
//! - `core`: Players, state, snapshot, phases, events, RNG, configuration
//! - `board`: Tile descriptors and the standard board
//! - `cards`: Card effects and the standard decks
//! - `rules`: The engine and its rule functions

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Dice, DrawnCard, GameConfig, GameEvent, GameRng, GameState, JailStatus, Ownership,
    PendingAction, Phase, Player, PlayerId, PlayerMap, RandomSource, ReleaseReason, ScriptedRng,
    Snapshot,
};

pub use crate::board::{Board, Corner, Tile, TileId, TileKind};

pub use crate::cards::{Card, CardEffect, DeckKind, Decks};

pub use crate::rules::{Command, Engine, Rejection};
