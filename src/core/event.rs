//! Event journal.
//!
//! Every transition the engine makes appends a [`GameEvent`]. The journal
//! lets presentation animate what happened since its last frame without
//! diffing snapshots, and gives tests an exact record of a turn.

use serde::{Deserialize, Serialize};

use super::phase::Dice;
use super::player::PlayerId;
use crate::board::TileId;
use crate::cards::{CardEffect, DeckKind};

/// How a player got out of jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseReason {
    Doubles,
    Bail,
    /// Bail charged after the maximum jail turns.
    ForcedBail,
    EscapeCard,
}

/// A recorded state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Rolled { player: PlayerId, dice: Dice },
    /// One token step, or a card relocation.
    Moved { player: PlayerId, from: TileId, to: TileId },
    PassedGo { player: PlayerId, bonus: i64 },
    SentToJail { player: PlayerId },
    Released { player: PlayerId, reason: ReleaseReason },
    /// A non-doubles roll served in jail.
    JailTurnServed { player: PlayerId, turns: u8 },
    TaxPaid { player: PlayerId, tile: TileId, amount: i64 },
    RentPaid { payer: PlayerId, owner: PlayerId, tile: TileId, amount: i64 },
    Bought { player: PlayerId, tile: TileId, price: i64 },
    Built { player: PlayerId, tile: TileId, cost: i64, houses: u8, hotel: bool },
    CardDrawn { player: PlayerId, deck: DeckKind, text: String },
    CardApplied { player: PlayerId, effect: CardEffect },
    TurnEnded { player: PlayerId, next: PlayerId },
}

impl GameEvent {
    /// The player this event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::Rolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::PassedGo { player, .. }
            | GameEvent::SentToJail { player }
            | GameEvent::Released { player, .. }
            | GameEvent::JailTurnServed { player, .. }
            | GameEvent::TaxPaid { player, .. }
            | GameEvent::Bought { player, .. }
            | GameEvent::Built { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::CardApplied { player, .. }
            | GameEvent::TurnEnded { player, .. } => *player,
            GameEvent::RentPaid { payer, .. } => *payer,
        }
    }
}
