//! Command rejections.
//!
//! A rejected command leaves the state untouched. The named command methods
//! on [`Engine`](super::Engine) log and discard these; [`Engine::execute`]
//! hands them back to callers that want to branch on the reason.
//!
//! [`Engine::execute`]: super::Engine::execute

use thiserror::Error;

use crate::board::TileId;
use crate::core::{Phase, PlayerId};

/// Why a command was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("command not valid in {0} phase")]
    WrongPhase(Phase),

    #[error("insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("tile {0} is already owned")]
    AlreadyOwned(TileId),

    #[error("tile {0} cannot be bought")]
    NotOwnable(TileId),

    #[error("tile {0} has no owner")]
    NotOwned(TileId),

    #[error("tile {tile} belongs to {owner}")]
    NotOwner { tile: TileId, owner: PlayerId },

    #[error("tile {0} cannot be built on")]
    NotBuildable(TileId),

    #[error("tile {0} already has a hotel")]
    HotelCap(TileId),

    #[error("owner of tile {0} cannot pay rent to themself")]
    SelfRent(TileId),

    #[error("no pending prompt for tile {0}")]
    NoMatchingPrompt(TileId),

    #[error("no pending prompt")]
    NoPendingAction,

    #[error("no pending card")]
    NoPendingCard,

    #[error("{0} is not in jail")]
    NotInJail(PlayerId),

    #[error("{0} has no escape card")]
    NoEscapeCard(PlayerId),

    #[error("{0} is not seated")]
    UnknownPlayer(PlayerId),
}
