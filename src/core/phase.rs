//! Turn phase, dice, prompts, and ownership records.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::{TileId, HOTEL_TIER, MAX_HOUSES};
use crate::cards::{Card, DeckKind};

/// Where the engine is in the turn state machine.
///
/// ```text
/// Idle --roll--> Rolling --tick--> Moving --tick*--> Action | Idle
///                   |                                  |
///                   +--(jailed, no doubles)--> Idle    +--buy/build/skip/ack--> Idle
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the current player to roll.
    #[default]
    Idle,
    /// Dice are known; resolution pending.
    Rolling,
    /// Token is advancing one tile per tick.
    Moving,
    /// Blocked on a buy/build decision or a card acknowledgment.
    Action,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Rolling => "rolling",
            Phase::Moving => "moving",
            Phase::Action => "action",
        };
        f.write_str(name)
    }
}

/// A pair of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice(pub u8, pub u8);

impl Dice {
    #[must_use]
    pub const fn total(self) -> u8 {
        self.0 + self.1
    }

    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.0 == self.1
    }
}

impl Default for Dice {
    fn default() -> Self {
        Dice(1, 1)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.0, self.1)
    }
}

/// Decision the current player must make before the turn can end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PendingAction {
    /// Landed on an unowned tile.
    Buy { tile: TileId, price: i64 },
    /// Landed on an own street that can still be improved.
    Build { tile: TileId, cost: i64, houses: u8 },
}

impl PendingAction {
    #[must_use]
    pub fn tile(&self) -> TileId {
        match self {
            PendingAction::Buy { tile, .. } | PendingAction::Build { tile, .. } => *tile,
        }
    }
}

/// A drawn card awaiting acknowledgment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub deck: DeckKind,
    pub card: Card,
}

/// Mutable per-tile ownership record.
///
/// Created on purchase and never removed. `houses` is 0 whenever
/// `has_hotel` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ownership {
    pub owner: PlayerId,
    pub houses: u8,
    pub has_hotel: bool,
}

impl Ownership {
    /// Fresh, unimproved record.
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            houses: 0,
            has_hotel: false,
        }
    }

    /// Index into the tile's rent schedule.
    #[must_use]
    pub fn rent_tier(&self) -> usize {
        if self.has_hotel {
            HOTEL_TIER
        } else {
            self.houses as usize
        }
    }

    /// Add one improvement: a house, or a hotel once four houses stand.
    ///
    /// Returns false and leaves the record alone at the hotel cap.
    pub fn improve(&mut self) -> bool {
        if self.has_hotel {
            return false;
        }
        if self.houses >= MAX_HOUSES {
            self.houses = 0;
            self.has_hotel = true;
        } else {
            self.houses += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice() {
        assert_eq!(Dice(4, 2).total(), 6);
        assert!(!Dice(4, 2).is_doubles());
        assert!(Dice(3, 3).is_doubles());
        assert_eq!(Dice::default(), Dice(1, 1));
    }

    #[test]
    fn test_ownership_improve_path() {
        let mut record = Ownership::new(PlayerId::new(1));

        for expected in 1..=4 {
            assert!(record.improve());
            assert_eq!(record.houses, expected);
            assert_eq!(record.rent_tier(), expected as usize);
        }

        assert!(record.improve());
        assert_eq!(record.houses, 0);
        assert!(record.has_hotel);
        assert_eq!(record.rent_tier(), HOTEL_TIER);

        // Hotel is the cap
        assert!(!record.improve());
        assert_eq!(record.houses, 0);
        assert!(record.has_hotel);
    }

    #[test]
    fn test_pending_action_tile() {
        let buy = PendingAction::Buy { tile: TileId::new(3), price: 60 };
        assert_eq!(buy.tile(), TileId::new(3));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Idle.to_string(), "idle");
        assert_eq!(Phase::Action.to_string(), "action");
    }
}
