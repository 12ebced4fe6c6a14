//! Card descriptors and their effects.
//!
//! Cards are immutable. Drawing picks one uniformly from its deck and
//! leaves the deck as it was, so decks never run out.

use serde::{Deserialize, Serialize};

use crate::board::TileId;

/// Which deck a card comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    Chest,
    Chance,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chest => write!(f, "Community Chest"),
            DeckKind::Chance => write!(f, "Chance"),
        }
    }
}

/// What a card does to the player who acknowledges it.
///
/// Serialized tagged by `action`, so card data reads as
/// `{"text": "...", "action": "pay", "amount": 150}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CardEffect {
    Collect {
        amount: i64,
    },
    Pay {
        amount: i64,
    },
    #[serde(alias = "jail")]
    SendToJail,
    MoveTo {
        #[serde(alias = "position")]
        target: TileId,
    },
    #[serde(alias = "moveBack")]
    MoveBackBy {
        spaces: usize,
    },
    #[serde(alias = "jailCard")]
    GrantEscapeCard,
    /// Any action this engine does not know. Applies as a no-op.
    #[serde(other)]
    Unknown,
}

/// A drawable card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub text: String,
    #[serde(flatten)]
    pub effect: CardEffect,
}

impl Card {
    pub fn new(text: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            text: text.into(),
            effect,
        }
    }

    pub fn collect(text: impl Into<String>, amount: i64) -> Self {
        Self::new(text, CardEffect::Collect { amount })
    }

    pub fn pay(text: impl Into<String>, amount: i64) -> Self {
        Self::new(text, CardEffect::Pay { amount })
    }

    pub fn send_to_jail(text: impl Into<String>) -> Self {
        Self::new(text, CardEffect::SendToJail)
    }

    pub fn move_to(text: impl Into<String>, target: TileId) -> Self {
        Self::new(text, CardEffect::MoveTo { target })
    }

    pub fn move_back(text: impl Into<String>, spaces: usize) -> Self {
        Self::new(text, CardEffect::MoveBackBy { spaces })
    }

    pub fn escape(text: impl Into<String>) -> Self {
        Self::new(text, CardEffect::GrantEscapeCard)
    }
}

/// The two fixed decks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decks {
    #[serde(alias = "communityChest")]
    pub chest: Vec<Card>,
    pub chance: Vec<Card>,
}

impl Decks {
    pub fn new(chest: Vec<Card>, chance: Vec<Card>) -> Self {
        Self { chest, chance }
    }

    /// The classic card texts with the effects this engine supports.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(super::standard::chest(), super::standard::chance())
    }

    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &[Card] {
        match kind {
            DeckKind::Chest => &self.chest,
            DeckKind::Chance => &self.chance,
        }
    }
}

impl Default for Decks {
    fn default() -> Self {
        Self::standard()
    }
}
