//! Static tile descriptors.
//!
//! Tiles never change once a board is loaded. Mutable per-tile state
//! (owner, houses) lives in [`Ownership`](crate::core::Ownership) records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rent tier used once a tile carries a hotel.
pub const HOTEL_TIER: usize = 5;

/// Houses a tile holds before the next build becomes a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Board position / tile index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u8);

impl TileId {
    /// The starting tile.
    pub const GO: TileId = TileId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Corner and other non-purchasable special tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    Go,
    Jail,
    FreeParking,
    GoToJail,
}

/// What a tile does when a token lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Property,
    Railroad,
    Utility,
    Chest,
    Chance,
    Tax,
    Corner(Corner),
}

/// Immutable tile descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
    pub name: String,
    #[serde(default)]
    pub price: i64,
    /// Rent by improvement tier: 0 = unimproved, 1-4 = houses, 5 = hotel.
    /// Tax tiles keep their flat fee in tier 0.
    #[serde(default)]
    pub rent: SmallVec<[i64; 6]>,
    #[serde(default)]
    pub house_cost: i64,
    #[serde(default)]
    pub hotel_cost: i64,
    /// Color group, for presentation.
    #[serde(default)]
    pub color: Option<String>,
}

impl Tile {
    /// Create a tile of the given kind with no economics.
    pub fn new(id: TileId, kind: TileKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            price: 0,
            rent: SmallVec::new(),
            house_cost: 0,
            hotel_cost: 0,
            color: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_rent(mut self, rent: &[i64]) -> Self {
        self.rent = SmallVec::from_slice(rent);
        self
    }

    /// Set both house and hotel cost.
    #[must_use]
    pub fn with_build_costs(mut self, house_cost: i64, hotel_cost: i64) -> Self {
        self.house_cost = house_cost;
        self.hotel_cost = hotel_cost;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Can this tile be bought?
    #[must_use]
    pub fn is_ownable(&self) -> bool {
        matches!(
            self.kind,
            TileKind::Property | TileKind::Railroad | TileKind::Utility
        )
    }

    /// Can houses and hotels go on this tile?
    #[must_use]
    pub fn is_buildable(&self) -> bool {
        self.kind == TileKind::Property
    }

    /// Unimproved rent, 0 when the schedule is empty.
    #[must_use]
    pub fn base_rent(&self) -> i64 {
        self.rent.first().copied().unwrap_or(0)
    }

    /// Rent at a tier, falling back to base rent when the tier is absent.
    #[must_use]
    pub fn rent_for(&self, tier: usize) -> i64 {
        self.rent.get(tier).copied().unwrap_or_else(|| self.base_rent())
    }

    /// Flat fee charged by a tax tile.
    #[must_use]
    pub fn tax_fee(&self) -> i64 {
        self.base_rent()
    }

    /// Cost of the next improvement given the current house count.
    #[must_use]
    pub fn build_cost(&self, houses: u8) -> i64 {
        if houses < MAX_HOUSES {
            self.house_cost
        } else {
            self.hotel_cost
        }
    }
}
