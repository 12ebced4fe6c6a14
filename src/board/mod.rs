//! Board layout: the ordered tile table.
//!
//! The engine treats the board as static input. [`Board::standard`] builds
//! the classic 40-tile layout; any other table with a jail corner works too.

pub mod standard;
pub mod tile;

pub use tile::{Corner, Tile, TileId, TileKind, HOTEL_TIER, MAX_HOUSES};

use serde::{Deserialize, Serialize};

/// Ordered tile table. Tile `i` sits at board index `i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a board from tiles in board order.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The classic 40-tile board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard::tiles())
    }

    /// Number of tiles (board size for movement arithmetic).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Tile at an index known to be on the board.
    ///
    /// Positions are always reduced modulo the board size, so every
    /// position the engine holds is valid.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index() % self.tiles.len()]
    }

    /// Index of the jail corner, or GO when the table has none.
    #[must_use]
    pub fn jail_index(&self) -> TileId {
        self.tiles
            .iter()
            .find(|t| t.kind == TileKind::Corner(Corner::Jail))
            .map_or(TileId::GO, |t| t.id)
    }

    /// Position `steps` tiles forward from `from`, wrapping.
    #[must_use]
    pub fn advance(&self, from: TileId, steps: usize) -> TileId {
        TileId(((from.index() + steps) % self.len()) as u8)
    }

    /// Position `steps` tiles back from `from`, wrapping.
    #[must_use]
    pub fn retreat(&self, from: TileId, steps: usize) -> TileId {
        let size = self.len();
        TileId(((from.index() + size - steps % size) % size) as u8)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
