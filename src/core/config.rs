//! Game configuration.
//!
//! Games configure the engine at startup by providing:
//! - seat names and starting balance
//! - the fixed amounts (GO bonus, bail fee) and the jail turn limit
//! - the tile table and the two card decks
//!
//! ```
//! use board_engine::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_player_count(2)
//!     .with_starting_balance(1000);
//!
//! assert_eq!(config.player_count(), 2);
//! assert_eq!(config.player_names[1], "Player 2");
//! ```

use serde::{Deserialize, Serialize};

use super::player::MAX_PLAYERS;
use crate::board::Board;
use crate::cards::Decks;

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat names in turn order. Seat `i` gets `PlayerId(i + 1)`.
    pub player_names: Vec<String>,

    pub starting_balance: i64,

    /// Paid on passing or landing on GO.
    pub go_bonus: i64,

    /// Fee to leave jail early, also charged when the jail turn limit is hit.
    pub bail_fee: i64,

    /// Non-doubles rolls served before bail is forced.
    pub max_jail_turns: u8,

    pub board: Board,

    pub decks: Decks,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: default_names(4),
            starting_balance: 1500,
            go_bonus: 200,
            bail_fee: 50,
            max_jail_turns: 3,
            board: Board::standard(),
            decks: Decks::standard(),
        }
    }
}

fn default_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {}", i)).collect()
}

fn assert_player_count(count: usize) {
    assert!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&count),
        "Player count must be 2-8"
    );
}

impl GameConfig {
    /// Standard rules and board with four players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat players under the given names.
    #[must_use]
    pub fn with_players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert_player_count(names.len());
        self.player_names = names;
        self
    }

    /// Seat `count` players named `Player 1`..`Player N`.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert_player_count(count);
        self.player_names = default_names(count);
        self
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_go_bonus(mut self, bonus: i64) -> Self {
        self.go_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_bail_fee(mut self, fee: i64) -> Self {
        self.bail_fee = fee;
        self
    }

    #[must_use]
    pub fn with_max_jail_turns(mut self, turns: u8) -> Self {
        self.max_jail_turns = turns;
        self
    }

    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_decks(mut self, decks: Decks) -> Self {
        self.decks = decks;
        self
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }
}
