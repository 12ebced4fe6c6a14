//! Chance and Community Chest cards.
//!
//! ## Key Types
//!
//! - `Card`: Card text plus its effect
//! - `CardEffect`: Collect, pay, go to jail, move, escape card
//! - `Decks`: The two fixed decks, drawn with replacement

pub mod card;
pub mod standard;

pub use card::{Card, CardEffect, DeckKind, Decks};
