//! Game rules and the command API.
//!
//! `Engine` is the only entry point presentation needs. The submodules
//! hold the rules themselves as functions over `GameState`:
//! - `movement`: stepping, wrapping, the GO bonus
//! - `arrival`: tile effects on landing
//! - `property`: buy, build, rent
//! - `jail`: jail entry and release
//! - `card_effects`: card draw and resolution
//! - `turn`: hand-off between seats

pub mod arrival;
pub mod card_effects;
pub mod command;
pub mod engine;
pub mod error;
pub mod jail;
pub mod movement;
pub mod property;
pub mod turn;

pub use command::Command;
pub use engine::Engine;
pub use error::Rejection;
