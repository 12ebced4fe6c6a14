//! Token movement and the GO bonus.
//!
//! Two GO rules coexist and are kept apart on purpose:
//! - dice movement pays the bonus whenever a step lands on index 0
//! - a card teleport pays it when the target is numerically below the
//!   current position and is not the jail tile

use crate::board::TileId;
use crate::core::{GameConfig, GameEvent, GameState, Phase, PlayerId};

/// Put the current player's token in motion for `steps` tiles.
pub fn start_moving(state: &mut GameState, steps: u8) {
    let player = state.current_id();
    state.steps_remaining = steps;
    state.moving_position = Some(state.players[player].position);
    state.phase = Phase::Moving;
}

/// Advance the moving token one tile.
///
/// Returns true once the final step has been taken.
pub fn step(state: &mut GameState, config: &GameConfig) -> bool {
    if state.steps_remaining == 0 {
        return true;
    }

    let player = state.current_id();
    let from = state.players[player].position;
    let to = config.board.advance(from, 1);

    state.players[player].position = to;
    state.moving_position = Some(to);
    state.steps_remaining -= 1;
    state.record(GameEvent::Moved { player, from, to });
    log::debug!("{} steps {} -> {}", player, from, to);

    if to == TileId::GO {
        let name = state.players[player].name.clone();
        award_go(state, config, player);
        state.notify(format!("{} passed GO! +${}", name, config.go_bonus));
    }

    state.steps_remaining == 0
}

/// Credit the GO bonus.
pub fn award_go(state: &mut GameState, config: &GameConfig, player: PlayerId) {
    state.players[player].balance += config.go_bonus;
    state.record(GameEvent::PassedGo { player, bonus: config.go_bonus });
}

/// Card teleport GO test.
#[must_use]
pub fn move_to_passes_go(from: TileId, target: TileId, jail: TileId) -> bool {
    target < from && target != jail
}

/// Move a token directly, without stepping through the tiles between.
pub fn relocate(state: &mut GameState, player: PlayerId, to: TileId) {
    let from = state.players[player].position;
    state.players[player].position = to;
    state.record(GameEvent::Moved { player, from, to });
}
