//! Turn hand-off.

use crate::core::{GameEvent, GameState, Phase};

/// End the current turn segment.
///
/// Doubles earn the same player another roll unless that player ended up
/// in jail; otherwise play passes to the next seat.
pub fn finish_turn(state: &mut GameState) {
    let player = state.current_id();
    let again = state.rolled_doubles && !state.in_jail(player);

    state.rolled_doubles = false;
    state.pending_action = None;
    state.pending_card = None;
    state.moving_position = None;
    state.steps_remaining = 0;
    state.phase = Phase::Idle;

    if again {
        log::info!("{} rolled doubles and goes again", player);
    } else {
        advance_seat(state);
    }
}

/// Pass play to the next seat, wrapping.
pub fn advance_seat(state: &mut GameState) {
    let player = state.current_id();
    state.current = (state.current + 1) % state.player_count();
    state.turn += 1;
    state.phase = Phase::Idle;

    let next = state.current_id();
    state.record(GameEvent::TurnEnded { player, next });
    log::info!("turn {}: {} to play", state.turn, next);
}
