//! Jail entry and the three ways out: doubles, bail, escape card.

use super::error::Rejection;
use crate::core::{GameConfig, GameEvent, GameState, Phase, PlayerId, ReleaseReason};

/// Outcome of a roll made from jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JailRoll {
    /// Doubles: released, and the roll is moved normally.
    Released,
    /// Non-doubles: another turn served, no movement.
    Served,
    /// Non-doubles on the last allowed turn: bail charged, released, no movement.
    ForcedOut,
}

/// Lock a player up on the jail tile.
pub fn send_to_jail(state: &mut GameState, config: &GameConfig, player: PlayerId) {
    let jail = config.board.jail_index();
    super::movement::relocate(state, player, jail);
    state.jail[player].jail();

    let name = state.players[player].name.clone();
    state.notify(format!("{} went to Jail!", name));
    state.record(GameEvent::SentToJail { player });
    log::info!("{} sent to jail", player);
}

/// Resolve the current player's roll while jailed.
pub fn resolve_jailed_roll(state: &mut GameState, config: &GameConfig) -> JailRoll {
    let player = state.current_id();
    let name = state.players[player].name.clone();

    if state.dice.is_doubles() {
        state.jail[player].release();
        state.notify(format!("{} is free!", name));
        state.record(GameEvent::Released { player, reason: ReleaseReason::Doubles });
        return JailRoll::Released;
    }

    let turns = state.jail[player].turns.saturating_add(1);
    state.jail[player].turns = turns;
    state.record(GameEvent::JailTurnServed { player, turns });

    if turns < config.max_jail_turns {
        log::debug!("{} serves jail turn {}", player, turns);
        return JailRoll::Served;
    }

    // Forced bail is charged even into debt.
    state.players[player].balance -= config.bail_fee;
    state.jail[player].release();
    state.notify(format!("{} paid ${} bail", name, config.bail_fee));
    state.record(GameEvent::Released { player, reason: ReleaseReason::ForcedBail });
    log::info!("{} forced to pay bail after {} turns", player, turns);
    JailRoll::ForcedOut
}

fn check_release(state: &GameState, player: PlayerId) -> Result<(), Rejection> {
    if !state.players.contains(player) {
        return Err(Rejection::UnknownPlayer(player));
    }
    if matches!(state.phase, Phase::Rolling | Phase::Moving) {
        return Err(Rejection::WrongPhase(state.phase));
    }
    if !state.jail[player].in_jail {
        return Err(Rejection::NotInJail(player));
    }
    Ok(())
}

/// Buy a jailed player out.
///
/// Short funds set a notification but change nothing else.
pub fn pay_bail(state: &mut GameState, config: &GameConfig, player: PlayerId) -> Result<(), Rejection> {
    check_release(state, player)?;

    let available = state.players[player].balance;
    if available < config.bail_fee {
        state.notify("Not enough money for bail!");
        return Err(Rejection::InsufficientFunds { needed: config.bail_fee, available });
    }

    state.players[player].balance -= config.bail_fee;
    state.jail[player].release();

    let name = state.players[player].name.clone();
    state.notify(format!("{} paid ${} bail", name, config.bail_fee));
    state.record(GameEvent::Released { player, reason: ReleaseReason::Bail });
    log::info!("{} paid bail", player);
    Ok(())
}

/// Spend an escape card to leave jail.
pub fn use_escape_card(state: &mut GameState, player: PlayerId) -> Result<(), Rejection> {
    check_release(state, player)?;
    if !state.players[player].has_escape_card {
        return Err(Rejection::NoEscapeCard(player));
    }

    state.players[player].has_escape_card = false;
    state.jail[player].release();

    let name = state.players[player].name.clone();
    state.notify(format!("{} used Get Out of Jail card!", name));
    state.record(GameEvent::Released { player, reason: ReleaseReason::EscapeCard });
    log::info!("{} used an escape card", player);
    Ok(())
}
