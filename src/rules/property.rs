//! Buying, building, and rent.
//!
//! Buy and build answer the prompt raised on arrival, so both require the
//! `Action` phase with a matching prompt. Rent settles immediately on
//! arrival and needs no prompt.

use super::error::Rejection;
use crate::board::TileId;
use crate::core::{GameConfig, GameEvent, GameState, Ownership, PendingAction, Phase, PlayerId};

fn check_prompt(state: &GameState, tile: TileId, want_buy: bool) -> Result<(), Rejection> {
    if state.phase != Phase::Action {
        return Err(Rejection::WrongPhase(state.phase));
    }
    match &state.pending_action {
        Some(PendingAction::Buy { tile: t, .. }) if want_buy && *t == tile => Ok(()),
        Some(PendingAction::Build { tile: t, .. }) if !want_buy && *t == tile => Ok(()),
        _ => Err(Rejection::NoMatchingPrompt(tile)),
    }
}

fn check_funds(available: i64, needed: i64) -> Result<(), Rejection> {
    if available < needed {
        return Err(Rejection::InsufficientFunds { needed, available });
    }
    Ok(())
}

/// Current player buys `tile` at list price.
pub fn buy(state: &mut GameState, config: &GameConfig, tile_id: TileId) -> Result<(), Rejection> {
    let tile = config.board.get(tile_id).ok_or(Rejection::NotOwnable(tile_id))?;
    if !tile.is_ownable() {
        return Err(Rejection::NotOwnable(tile_id));
    }
    if state.ownership.contains_key(&tile_id) {
        return Err(Rejection::AlreadyOwned(tile_id));
    }
    check_prompt(state, tile_id, true)?;

    let player = state.current_id();
    check_funds(state.players[player].balance, tile.price)?;

    let buyer = &mut state.players[player];
    buyer.balance -= tile.price;
    buyer.owned.push(tile_id);
    let name = buyer.name.clone();

    state.ownership.insert(tile_id, Ownership::new(player));
    state.notify(format!("{} bought {}!", name, tile.name));
    state.record(GameEvent::Bought { player, tile: tile_id, price: tile.price });
    log::info!("{} bought {} for ${}", player, tile.name, tile.price);
    Ok(())
}

/// Current player adds one house, or a hotel on top of four houses.
pub fn build(state: &mut GameState, config: &GameConfig, tile_id: TileId) -> Result<(), Rejection> {
    let tile = config.board.get(tile_id).ok_or(Rejection::NotOwned(tile_id))?;
    let record = *state.ownership.get(&tile_id).ok_or(Rejection::NotOwned(tile_id))?;

    let player = state.current_id();
    if record.owner != player {
        return Err(Rejection::NotOwner { tile: tile_id, owner: record.owner });
    }
    if !tile.is_buildable() {
        return Err(Rejection::NotBuildable(tile_id));
    }
    if record.has_hotel {
        return Err(Rejection::HotelCap(tile_id));
    }
    check_prompt(state, tile_id, false)?;

    let cost = tile.build_cost(record.houses);
    check_funds(state.players[player].balance, cost)?;

    let mut improved = record;
    improved.improve();
    state.players[player].balance -= cost;
    state.ownership.insert(tile_id, improved);

    let what = if improved.has_hotel { "hotel" } else { "house" };
    state.notify(format!("Built {} on {}!", what, tile.name));
    state.record(GameEvent::Built {
        player,
        tile: tile_id,
        cost,
        houses: improved.houses,
        hotel: improved.has_hotel,
    });
    log::info!("{} built a {} on {} for ${}", player, what, tile.name, cost);
    Ok(())
}

/// Rent owed on a tile at its current improvement level.
#[must_use]
pub fn rent_due(config: &GameConfig, tile: TileId, record: &Ownership) -> i64 {
    config.board.tile(tile).rent_for(record.rent_tier())
}

/// Move rent from `payer` to the tile's owner.
///
/// Both balances change together; the amount is returned.
pub fn settle_rent(
    state: &mut GameState,
    config: &GameConfig,
    tile: TileId,
    payer: PlayerId,
) -> Result<i64, Rejection> {
    let record = *state.ownership.get(&tile).ok_or(Rejection::NotOwned(tile))?;
    if record.owner == payer {
        return Err(Rejection::SelfRent(tile));
    }
    for seat in [payer, record.owner] {
        if !state.players.contains(seat) {
            return Err(Rejection::UnknownPlayer(seat));
        }
    }

    let amount = rent_due(config, tile, &record);
    let owner = record.owner;
    state.players[payer].balance -= amount;
    state.players[owner].balance += amount;

    let message = format!(
        "{} paid ${} rent to {}!",
        state.players[payer].name, amount, state.players[owner].name
    );
    state.notify(message);
    state.record(GameEvent::RentPaid { payer, owner, tile, amount });
    log::info!("{} paid ${} rent to {}", payer, amount, owner);
    Ok(amount)
}
