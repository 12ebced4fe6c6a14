//! Drawing cards and applying their effects.
//!
//! A draw only raises the card; nothing happens until the current player
//! acknowledges it.

use super::jail::send_to_jail;
use super::movement::{award_go, move_to_passes_go, relocate};
use crate::board::TileId;
use crate::cards::{CardEffect, DeckKind};
use crate::core::{DrawnCard, GameConfig, GameEvent, GameState, Phase, PlayerId, RandomSource};

/// Draw one card with replacement and block on acknowledgment.
///
/// An empty deck draws nothing and returns false.
pub fn draw<R: RandomSource>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    deck: DeckKind,
) -> bool {
    let cards = config.decks.deck(deck);
    if cards.is_empty() {
        log::debug!("{} deck is empty, nothing drawn", deck);
        return false;
    }

    let card = cards[rng.pick(cards.len())].clone();
    let player = state.current_id();
    state.record(GameEvent::CardDrawn { player, deck, text: card.text.clone() });
    log::info!("{} drew {}: {}", player, deck, card.text);

    state.pending_card = Some(DrawnCard { deck, card });
    state.phase = Phase::Action;
    true
}

/// Apply a card effect to `player`.
pub fn apply(state: &mut GameState, config: &GameConfig, player: PlayerId, effect: &CardEffect) {
    let name = state.players[player].name.clone();

    match *effect {
        CardEffect::Collect { amount } => {
            state.players[player].balance += amount;
            state.notify(format!("{} collected ${}!", name, amount));
        }
        CardEffect::Pay { amount } => {
            state.players[player].balance -= amount;
            state.notify(format!("{} paid ${}", name, amount));
        }
        CardEffect::SendToJail => send_to_jail(state, config, player),
        CardEffect::MoveTo { target } => {
            let target = TileId((target.index() % config.board.len()) as u8);
            let from = state.players[player].position;
            let passed = move_to_passes_go(from, target, config.board.jail_index());

            relocate(state, player, target);
            if passed {
                award_go(state, config, player);
                state.notify(format!("Passed GO! +${}", config.go_bonus));
            } else {
                let tile = config.board.tile(target).name.clone();
                state.notify(format!("Moved to {}", tile));
            }
        }
        CardEffect::MoveBackBy { spaces } => {
            let from = state.players[player].position;
            relocate(state, player, config.board.retreat(from, spaces));
            state.notify(format!("Moved back {} spaces", spaces));
        }
        CardEffect::GrantEscapeCard => {
            state.players[player].has_escape_card = true;
            state.notify("Got Get Out of Jail Free card!");
        }
        CardEffect::Unknown => {}
    }

    state.record(GameEvent::CardApplied { player, effect: effect.clone() });
}
