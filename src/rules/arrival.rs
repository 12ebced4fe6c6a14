//! What happens when a token comes to rest.

use super::card_effects;
use super::jail::send_to_jail;
use super::property::settle_rent;
use crate::board::{Corner, TileKind};
use crate::cards::DeckKind;
use crate::core::{GameConfig, GameEvent, GameState, PendingAction, Phase, RandomSource};

/// Result of resolving the arrival tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// A prompt or card is pending; the engine sits in `Action`.
    Blocked,
    /// Nothing left to decide; the turn segment is over.
    Done,
}

/// Resolve the tile under the current player's token.
pub fn resolve<R: RandomSource>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> Arrival {
    let player = state.current_id();
    let position = state.players[player].position;
    let tile = config.board.tile(position);

    match tile.kind {
        TileKind::Corner(Corner::GoToJail) => {
            send_to_jail(state, config, player);
            Arrival::Done
        }
        TileKind::Chest | TileKind::Chance => {
            let deck = if tile.kind == TileKind::Chest {
                DeckKind::Chest
            } else {
                DeckKind::Chance
            };
            if card_effects::draw(state, config, rng, deck) {
                Arrival::Blocked
            } else {
                Arrival::Done
            }
        }
        TileKind::Tax => {
            let amount = tile.tax_fee();
            state.players[player].balance -= amount;
            state.notify(format!("Paid ${} tax", amount));
            state.record(GameEvent::TaxPaid { player, tile: position, amount });
            log::info!("{} paid ${} tax", player, amount);
            Arrival::Done
        }
        TileKind::Property | TileKind::Railroad | TileKind::Utility => {
            match state.ownership.get(&position).copied() {
                None => {
                    state.pending_action = Some(PendingAction::Buy { tile: position, price: tile.price });
                    state.phase = Phase::Action;
                    Arrival::Blocked
                }
                Some(record) if record.owner != player => {
                    if let Err(rejection) = settle_rent(state, config, position, player) {
                        log::debug!("rent on {} rejected: {}", position, rejection);
                    }
                    Arrival::Done
                }
                Some(record) if tile.is_buildable() && !record.has_hotel => {
                    state.pending_action = Some(PendingAction::Build {
                        tile: position,
                        cost: tile.build_cost(record.houses),
                        houses: record.houses,
                    });
                    state.phase = Phase::Action;
                    Arrival::Blocked
                }
                Some(_) => Arrival::Done,
            }
        }
        TileKind::Corner(_) => Arrival::Done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;
    use crate::core::{Ownership, PlayerId, ScriptedRng};

    const P1: PlayerId = PlayerId(1);

    fn land(position: u8, state: &mut GameState, config: &GameConfig) -> Arrival {
        state.players[P1].position = TileId(position);
        resolve(state, config, &mut ScriptedRng::new())
    }

    #[test]
    fn test_go_to_jail() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        assert_eq!(land(30, &mut state, &config), Arrival::Done);
        assert!(state.jail[P1].in_jail);
        assert_eq!(state.players[P1].position, TileId(10));
    }

    #[test]
    fn test_tax() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        assert_eq!(land(4, &mut state, &config), Arrival::Done);
        assert_eq!(state.players[P1].balance, 1300);
        assert_eq!(state.notification.as_deref(), Some("Paid $200 tax"));
    }

    #[test]
    fn test_card_tiles_block() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        assert_eq!(land(7, &mut state, &config), Arrival::Blocked);
        assert_eq!(state.pending_card.as_ref().map(|c| c.deck), Some(DeckKind::Chance));
    }

    #[test]
    fn test_unowned_prompts_buy() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        assert_eq!(land(12, &mut state, &config), Arrival::Blocked);
        assert_eq!(state.phase, Phase::Action);
        assert_eq!(
            state.pending_action,
            Some(PendingAction::Buy { tile: TileId(12), price: 150 })
        );
    }

    #[test]
    fn test_own_street_prompts_build() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.ownership.insert(TileId(6), Ownership { owner: P1, houses: 4, has_hotel: false });

        assert_eq!(land(6, &mut state, &config), Arrival::Blocked);
        assert_eq!(
            state.pending_action,
            Some(PendingAction::Build { tile: TileId(6), cost: 50, houses: 4 })
        );
    }

    #[test]
    fn test_own_hotel_or_railroad_does_nothing() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.ownership.insert(TileId(6), Ownership { owner: P1, houses: 0, has_hotel: true });
        state.ownership.insert(TileId(5), Ownership::new(P1));

        assert_eq!(land(6, &mut state, &config), Arrival::Done);
        assert_eq!(land(5, &mut state, &config), Arrival::Done);
        assert!(state.pending_action.is_none());
        assert_eq!(state.players[P1].balance, 1500);
    }

    #[test]
    fn test_rival_tile_charges_rent() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.ownership.insert(TileId(39), Ownership { owner: PlayerId(3), houses: 2, has_hotel: false });

        assert_eq!(land(39, &mut state, &config), Arrival::Done);
        assert_eq!(state.players[P1].balance, 900);
        assert_eq!(state.players[PlayerId(3)].balance, 2100);
    }

    #[test]
    fn test_unseated_owner_collects_nothing() {
        let config = GameConfig::default().with_player_count(2);
        let mut state = GameState::new(&config);
        state.ownership.insert(TileId(39), Ownership::new(PlayerId(7)));

        assert_eq!(land(39, &mut state, &config), Arrival::Done);
        assert_eq!(state.players[P1].balance, 1500);
        assert!(state.pending_action.is_none());
    }

    #[test]
    fn test_corners_do_nothing() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        for corner in [0, 10, 20] {
            assert_eq!(land(corner, &mut state, &config), Arrival::Done);
        }
        assert_eq!(state.players[P1].balance, 1500);
        assert!(!state.jail[P1].in_jail);
    }
}
