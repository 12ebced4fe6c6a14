//! Game state: the mutable record and its read-only snapshot.
//!
//! ## GameState
//!
//! The single record every command mutates:
//! - Players, jail status, and the ownership map
//! - Current seat, dice, phase
//! - Pending prompt or card, notification text
//! - Event journal
//!
//! ## Snapshot
//!
//! What presentation reads between commands. Cloning is cheap: the
//! ownership map is an `im` persistent map.

use im::{OrdMap, Vector};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::event::GameEvent;
use super::phase::{Dice, DrawnCard, Ownership, PendingAction, Phase};
use super::player::{JailStatus, Player, PlayerId, PlayerMap};
use crate::board::TileId;

/// Complete mutable game state.
///
/// Only the engine holds a `&mut GameState`; everything else sees it
/// through `&GameState` or a [`Snapshot`].
#[derive(Clone, Debug)]
pub struct GameState {
    pub players: PlayerMap<Player>,

    /// Ownership records by tile. Entries are never removed.
    pub ownership: OrdMap<TileId, Ownership>,

    pub jail: PlayerMap<JailStatus>,

    /// Seat index of the player whose turn it is.
    pub current: usize,

    pub dice: Dice,

    pub phase: Phase,

    pub pending_action: Option<PendingAction>,

    pub pending_card: Option<DrawnCard>,

    pub notification: Option<String>,

    /// Token steps left while `Moving`.
    pub steps_remaining: u8,

    /// Token position while `Moving`.
    pub moving_position: Option<TileId>,

    /// The roll that started this turn segment was doubles.
    pub rolled_doubles: bool,

    /// Turn number (starts at 1, increments on every hand-off).
    pub turn: u32,

    pub events: Vector<GameEvent>,
}

impl GameState {
    /// Seat every configured player on GO.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let count = config.player_count();
        let players = PlayerMap::new(count, |id| {
            Player::new(id, config.player_names[id.index()].clone(), config.starting_balance)
        });

        Self {
            players,
            ownership: OrdMap::new(),
            jail: PlayerMap::with_default(count),
            current: 0,
            dice: Dice::default(),
            phase: Phase::Idle,
            pending_action: None,
            pending_card: None,
            notification: None,
            steps_remaining: 0,
            moving_position: None,
            rolled_doubles: false,
            turn: 1,
            events: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// ID of the player whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        PlayerId::from_seat(self.current)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_id()]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.contains(id).then(|| &self.players[id])
    }

    #[must_use]
    pub fn ownership(&self, tile: TileId) -> Option<&Ownership> {
        self.ownership.get(&tile)
    }

    #[must_use]
    pub fn in_jail(&self, id: PlayerId) -> bool {
        self.jail.contains(id) && self.jail[id].in_jail
    }

    /// Total currency held by all players.
    #[must_use]
    pub fn total_balance(&self) -> i64 {
        self.players.values().map(|p| p.balance).sum()
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    pub fn record(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Capture the read model.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.values().cloned().collect(),
            ownership: self.ownership.clone(),
            current_player: self.current,
            dice: self.dice,
            phase: self.phase,
            in_jail: self.jail.iter().map(|(id, j)| (id, j.in_jail)).collect(),
            jail_turns: self.jail.iter().map(|(id, j)| (id, j.turns)).collect(),
            pending_action: self.pending_action.clone(),
            pending_card: self.pending_card.clone(),
            notification: self.notification.clone(),
            moving_position: self.moving_position,
            turn: self.turn,
        }
    }
}

/// Read-only view of the game for presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Players in seat order.
    pub players: Vec<Player>,
    pub ownership: OrdMap<TileId, Ownership>,
    /// Seat index of the current player.
    pub current_player: usize,
    pub dice: Dice,
    pub phase: Phase,
    pub in_jail: FxHashMap<PlayerId, bool>,
    pub jail_turns: FxHashMap<PlayerId, u8>,
    pub pending_action: Option<PendingAction>,
    pub pending_card: Option<DrawnCard>,
    pub notification: Option<String>,
    pub moving_position: Option<TileId>,
    pub turn: u32,
}

impl Snapshot {
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_jailed(&self, id: PlayerId) -> bool {
        self.in_jail.get(&id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.player_count(), 4);
        assert_eq!(state.current_id(), PlayerId::new(1));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.turn, 1);
        assert_eq!(state.total_balance(), 6000);
        assert!(state.ownership.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_player_lookup() {
        let state = GameState::new(&GameConfig::default().with_player_count(2));

        assert_eq!(state.player(PlayerId::new(2)).map(|p| p.name.as_str()), Some("Player 2"));
        assert!(state.player(PlayerId::new(3)).is_none());
        assert!(state.player(PlayerId::new(0)).is_none());
        assert!(!state.in_jail(PlayerId::new(9)));
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(&GameConfig::default());
        state.jail[PlayerId::new(2)].jail();
        state.notify("hello");
        state.ownership.insert(TileId::new(1), Ownership::new(PlayerId::new(3)));

        let snapshot = state.snapshot();

        assert_eq!(snapshot.players.len(), 4);
        assert_eq!(snapshot.current().id, PlayerId::new(1));
        assert!(snapshot.is_jailed(PlayerId::new(2)));
        assert!(!snapshot.is_jailed(PlayerId::new(1)));
        assert_eq!(snapshot.jail_turns[&PlayerId::new(2)], 0);
        assert_eq!(snapshot.notification.as_deref(), Some("hello"));
        assert_eq!(snapshot.ownership[&TileId::new(1)].owner, PlayerId::new(3));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = GameState::new(&GameConfig::default());
        let before = state.snapshot();

        state.players[PlayerId::new(1)].balance -= 100;
        state.ownership.insert(TileId::new(3), Ownership::new(PlayerId::new(1)));

        assert_eq!(before.players[0].balance, 1500);
        assert!(before.ownership.is_empty());
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let mut state = GameState::new(&GameConfig::default());
        state.jail[PlayerId::new(3)].jail();
        state.jail[PlayerId::new(3)].turns = 2;
        state.ownership.insert(
            TileId::new(39),
            Ownership { owner: PlayerId::new(2), houses: 3, has_hotel: false },
        );
        state.pending_action = Some(PendingAction::Buy { tile: TileId::new(5), price: 200 });
        state.phase = Phase::Action;
        state.notify("Player 1 passed GO! +$200");

        let snapshot = state.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let loaded: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, snapshot);
        assert!(loaded.is_jailed(PlayerId::new(3)));
        assert_eq!(loaded.jail_turns[&PlayerId::new(3)], 2);
    }
}
