//! Card draw and acknowledgment integration tests.

use board_engine::cards::{Card, CardEffect, DeckKind, Decks};
use board_engine::core::{GameConfig, GameEvent, GameState, Phase, PlayerId, ScriptedRng};
use board_engine::rules::{Command, Engine, Rejection};
use board_engine::TileId;

const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);

fn engine_with_decks(position: u8, decks: Decks, rng: ScriptedRng) -> Engine<ScriptedRng> {
    let config = GameConfig::default().with_player_count(2).with_decks(decks);
    let mut state = GameState::new(&config);
    state.players[P1].position = TileId::new(position);
    Engine::from_state(config, state, rng)
}

/// Both decks hold the same single card.
fn only(card: Card) -> Decks {
    Decks::new(vec![card.clone()], vec![card])
}

#[test]
fn test_pay_card_charges_once() {
    // Standard chest deck, "Pay school fees of $150"
    let rng = ScriptedRng::new().with_roll(1, 1).with_pick(10);
    let mut engine = engine_with_decks(0, Decks::standard(), rng);

    assert_eq!(engine.play_roll(), Phase::Action);

    let snapshot = engine.snapshot();
    let drawn = snapshot.pending_card.as_ref().unwrap();
    assert_eq!(drawn.deck, DeckKind::Chest);
    assert_eq!(drawn.card.text, "Pay school fees of $150");
    assert_eq!(drawn.card.effect, CardEffect::Pay { amount: 150 });
    // Nothing applied before acknowledgment
    assert_eq!(snapshot.players[0].balance, 1500);

    engine.acknowledge_card();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.players[0].balance, 1350);
    assert!(snapshot.pending_card.is_none());
    assert_eq!(snapshot.notification.as_deref(), Some("Player 1 paid $150"));

    // The card is gone; a second acknowledgment changes nothing
    assert_eq!(
        engine.execute(Command::AcknowledgeCard),
        Err(Rejection::WrongPhase(Phase::Idle))
    );
    assert_eq!(engine.player(P1).unwrap().balance, 1350);
}

#[test]
fn test_collect_card() {
    let mut engine = engine_with_decks(
        4,
        only(Card::collect("Bank pays you dividend of $50", 50)),
        ScriptedRng::new().with_roll(1, 2),
    );

    engine.play_roll();
    engine.acknowledge_card();

    assert_eq!(engine.player(P1).unwrap().balance, 1550);
    assert_eq!(
        engine.snapshot().notification.as_deref(),
        Some("Player 1 collected $50!")
    );
    assert_eq!(engine.current_player().id, P2);
}

#[test]
fn test_move_to_forward_does_not_pay_go() {
    let mut engine = engine_with_decks(
        4,
        only(Card::move_to("Advance to Boardwalk", TileId::new(39))),
        ScriptedRng::new().with_roll(1, 2),
    );

    engine.play_roll();
    engine.acknowledge_card();

    let player = engine.player(P1).unwrap();
    assert_eq!(player.position, TileId::new(39));
    assert_eq!(player.balance, 1500);
    assert_eq!(engine.snapshot().notification.as_deref(), Some("Moved to Boardwalk"));
    // The destination tile is not resolved
    assert!(engine.ownership(TileId::new(39)).is_none());
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn test_move_to_behind_pays_go() {
    let mut engine = engine_with_decks(
        33,
        only(Card::move_to("Advance to St. Charles Place", TileId::new(11))),
        ScriptedRng::new().with_roll(2, 1),
    );

    // 33 + 3 = Chance
    engine.play_roll();
    engine.acknowledge_card();

    let player = engine.player(P1).unwrap();
    assert_eq!(player.position, TileId::new(11));
    assert_eq!(player.balance, 1700);
    assert_eq!(engine.snapshot().notification.as_deref(), Some("Passed GO! +$200"));
}

#[test]
fn test_move_to_go_from_chance() {
    let mut engine = engine_with_decks(
        4,
        only(Card::move_to("Advance to GO (Collect $200)", TileId::GO)),
        ScriptedRng::new().with_roll(1, 2),
    );

    engine.play_roll();
    engine.acknowledge_card();

    let player = engine.player(P1).unwrap();
    assert_eq!(player.position, TileId::GO);
    assert_eq!(player.balance, 1700);
}

#[test]
fn test_move_back_never_pays_go() {
    let mut engine = engine_with_decks(
        0,
        only(Card::move_back("Go Back 3 Spaces", 3)),
        ScriptedRng::new().with_roll(1, 1),
    );

    // 0 + 2 = Community Chest, back 3 wraps to 39
    engine.play_roll();
    engine.acknowledge_card();

    let player = engine.player(P1).unwrap();
    assert_eq!(player.position, TileId::new(39));
    assert_eq!(player.balance, 1500);
    assert_eq!(engine.snapshot().notification.as_deref(), Some("Moved back 3 spaces"));
}

#[test]
fn test_jail_card_ends_doubles() {
    let mut engine = engine_with_decks(
        0,
        only(Card::send_to_jail("Go to Jail")),
        ScriptedRng::new().with_roll(1, 1),
    );

    engine.play_roll();
    engine.acknowledge_card();

    let snapshot = engine.snapshot();
    assert!(snapshot.is_jailed(P1));
    assert_eq!(snapshot.players[0].position, TileId::new(10));
    assert_eq!(snapshot.players[0].balance, 1500);
    // Doubles do not earn a roll from jail
    assert_eq!(snapshot.current().id, P2);
}

#[test]
fn test_escape_card_then_use() {
    let mut engine = engine_with_decks(
        4,
        only(Card::escape("Get Out of Jail Free")),
        ScriptedRng::new().with_roll(1, 2),
    );

    engine.play_roll();
    engine.acknowledge_card();
    assert!(engine.player(P1).unwrap().has_escape_card);
    assert_eq!(
        engine.snapshot().notification.as_deref(),
        Some("Got Get Out of Jail Free card!")
    );

    // Not jailed yet, so the card is kept
    assert_eq!(
        engine.execute(Command::UseEscapeCard { player: P1 }),
        Err(Rejection::NotInJail(P1))
    );
    assert!(engine.player(P1).unwrap().has_escape_card);
}

#[test]
fn test_unknown_action_is_noop() {
    let decks: Decks = serde_json::from_str(
        r#"{
            "communityChest": [{ "text": "Mystery", "action": "teleportHome" }],
            "chance": [{ "text": "Mystery", "action": "teleportHome" }]
        }"#,
    )
    .unwrap();
    let mut engine = engine_with_decks(4, decks, ScriptedRng::new().with_roll(1, 2));

    engine.play_roll();
    assert_eq!(
        engine.snapshot().pending_card.map(|c| c.card.effect),
        Some(CardEffect::Unknown)
    );

    engine.acknowledge_card();

    let player = engine.player(P1).unwrap();
    assert_eq!(player.position, TileId::new(7));
    assert_eq!(player.balance, 1500);
    assert_eq!(engine.phase(), Phase::Idle);
}

#[test]
fn test_empty_deck_ends_turn() {
    let mut engine = engine_with_decks(
        4,
        Decks::new(vec![], vec![]),
        ScriptedRng::new().with_roll(1, 2),
    );

    assert_eq!(engine.play_roll(), Phase::Idle);
    assert!(engine.snapshot().pending_card.is_none());
    assert_eq!(engine.current_player().id, P2);
    assert!(!engine.events().any(|e| matches!(e, GameEvent::CardDrawn { .. })));
}

#[test]
fn test_skip_does_not_discard_card() {
    let mut engine = engine_with_decks(
        4,
        only(Card::pay("Speeding fine $15", 15)),
        ScriptedRng::new().with_roll(1, 2),
    );

    engine.play_roll();

    assert_eq!(
        engine.execute(Command::SkipPendingAction),
        Err(Rejection::NoPendingAction)
    );
    assert!(engine.snapshot().pending_card.is_some());
}
