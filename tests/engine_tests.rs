//! Turn gate, movement, combat and win-condition tests.
//!
//! Boards are set up by importing a crafted snapshot into a started match.

use castle_ccg::cards::{CardDefinition, CardInstance, Catalog, Category, Element, SubCategory};
use castle_ccg::core::{EngineConfig, EngineError, PlayerId, SlotId};
use castle_ccg::engine::GameEngine;
use castle_ccg::view::HandView;
use castle_ccg::zones::BoardSlotCard;

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn started() -> GameEngine {
    let mut engine = GameEngine::new(EngineConfig::default()).unwrap();
    engine.start_game(&["Ana", "Rui"]).unwrap();
    engine
}

/// Started match with extra cards on the board; ids start at 100.
fn with_board(cards: Vec<(CardInstance, PlayerId, usize)>) -> (GameEngine, Vec<SlotId>) {
    let mut engine = started();
    let mut snapshot = engine.export_state();
    let mut ids = Vec::new();
    for (i, (card, owner, zone)) in cards.into_iter().enumerate() {
        let id = SlotId(100 + i as u32);
        snapshot.cards_in_play.push(BoardSlotCard::new(id, owner, zone, card));
        ids.push(id);
    }
    engine.import_state(snapshot).unwrap();
    (engine, ids)
}

fn card(title: &str) -> CardInstance {
    Catalog::standard().instance(title).unwrap()
}

fn custom(attack: u32, defense: u32, hp: u32) -> CardInstance {
    CardDefinition::new("Practice Dummy", Category::Noble, SubCategory::Other)
        .with_stats(attack, defense, hp)
        .with_movement(1, 1)
        .instantiate()
}

// === Turn gate ===

#[test]
fn test_turn_passes_after_action() {
    let mut engine = started();

    let outcome = engine.play_card(P0, 0).unwrap();
    let report = outcome.end_turn.unwrap();
    assert_eq!(report.active_player_id, P1);
    assert_eq!(report.round, 1);
    assert!(engine.state().has_acted(P0));

    assert_eq!(engine.play_card(P0, 0), Err(EngineError::NotYourTurn));
}

#[test]
fn test_already_acted_is_rejected() {
    let mut engine = started();
    let mut snapshot = engine.export_state();
    snapshot.played_this_round.insert(P0, true);
    engine.import_state(snapshot).unwrap();

    assert_eq!(engine.play_card(P0, 0), Err(EngineError::AlreadyActed));
    assert_eq!(engine.state().hand(P0).unwrap().len(), 5);
}

#[test]
fn test_round_wraps_after_last_seat() {
    let mut engine = started();
    engine.play_card(P0, 0).unwrap();
    let report = engine.play_card(P1, 0).unwrap().end_turn.unwrap();

    assert_eq!(report.active_player_id, P0);
    assert_eq!(report.round, 2);
    assert!(engine.state().played_this_round.is_empty());
}

#[test]
fn test_played_card_leaves_hand() {
    let mut engine = started();
    let top = engine.state().hand(P0).unwrap()[0].clone();

    let outcome = engine.play_card(P0, 0).unwrap();
    let slot = engine.state().board.get(outcome.slot_id.unwrap()).unwrap();

    assert_eq!(slot.card, top);
    assert_eq!(slot.owner, P0);
    assert_eq!(engine.state().hand(P0).unwrap().len(), 4);
}

#[test]
fn test_water_card_enters_at_harbour() {
    let ship = CardDefinition::new("Rowboat", Category::Noble, SubCategory::WarBoat)
        .with_stats(1, 1, 2)
        .with_movement(2, 1)
        .with_element(Element::Water);
    let mut catalog = Catalog::new();
    for _ in 0..12 {
        catalog.register(ship.clone());
    }

    let mut engine = GameEngine::new(EngineConfig::default()).unwrap().with_catalog(catalog);
    engine.start_game(&["Ana", "Rui"]).unwrap();

    let first = engine.play_card(P0, 0).unwrap().slot_id.unwrap();
    let second = engine.play_card(P1, 0).unwrap().slot_id.unwrap();
    assert_eq!(engine.state().board.get(first).unwrap().position, 2);
    assert_eq!(engine.state().board.get(second).unwrap().position, 5);
}

// === Movement ===

#[test]
fn test_move_clamps_at_board_edge() {
    let (mut engine, ids) = with_board(vec![(card("Shock Cavalry"), P0, 6)]);
    engine.move_card(ids[0], P0, 3).unwrap();
    assert_eq!(engine.state().board.get(ids[0]).unwrap().position, 7);
}

#[test]
fn test_player_one_moves_down_the_track() {
    let (mut engine, ids) = with_board(vec![(card("Line Soldier"), P1, 7)]);
    engine.play_card(P0, 0).unwrap();
    engine.move_card(ids[0], P1, 2).unwrap();
    assert_eq!(engine.state().board.get(ids[0]).unwrap().position, 5);
}

#[test]
fn test_water_card_cannot_leave_water() {
    let (mut engine, ids) = with_board(vec![(card("Assault Ship"), P0, 5)]);
    let before = engine.state().clone();

    assert_eq!(
        engine.move_card(ids[0], P0, 1),
        Err(EngineError::InvalidWaterPath { zone: 6 })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_water_card_moves_within_water() {
    let (mut engine, ids) = with_board(vec![(card("Assault Ship"), P0, 2)]);
    engine.move_card(ids[0], P0, 2).unwrap();
    assert_eq!(engine.state().board.get(ids[0]).unwrap().position, 4);
}

#[test]
fn test_move_zero_steps_consumes_turn() {
    let (mut engine, ids) = with_board(vec![(card("Line Soldier"), P0, 0)]);
    let report = engine.move_card(ids[0], P0, 0).unwrap().end_turn.unwrap();
    assert_eq!(report.active_player_id, P1);
    assert_eq!(engine.state().board.get(ids[0]).unwrap().position, 0);
}

// === Combat ===

#[test]
fn test_attack_damage_law() {
    let (mut engine, ids) = with_board(vec![
        (custom(5, 0, 5), P0, 3),
        (custom(0, 2, 10), P1, 4),
    ]);
    engine.attack_card(ids[0], ids[1], P0).unwrap();
    assert_eq!(engine.state().board.get(ids[1]).unwrap().card.hp, 7);
}

#[test]
fn test_overwhelming_attack_kills_and_purges() {
    let (mut engine, ids) = with_board(vec![
        (custom(5, 0, 5), P0, 3),
        (custom(0, 1, 3), P1, 3),
    ]);
    engine.attack_card(ids[0], ids[1], P0).unwrap();
    assert!(!engine.state().board.contains(ids[1]));
}

#[test]
fn test_attack_out_of_range() {
    let (mut engine, ids) = with_board(vec![
        (custom(5, 0, 5), P0, 1),
        (custom(0, 1, 3), P1, 4),
    ]);
    assert_eq!(
        engine.attack_card(ids[0], ids[1], P0),
        Err(EngineError::OutOfRange { distance: 3, range: 1 })
    );
    assert_eq!(engine.state().active_player, P0);
}

#[test]
fn test_attack_missing_target() {
    let (mut engine, ids) = with_board(vec![(custom(5, 0, 5), P0, 1)]);
    assert_eq!(
        engine.attack_card(ids[0], SlotId(999), P0),
        Err(EngineError::CardNotFound(SlotId(999)))
    );
}

#[test]
fn test_defend_is_permanent() {
    let (mut engine, ids) = with_board(vec![(card("Line Soldier"), P0, 0)]);
    engine.defend_card(ids[0], P0).unwrap();
    engine.play_card(P1, 0).unwrap();
    engine.defend_card(ids[0], P0).unwrap();
    assert_eq!(engine.state().board.get(ids[0]).unwrap().card.defense, 3);
}

// === Castle ===

#[test]
fn test_castle_win() {
    let mut engine = started();
    let mut snapshot = engine.export_state();
    snapshot.castle_hp_by_player.insert(P1, 2);
    snapshot
        .cards_in_play
        .push(BoardSlotCard::new(SlotId(100), P0, 7, card("Line Soldier")));
    engine.import_state(snapshot).unwrap();

    let report = engine.defend_card(SlotId(100), P0).unwrap().end_turn.unwrap();
    assert!(report.game_over);
    assert_eq!(report.winner_id, Some(P0));
    assert_eq!(report.loser_id, Some(P1));
    assert_eq!(report.active_player_id, P0);
    assert_eq!(engine.state().castle_hp(P1), Some(0));

    // terminal: end_turn re-reports, actions refuse
    assert_eq!(engine.end_turn().unwrap(), report);
    assert_eq!(engine.play_card(P1, 0), Err(EngineError::NotYourTurn));
}

#[test]
fn test_winner_has_already_acted() {
    let mut engine = started();
    let mut snapshot = engine.export_state();
    snapshot.castle_hp_by_player.insert(P1, 1);
    snapshot
        .cards_in_play
        .push(BoardSlotCard::new(SlotId(100), P0, 7, card("Line Soldier")));
    engine.import_state(snapshot).unwrap();

    engine.defend_card(SlotId(100), P0).unwrap();
    assert!(engine.state().game_over);
    assert_eq!(engine.state().active_player, P0);
    assert_eq!(engine.play_card(P0, 0), Err(EngineError::AlreadyActed));
    assert_eq!(engine.play_card(P1, 0), Err(EngineError::NotYourTurn));
}

#[test]
fn test_finished_import_refuses_fresh_player() {
    let mut engine = started();
    let mut snapshot = engine.export_state();
    snapshot.game_over = true;
    snapshot.winner_player_id = Some(P1);
    snapshot.loser_player_id = Some(P0);
    engine.import_state(snapshot).unwrap();

    assert_eq!(engine.play_card(P0, 0), Err(EngineError::GameOver));
}

#[test]
fn test_castle_damage_without_win() {
    let (mut engine, ids) = with_board(vec![(card("Line Soldier"), P0, 7)]);
    engine.defend_card(ids[0], P0).unwrap();
    assert_eq!(engine.state().castle_hp(P1), Some(18));
    assert_eq!(engine.state().castle_hp(P0), Some(20));
    assert!(!engine.state().game_over);
}

// === Projection ===

#[test]
fn test_hand_privacy() {
    let mut engine = started();

    let view = engine.get_state();
    assert!(matches!(&view.hands[&P0], HandView::Cards(cards) if cards.len() == 5));
    assert_eq!(view.hands[&P1], HandView::Count { count: 5 });
    assert_eq!(view.deck_count, 40);

    engine.play_card(P0, 0).unwrap();
    let view = engine.get_state();
    assert_eq!(view.hands[&P0], HandView::Count { count: 4 });
    assert!(!view.hands[&P1].is_hidden());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["hands"]["0"], serde_json::json!({"count": 4}));
    assert_eq!(json["activePlayerId"], 1);
}

#[test]
fn test_export_keeps_full_hands() {
    let engine = started();
    let snapshot = engine.export_state();
    assert_eq!(snapshot.hands[&P1].len(), 5);
    assert_eq!(snapshot.deck.len(), 40);
}
