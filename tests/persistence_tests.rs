//! Snapshot export/import and snapshot stores.

use std::path::PathBuf;

use castle_ccg::cards::Catalog;
use castle_ccg::core::{EngineConfig, EngineError, PlayerId, SlotId};
use castle_ccg::engine::combat::resolved_hp;
use castle_ccg::engine::GameEngine;
use castle_ccg::persist::{FileStore, MemoryStore, Snapshot, SnapshotError, SnapshotFormat, SnapshotStore};
use castle_ccg::zones::BoardSlotCard;
use proptest::prelude::*;

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);

fn started(seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(seed)).unwrap();
    engine.start_game(&["Ana", "Rui"]).unwrap();
    engine
}

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("castle-ccg-{}-{}", std::process::id(), name))
}

// === Export / import ===

#[test]
fn test_json_export_import() {
    let mut engine = started(11);
    engine.play_card(P0, 0).unwrap();
    engine.play_card(P1, 2).unwrap();

    let json = engine.export_state().to_json().unwrap();
    let snapshot = Snapshot::from_json(&json).unwrap();

    let mut peer = GameEngine::new(EngineConfig::default()).unwrap();
    peer.import_state(snapshot).unwrap();
    assert_eq!(peer.state(), engine.state());
    assert_eq!(peer.get_state(), engine.get_state());
}

#[test]
fn test_snapshot_wire_fields() {
    let engine = started(3);
    let value = serde_json::to_value(engine.export_state()).unwrap();

    for field in [
        "deck",
        "players",
        "cardsInPlay",
        "hands",
        "activePlayerId",
        "round",
        "playedThisRound",
        "castleMaxHp",
        "castleHpByPlayer",
        "gameOver",
        "loserPlayerId",
        "winnerPlayerId",
    ] {
        assert!(value.get(field).is_some(), "missing {}", field);
    }
    assert_eq!(value["castleHpByPlayer"]["1"], 20);
}

#[test]
fn test_invalid_import_leaves_state_unchanged() {
    let mut engine = started(5);
    let before = engine.state().clone();

    let mut snapshot = engine.export_state();
    let card = Catalog::standard().instance("Line Soldier").unwrap();
    snapshot.cards_in_play.push(BoardSlotCard::new(SlotId(1), P0, 0, card.clone()));
    snapshot.cards_in_play.push(BoardSlotCard::new(SlotId(1), P1, 7, card));

    assert_eq!(
        engine.import_state(snapshot),
        Err(EngineError::InvalidSnapshot(SnapshotError::DuplicateSlot(SlotId(1))))
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_imported_ids_do_not_collide() {
    let mut engine = started(5);
    let mut snapshot = engine.export_state();
    let card = Catalog::standard().instance("Line Soldier").unwrap();
    snapshot.cards_in_play.push(BoardSlotCard::new(SlotId(40), P1, 7, card));
    snapshot.next_slot_id = None;
    engine.import_state(snapshot).unwrap();

    let placed = engine.play_card(P0, 0).unwrap().slot_id.unwrap();
    assert!(placed.0 > 40);
}

// === Stores ===

#[test]
fn test_memory_store_follows_every_action() {
    let store = MemoryStore::new();
    let mut engine = GameEngine::new(EngineConfig::default())
        .unwrap()
        .with_store(store.clone());
    engine.start_game(&["Ana", "Rui"]).unwrap();
    engine.play_card(P0, 0).unwrap();

    let saved = Snapshot::from_json(&store.raw().unwrap()).unwrap();
    assert_eq!(saved, engine.export_state());
    assert_eq!(saved.active_player_id, P1);
}

#[test]
fn test_rejected_action_still_matches_store() {
    let store = MemoryStore::new();
    let mut engine = GameEngine::new(EngineConfig::default())
        .unwrap()
        .with_store(store.clone());
    engine.start_game(&["Ana", "Rui"]).unwrap();

    assert!(engine.play_card(P1, 0).is_err());
    let saved = Snapshot::from_json(&store.raw().unwrap()).unwrap();
    assert_eq!(saved, engine.export_state());
}

#[test]
fn test_file_store_json_round_trip() {
    let path = scratch_file("json.json");
    let mut engine = started(9);
    engine.play_card(P0, 1).unwrap();

    let mut store = FileStore::new(&path);
    store.save(&engine.export_state()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"activePlayerId\""));

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, engine.export_state());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_file_store_bincode_round_trip() {
    let path = scratch_file("state.bin");
    let mut engine = started(9);
    engine.play_card(P0, 1).unwrap();

    let mut store = FileStore::new(&path).with_format(SnapshotFormat::Bincode);
    store.save(&engine.export_state()).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, engine.export_state());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_file_store_missing_file() {
    let mut store = FileStore::new(scratch_file("never-written.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_engine_resumes_from_file() {
    let path = scratch_file("resume.json");
    let mut engine = GameEngine::new(EngineConfig::default())
        .unwrap()
        .with_store(FileStore::new(&path));
    engine.start_game(&["Ana", "Rui"]).unwrap();
    engine.play_card(P0, 0).unwrap();

    let resumed = GameEngine::new(EngineConfig::default())
        .unwrap()
        .with_store(FileStore::new(&path));
    assert_eq!(resumed.state(), engine.state());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_rng_continues_after_reload() {
    let store = MemoryStore::new();
    let mut engine = GameEngine::new(EngineConfig::default())
        .unwrap()
        .with_store(store.clone());
    engine.start_game(&["Ana", "Rui"]).unwrap();
    engine.shuffle_deck();

    let mut resumed = GameEngine::new(EngineConfig::default())
        .unwrap()
        .with_store(MemoryStore::with_json(store.raw().unwrap()));

    engine.shuffle_deck();
    resumed.shuffle_deck();
    assert_eq!(resumed.state().deck, engine.state().deck);
}

// === Properties ===

proptest! {
    #[test]
    fn prop_snapshot_round_trip(seed in any::<u64>(), plays in 0usize..6) {
        let mut engine = started(seed);
        for _ in 0..plays {
            let active = engine.state().active_player;
            engine.play_card(active, 0).unwrap();
        }

        let snapshot = engine.export_state();
        let json = snapshot.to_json().unwrap();
        prop_assert_eq!(Snapshot::from_json(&json).unwrap(), snapshot.clone());

        let bytes = bincode::serialize(&snapshot).unwrap();
        let decoded: Snapshot = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded, snapshot);
    }

    #[test]
    fn prop_damage_law_bounds(attack in -5i64..30, hp in 0i64..30, defense in 0i64..30) {
        let after = resolved_hp(attack, hp, defense);
        prop_assert!(after >= 0);
        prop_assert!(after <= hp);
        if attack > hp + defense {
            prop_assert_eq!(after, 0);
        }
        if attack <= defense {
            prop_assert_eq!(after, hp);
        }
    }

    #[test]
    fn prop_damage_law_monotonic(attack in 0i64..30, hp in 0i64..30, defense in 0i64..30) {
        prop_assert!(resolved_hp(attack + 1, hp, defense) <= resolved_hp(attack, hp, defense));
        prop_assert!(resolved_hp(attack, hp, defense + 1) >= resolved_hp(attack, hp, defense));
    }
}
