//! Snapshot persistence through every repository adapter

use std::{fs, path::Path};

use qtictactoe::{
    QLearningAgent, QTable, StateKey,
    adapters::{InMemoryRepository, JsonRepository, MsgPackRepository, repository_for},
    app::AgentConfig,
    pipeline::{TrainingConfig, TrainingLoop},
    ports::TableRepository,
};
use tempfile::tempdir;

fn trained_table(episodes: usize, seed: u64) -> QTable {
    let mut agent = QLearningAgent::new(&AgentConfig::default().with_seed(seed));
    TrainingLoop::new(TrainingConfig::new(episodes))
        .run(&mut agent)
        .unwrap();
    agent.into_table()
}

fn assert_round_trip(repo: &dyn TableRepository, path: &Path, table: &QTable) {
    repo.save(table, path).unwrap();
    assert!(repo.exists(path));

    let loaded = repo.load(path).unwrap();
    assert_eq!(loaded.len(), table.len());
    for (state, values) in table {
        assert_eq!(loaded.get(state), Some(values), "state {state} differs");
    }
}

#[test]
fn test_msgpack_round_trip() {
    let dir = tempdir().unwrap();
    let table = trained_table(300, 1);
    assert_round_trip(&MsgPackRepository::new(), &dir.path().join("q.msgpack"), &table);
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let table = trained_table(300, 2);
    assert_round_trip(&JsonRepository::new(), &dir.path().join("q.json"), &table);
}

#[test]
fn test_in_memory_round_trip() {
    let table = trained_table(100, 3);
    assert_round_trip(&InMemoryRepository::new(), Path::new("memory"), &table);
}

#[test]
fn test_extension_selects_format() {
    let dir = tempdir().unwrap();
    let table = trained_table(50, 4);

    let json_path = dir.path().join("agent.JSON");
    repository_for(&json_path).save(&table, &json_path).unwrap();
    let text = fs::read_to_string(&json_path).unwrap();
    assert!(text.trim_start().starts_with('{'));

    let msgpack_path = dir.path().join("agent.bin");
    repository_for(&msgpack_path)
        .save(&table, &msgpack_path)
        .unwrap();
    let loaded = MsgPackRepository::new().load(&msgpack_path).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn test_missing_snapshot_means_nothing_learned() {
    let dir = tempdir().unwrap();
    let repo = MsgPackRepository::new();
    let loaded = repo
        .load_if_exists(&dir.path().join("absent.msgpack"))
        .unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_corrupt_snapshot_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(JsonRepository::new().load_if_exists(&path).is_err());
}

#[test]
fn test_snapshot_with_malformed_keys_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keys.json");
    let zeros = "[0, 0, 0, 0, 0, 0, 0, 0, 0]";
    let ones = "[1, 1, 1, 1, 1, 1, 1, 1, 1]";
    fs::write(&path, format!(r#"{{"hello world": {zeros}, "XX": {ones}}}"#)).unwrap();
    assert!(JsonRepository::new().load_if_exists(&path).is_err());

    fs::write(&path, format!(r#"{{"XOXOXOXOXOXOjunk": {zeros}}}"#)).unwrap();
    assert!(JsonRepository::new().load_if_exists(&path).is_err());
}

#[test]
fn test_snapshot_with_nan_estimates_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nan.msgpack");
    let state: StateKey = ".........".parse().unwrap();
    let mut table = QTable::new();
    *table.values_for(&state) = [f64::NAN; 9];

    let repo = MsgPackRepository::new();
    repo.save(&table, &path).unwrap();
    assert!(repo.load_if_exists(&path).is_err());
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("q.msgpack");
    let repo = MsgPackRepository::new();

    repo.save(&trained_table(200, 5), &path).unwrap();
    let empty = QTable::new();
    repo.save(&empty, &path).unwrap();
    assert!(repo.load(&path).unwrap().is_empty());
}
