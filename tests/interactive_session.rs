//! The play command driven through scripted terminal input

use std::path::Path;

use clap::Parser;
use qtictactoe::{
    SessionOutcome,
    cli::commands::play::{PlayArgs, run},
};
use tempfile::tempdir;

const EVERY_CELL: &str = "x\n0\n1\n2\n3\n4\n5\n6\n7\n8\n";

fn args(table: &Path, extra: &[&str]) -> PlayArgs {
    let mut argv = vec![
        "play",
        "--table",
        table.to_str().unwrap(),
        "--episodes",
        "200",
        "--seed",
        "1",
        "--quiet",
    ];
    argv.extend_from_slice(extra);
    PlayArgs::parse_from(argv)
}

fn play(table: &Path, input: &str, extra: &[&str]) -> (anyhow::Result<SessionOutcome>, String) {
    let mut output = Vec::new();
    let result = run(args(table, extra), input.as_bytes(), &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_first_run_trains_then_plays() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("qtable.msgpack");

    let (result, output) = play(&table, EVERY_CELL, &["--play-epsilon", "0"]);
    let outcome = result.unwrap();

    assert!(table.exists());
    let training = output.find("Training AI...").unwrap();
    let saved = output.find("Training completed and Q-table saved!").unwrap();
    let ready = output.find("Ready to play!").unwrap();
    assert!(training < saved && saved < ready);
    assert!(output.contains("Do you want to be X or O? "));
    assert!(output.contains("Your move (0-8): "));
    assert!(output.contains("AI chose: "));
    assert!(output.trim_end().ends_with(outcome.message()));
}

#[test]
fn test_second_run_loads_snapshot() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("qtable.json");

    play(&table, EVERY_CELL, &[]).0.unwrap();
    let before = std::fs::read(&table).unwrap();

    let (result, output) = play(&table, "O\n0\n1\n2\n3\n4\n5\n6\n7\n8\n", &[]);
    result.unwrap();
    assert!(output.contains("Loaded existing Q-table."));
    assert!(!output.contains("Training AI..."));
    assert_eq!(std::fs::read(&table).unwrap(), before);
}

#[test]
fn test_board_is_rendered_with_pipes() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("qtable.msgpack");

    let (result, output) = play(&table, EVERY_CELL, &[]);
    result.unwrap();
    assert!(output.lines().any(|line| line == "|   |   |   |"));
    assert!(output.lines().any(|line| line.starts_with("| X |")));
}

#[test]
fn test_closed_input_is_an_error() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("qtable.msgpack");

    let (result, _) = play(&table, "x\n", &[]);
    assert!(result.is_err());
}

#[test]
fn test_rejects_out_of_range_play_epsilon() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("qtable.msgpack");

    let (result, output) = play(&table, EVERY_CELL, &["--play-epsilon", "1.5"]);
    assert!(result.is_err());
    assert!(output.is_empty());
    assert!(!table.exists());
}

#[test]
fn test_corrupt_table_is_not_retrained() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("qtable.msgpack");
    std::fs::write(&table, [0xc1u8, 0x00]).unwrap();

    let (result, _) = play(&table, EVERY_CELL, &[]);
    assert!(result.is_err());
    assert_eq!(std::fs::read(&table).unwrap(), vec![0xc1, 0x00]);
}
