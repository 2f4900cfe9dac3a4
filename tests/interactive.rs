//! Integration tests for the interactive tic-tac-toe binary.
//!
//! Spawns the binary, feeds moves via stdin, and verifies the rendered
//! boards and messages on stdout.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of input lines to the binary and collects stdout.
fn run_session(lines: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_statespace");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start statespace");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for line in lines {
        writeln!(stdin, "{}", line).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let output: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    output
}

#[test]
fn opens_with_an_empty_board_and_a_prompt() {
    let lines = run_session(&["quit"]);

    assert_eq!(lines[0], " . . .");
    assert_eq!(lines[1], " . . .");
    assert_eq!(lines[2], " . . .");
    assert!(lines.iter().any(|l| l == "your move, player x:"));
}

#[test]
fn first_move_draws_an_engine_reply() {
    let lines = run_session(&["0 0", "quit"]);

    // Both the human mark and the engine's answer end up on the board.
    let rendered = lines.join("\n");
    assert!(rendered.contains('x'), "human mark missing:\n{}", rendered);
    assert!(rendered.contains('o'), "engine mark missing:\n{}", rendered);
}

#[test]
fn engine_takes_the_centre_against_a_corner() {
    let lines = run_session(&["0 0", "quit"]);

    // The board after the engine's reply has x in the corner and o in
    // the middle row's centre.
    assert!(lines.iter().any(|l| l == " x . ."));
    assert!(lines.iter().any(|l| l == " . o ."));
}

#[test]
fn occupied_cell_is_rejected_and_reprompted() {
    let lines = run_session(&["0 0", "1 1", "quit"]);

    // The engine answered the corner with the centre, so (1, 1) is taken.
    assert!(lines
        .iter()
        .any(|l| l == "cell (1, 1) is already occupied"));
    let prompts = lines
        .iter()
        .filter(|l| *l == "your move, player x:")
        .count();
    assert!(prompts >= 3, "expected a re-prompt, got:\n{}", lines.join("\n"));
}

#[test]
fn out_of_range_cell_is_rejected() {
    let lines = run_session(&["4 1", "quit"]);
    assert!(lines
        .iter()
        .any(|l| l == "cell (4, 1) is outside the 3x3 board"));
}

#[test]
fn malformed_input_is_rejected() {
    let lines = run_session(&["a b", "quit"]);
    assert!(lines
        .iter()
        .any(|l| l == "expected two integers 'row col', got 'a b'"));
}

#[test]
fn a_careful_game_against_the_engine_is_drawn() {
    // Corner opening, then block every engine threat; the engine plays
    // perfectly, so the game fills up without a winner.
    let lines = run_session(&["0 0", "0 1", "2 0", "1 2", "2 2"]);
    assert_eq!(lines.last().map(String::as_str), Some("draw!"));
}

#[test]
fn eof_without_input_exits_cleanly() {
    let lines = run_session(&[]);
    assert!(lines.iter().any(|l| l == "your move, player x:"));
}
