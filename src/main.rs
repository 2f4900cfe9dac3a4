//! Statespace -- interactive tic-tac-toe against the minimax engine.
//!
//! This binary reads moves from stdin as `row col` pairs and writes
//! board renderings to stdout. The human plays x and moves first; the
//! engine answers every move with full-depth minimax.

use std::io::{self, BufRead, Write};

use statespace::domain::Player;
use statespace::session::{parse_move, Session, Status};

/// Runs the interactive loop until the game ends, stdin closes, or the
/// player types `quit`.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new(Player::X);

    writeln!(out, "{}", session.board()).unwrap();
    prompt(&mut out, session.human());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        if line.trim() == "quit" {
            break;
        }

        let (row, col) = match parse_move(&line) {
            Ok(cell) => cell,
            Err(e) => {
                writeln!(out, "{}", e).unwrap();
                prompt(&mut out, session.human());
                continue;
            }
        };

        if let Err(e) = session.apply_human(row, col) {
            writeln!(out, "{}", e).unwrap();
            prompt(&mut out, session.human());
            continue;
        }
        writeln!(out, "{}", session.board()).unwrap();
        if announce_if_over(&mut out, &session) {
            return;
        }

        if session.engine_reply().is_some() {
            writeln!(out, "{}", session.board()).unwrap();
        }
        if announce_if_over(&mut out, &session) {
            return;
        }

        prompt(&mut out, session.human());
    }
}

/// Writes the move prompt and flushes so it appears before blocking on
/// stdin.
fn prompt<W: Write>(out: &mut W, human: Player) {
    writeln!(out, "your move, player {}:", human.glyph()).unwrap();
    out.flush().unwrap();
}

/// Reports a finished game. Returns true when the session is over.
fn announce_if_over<W: Write>(out: &mut W, session: &Session) -> bool {
    match session.status() {
        Status::InProgress => false,
        Status::Won(player) => {
            writeln!(out, "{} won!", player.glyph()).unwrap();
            out.flush().unwrap();
            true
        }
        Status::Draw => {
            writeln!(out, "draw!").unwrap();
            out.flush().unwrap();
            true
        }
    }
}
