//! Interactive game session management.
//!
//! Holds the board of one human-versus-engine tic-tac-toe game and
//! validates the human's moves before they reach the board. The binary
//! entry point owns the stdin/stdout loop; everything here is pure so it
//! can be unit-tested directly.

use crate::domain::{AdversarialState, MoveError, Player, TicTacToeState};
use crate::search::find_best_move;

/// Where a game stands after a half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Player),
    Draw,
}

/// Parses a human move: two whitespace-separated integers, `row col`.
pub fn parse_move(line: &str) -> Result<(usize, usize), MoveError> {
    let malformed = || MoveError::Malformed(line.trim().to_string());

    let mut tokens = line.split_whitespace();
    let row = tokens.next().ok_or_else(malformed)?;
    let col = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let row = row.parse::<usize>().map_err(|_| malformed())?;
    let col = col.parse::<usize>().map_err(|_| malformed())?;
    Ok((row, col))
}

/// One human-versus-engine game.
pub struct Session {
    board: TicTacToeState,
    human: Player,
}

impl Session {
    /// Starts a fresh game; the engine plays `human.opponent()`.
    pub fn new(human: Player) -> Self {
        Session {
            board: TicTacToeState::new(),
            human,
        }
    }

    /// The current board.
    pub fn board(&self) -> &TicTacToeState {
        &self.board
    }

    /// The mark the human plays.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Applies a validated human move. On any `MoveError` the board is
    /// left untouched so the caller can re-prompt.
    pub fn apply_human(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.board = self.board.place(row, col, self.human)?;
        Ok(())
    }

    /// Lets the engine answer with its best move. Returns `None` when
    /// the game is already over or no cell is free.
    pub fn engine_reply(&mut self) -> Option<TicTacToeState> {
        if self.board.is_terminal() {
            return None;
        }
        let reply = find_best_move(&self.board, self.human.opponent())?;
        self.board = reply;
        Some(reply)
    }

    /// Current game status.
    pub fn status(&self) -> Status {
        match self.board.winner() {
            Some(player) => Status::Won(player),
            None if self.board.is_full() => Status::Draw,
            None => Status::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_move_accepts_two_integers() {
        assert_eq!(parse_move("1 2"), Ok((1, 2)));
        assert_eq!(parse_move("  0   0  "), Ok((0, 0)));
    }

    #[test]
    fn parse_move_rejects_wrong_token_counts() {
        assert!(matches!(parse_move(""), Err(MoveError::Malformed(_))));
        assert!(matches!(parse_move("1"), Err(MoveError::Malformed(_))));
        assert!(matches!(parse_move("1 2 3"), Err(MoveError::Malformed(_))));
    }

    #[test]
    fn parse_move_rejects_non_integers() {
        assert!(matches!(parse_move("a b"), Err(MoveError::Malformed(_))));
        assert!(matches!(parse_move("1 -2"), Err(MoveError::Malformed(_))));
    }

    #[test]
    fn human_move_lands_on_the_board() {
        let mut session = Session::new(Player::X);
        session.apply_human(1, 1).unwrap();
        assert_eq!(session.board().cell(1, 1), Some(Player::X));
        assert_eq!(session.status(), Status::InProgress);
    }

    #[test]
    fn occupied_cell_leaves_the_board_unchanged() {
        let mut session = Session::new(Player::X);
        session.apply_human(0, 0).unwrap();
        session.engine_reply().unwrap();
        let before = *session.board();

        let result = session.apply_human(0, 0);
        assert_eq!(result, Err(MoveError::Occupied(0, 0)));
        assert_eq!(*session.board(), before);
    }

    #[test]
    fn out_of_range_cell_is_rejected() {
        let mut session = Session::new(Player::X);
        assert_eq!(session.apply_human(5, 1), Err(MoveError::OutOfRange(5, 1)));
    }

    #[test]
    fn engine_reply_never_overwrites() {
        let mut session = Session::new(Player::X);
        session.apply_human(0, 0).unwrap();
        session.engine_reply().unwrap();

        let marks: usize = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| session.board().cell(r, c).is_some())
            .count();
        assert_eq!(marks, 2);
        assert_eq!(session.board().cell(0, 0), Some(Player::X));
    }

    #[test]
    fn engine_answers_a_corner_opening_with_the_centre() {
        // Any other reply loses to the corner opening under perfect play.
        let mut session = Session::new(Player::X);
        session.apply_human(0, 0).unwrap();
        session.engine_reply().unwrap();
        assert_eq!(session.board().cell(1, 1), Some(Player::O));
    }

    #[test]
    fn no_engine_reply_once_the_game_is_over() {
        let mut session = Session::new(Player::X);
        // X takes the top row unopposed.
        for (row, col) in [(0, 0), (0, 1)] {
            session.apply_human(row, col).unwrap();
        }
        session.apply_human(0, 2).unwrap();
        assert_eq!(session.status(), Status::Won(Player::X));
        assert!(session.engine_reply().is_none());
    }

    #[test]
    fn status_reports_a_draw_on_a_full_board() {
        let mut session = Session::new(Player::X);
        // x o x / x o o / o x x has no winner.
        let moves = [
            ((0, 0), Player::X),
            ((0, 1), Player::O),
            ((0, 2), Player::X),
            ((1, 0), Player::X),
            ((1, 1), Player::O),
            ((1, 2), Player::O),
            ((2, 0), Player::O),
            ((2, 1), Player::X),
            ((2, 2), Player::X),
        ];
        for ((row, col), mover) in moves {
            session.board = session.board.place(row, col, mover).unwrap();
        }
        assert_eq!(session.status(), Status::Draw);
    }
}
