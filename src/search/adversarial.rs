//! Adversarial search: exhaustive minimax and best-move selection.
//!
//! Full-depth recursion with no pruning and no transposition table, so
//! only small finite game trees are tractable. Recursion depth equals
//! the remaining game length (at most 9 plies for tic-tac-toe).

use crate::domain::{AdversarialState, Player};

/// Scores `state` for `mover`, the player about to move: +1 when the
/// game is won for `mover` under perfect play, -1 when lost, 0 drawn.
///
/// Terminal states score directly from `mover`'s perspective. Otherwise
/// every successor under `mover` is scored recursively for the opponent
/// and the negated minimum is returned: the opponent's worst outcome is
/// the mover's best. A stuck mover with no legal reply in a non-terminal
/// state scores as a draw.
pub fn minimax<G: AdversarialState>(state: &G, mover: Player) -> i32 {
    if state.is_terminal() {
        return state.terminal_score(mover);
    }

    let opponent_best = state
        .successors(mover)
        .into_iter()
        .map(|child| minimax(&child, mover.opponent()))
        .min();

    match opponent_best {
        Some(worst_for_opponent) => -worst_for_opponent,
        None => 0,
    }
}

/// Returns the successor of `state` that `mover` should play, or `None`
/// when no move exists.
///
/// Each candidate is scored for the opponent, so the strictly lowest
/// score marks the mover's best reply; the running best starts from the
/// first candidate, and earlier candidates win ties.
pub fn find_best_move<G: AdversarialState>(state: &G, mover: Player) -> Option<G> {
    let mut best: Option<(i32, G)> = None;

    for candidate in state.successors(mover) {
        let score = minimax(&candidate, mover.opponent());
        let improved = match &best {
            None => true,
            Some((best_score, _)) => score < *best_score,
        };
        if improved {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, state)| state)
}
