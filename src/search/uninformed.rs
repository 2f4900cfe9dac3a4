//! Uninformed search: BFS, DFS, depth-limited DFS, iterative deepening.
//!
//! All four share one traversal contract: pop a node, skip it if already
//! expanded, return it on goal, otherwise admit its unvisited successors
//! to the frontier. Only the frontier discipline differs.

use std::collections::{HashSet, VecDeque};

use crate::domain::SearchState;
use crate::search::SearchResult;

/// Breadth-first search: FIFO frontier.
///
/// On a finite unweighted space this reaches a goal of minimal
/// transition count, or exhausts the space.
pub fn bfs<S: SearchState>(initial: S) -> SearchResult<S> {
    let mut frontier = VecDeque::from([initial]);
    let mut visited: HashSet<S> = HashSet::new();
    let mut generated = 0u64;

    while let Some(current) = frontier.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if current.is_goal() {
            return SearchResult::found(current, generated);
        }

        let successors: Vec<S> = current
            .successors()
            .into_iter()
            .filter(|s| !visited.contains(s))
            .collect();
        generated += successors.len() as u64;
        frontier.extend(successors);
    }

    SearchResult::exhausted(generated)
}

/// Depth-first search: LIFO frontier. No shortest-path guarantee.
pub fn dfs<S: SearchState>(initial: S) -> SearchResult<S> {
    let mut frontier = vec![initial];
    let mut visited: HashSet<S> = HashSet::new();
    let mut generated = 0u64;

    while let Some(current) = frontier.pop() {
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if current.is_goal() {
            return SearchResult::found(current, generated);
        }

        let successors: Vec<S> = current
            .successors()
            .into_iter()
            .filter(|s| !visited.contains(s))
            .collect();
        generated += successors.len() as u64;
        frontier.extend(successors);
    }

    SearchResult::exhausted(generated)
}

/// A depth-limited frontier entry: either a state to process or the
/// close-out marker that ends its parent's depth level.
enum Frame<S> {
    Node(S),
    Ascend,
}

/// Depth-first search bounded to `limit` pops of depth.
///
/// The depth counter increments on every real node popped and decrements
/// on the `Ascend` marker pushed right after a node's expansion, so the
/// LIFO frontier tracks depth without tagging nodes. The root pop counts
/// as depth 1; a goal `d` transitions deep therefore needs `limit` of at
/// least `d + 1`. Nodes at the limit are goal-checked but not expanded.
pub fn dls<S: SearchState>(initial: S, limit: u32) -> SearchResult<S> {
    let mut frontier = vec![Frame::Node(initial)];
    let mut visited: HashSet<S> = HashSet::new();
    let mut generated = 0u64;
    let mut depth = 0u32;

    while let Some(frame) = frontier.pop() {
        let current = match frame {
            Frame::Ascend => {
                depth -= 1;
                continue;
            }
            Frame::Node(state) => state,
        };

        if visited.contains(&current) {
            continue;
        }
        depth += 1;
        visited.insert(current.clone());

        if current.is_goal() {
            return SearchResult::found(current, generated);
        }

        frontier.push(Frame::Ascend);
        if depth < limit {
            let successors: Vec<S> = current
                .successors()
                .into_iter()
                .filter(|s| !visited.contains(s))
                .collect();
            generated += successors.len() as u64;
            frontier.extend(successors.into_iter().map(Frame::Node));
        }
    }

    SearchResult::exhausted(generated)
}

/// Iterative deepening: repeated depth-limited search with limits
/// `0, 1, .. max_depth - 1`.
///
/// Returns the first successful attempt's goal, with the generated count
/// accumulated across every attempt, or exhaustion once all limits fail.
/// Trades redundant re-expansion for bounded memory and a
/// shallowest-first guarantee plain DFS lacks.
pub fn ids<S: SearchState>(initial: S, max_depth: u32) -> SearchResult<S> {
    let mut generated = 0u64;

    for limit in 0..max_depth {
        let attempt = dls(initial.clone(), limit);
        generated += attempt.generated;
        if attempt.goal.is_some() {
            return SearchResult {
                goal: attempt.goal,
                generated,
            };
        }
    }

    SearchResult::exhausted(generated)
}
