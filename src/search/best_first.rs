//! Best-first search over a priority frontier.
//!
//! Expands the frontier entry with the lowest `path_cost + heuristic`
//! value first. With an admissible heuristic this is A* and reaches an
//! optimal goal; admissibility is the caller's responsibility and is not
//! validated here.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::domain::SearchState;
use crate::search::SearchResult;

/// A frontier entry carrying its own ordering key, so the state type
/// stays free of algorithm concerns.
///
/// Ordered by priority, then by insertion sequence: equal-priority
/// entries pop in the order they were pushed. Comparisons are reversed
/// so `BinaryHeap` behaves as a min-heap.
struct Entry<S> {
    priority: u32,
    seq: u64,
    path_cost: u32,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first search from `initial`, ordering the frontier by path cost
/// so far plus `heuristic`'s estimate to the goal.
///
/// Successors are pushed individually without frontier-level duplicate
/// filtering; a configuration may sit in the heap several times and the
/// copies are resolved lazily by the visited check at pop time. The
/// generated count increments once per push.
pub fn best_first<S, H>(initial: S, heuristic: H) -> SearchResult<S>
where
    S: SearchState,
    H: Fn(&S) -> u32,
{
    let mut frontier = BinaryHeap::new();
    let mut visited: HashSet<S> = HashSet::new();
    let mut generated = 0u64;
    let mut seq = 0u64;

    frontier.push(Entry {
        priority: heuristic(&initial),
        seq,
        path_cost: 0,
        state: initial,
    });

    while let Some(entry) = frontier.pop() {
        let current = entry.state;
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if current.is_goal() {
            return SearchResult::found(current, generated);
        }

        for successor in current.successors() {
            if visited.contains(&successor) {
                continue;
            }
            generated += 1;
            seq += 1;
            let path_cost = entry.path_cost + 1;
            frontier.push(Entry {
                priority: path_cost + heuristic(&successor),
                seq,
                path_cost,
                state: successor,
            });
        }
    }

    SearchResult::exhausted(generated)
}
