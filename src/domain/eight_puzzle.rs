//! The 8-puzzle sliding-tile domain.
//!
//! A 3x3 board holds tiles 1-8 and one blank. A move slides the blank one
//! cell, swapping it with the adjacent tile. The goal places the tiles in
//! row-major order with the blank last.

use std::fmt;

use rand::Rng;

use super::SearchState;

/// Blank-cell encoding inside the tile array.
const BLANK: u8 = 0;

/// Value the blank takes when computing displacement, one past the
/// highest tile.
const BLANK_RANK: u32 = 9;

/// A direction the blank can slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// All slide directions, in successor-generation order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// An 8-puzzle configuration.
///
/// The board is a row-major `[u8; 9]` with `0` encoding the blank.
/// Identity is the tile arrangement alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EightPuzzleState {
    tiles: [u8; 9],
}

impl EightPuzzleState {
    /// Creates a state from a row-major tile array; `0` is the blank.
    pub fn new(tiles: [u8; 9]) -> Self {
        debug_assert!({
            let mut seen = [false; 9];
            tiles.iter().for_each(|&t| seen[t as usize] = true);
            seen.iter().all(|&s| s)
        });
        EightPuzzleState { tiles }
    }

    /// The solved configuration.
    pub fn goal() -> Self {
        EightPuzzleState {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        }
    }

    /// Creates a solvable configuration by walking the blank `steps`
    /// random slides away from the goal.
    pub fn scrambled(rng: &mut impl Rng, steps: u32) -> Self {
        let mut state = Self::goal();
        for _ in 0..steps {
            let moved: Vec<EightPuzzleState> = ALL_DIRECTIONS
                .iter()
                .filter_map(|&dir| state.slide(dir))
                .collect();
            state = moved[rng.gen_range(0..moved.len())];
        }
        state
    }

    /// Returns the board with the blank slid one cell in `direction`,
    /// or `None` when the blank sits on that edge.
    pub fn slide(&self, direction: Direction) -> Option<Self> {
        let blank = self.blank_index();
        let target = match direction {
            Direction::Right => {
                if blank % 3 == 2 {
                    return None;
                }
                blank + 1
            }
            Direction::Left => {
                if blank % 3 == 0 {
                    return None;
                }
                blank - 1
            }
            Direction::Up => {
                if blank / 3 == 0 {
                    return None;
                }
                blank - 3
            }
            Direction::Down => {
                if blank / 3 == 2 {
                    return None;
                }
                blank + 3
            }
        };

        let mut tiles = self.tiles;
        tiles.swap(blank, target);
        Some(EightPuzzleState { tiles })
    }

    /// Sum over all cells of the distance between the value a cell holds
    /// and the value the goal puts there, with the blank ranked 9.
    ///
    /// This is the domain's search heuristic. It is not admissible; the
    /// best-first engine makes no optimality promise with it.
    pub fn displacement(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let expected = i as u32 + 1;
                let actual = if t == BLANK { BLANK_RANK } else { t as u32 };
                expected.abs_diff(actual)
            })
            .sum()
    }

    /// Row-major tile array, `0` for the blank.
    pub fn tiles(&self) -> [u8; 9] {
        self.tiles
    }

    fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .expect("board always contains a blank")
    }
}

impl Default for EightPuzzleState {
    /// The standard starting configuration, three slides from the goal.
    fn default() -> Self {
        EightPuzzleState {
            tiles: [1, BLANK, 2, 4, 5, 3, 7, 8, 6],
        }
    }
}

impl SearchState for EightPuzzleState {
    fn is_goal(&self) -> bool {
        self.tiles == Self::goal().tiles
    }

    fn successors(&self) -> Vec<Self> {
        ALL_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.slide(dir))
            .collect()
    }
}

impl fmt::Display for EightPuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(3) {
            for &t in row {
                if t == BLANK {
                    write!(f, " .")?;
                } else {
                    write!(f, " {}", t)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
