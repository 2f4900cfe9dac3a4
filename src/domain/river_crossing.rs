//! The fox, chicken, and grain river-crossing domain.
//!
//! Fox, chicken, grain, and a one-passenger boat all start on the left
//! bank. The boat may cross empty or carry one passenger, but the fox
//! eats the chicken and the chicken eats the grain whenever the pair is
//! left on a bank without the boat. The goal moves everything to the
//! right bank.

use std::fmt;

use super::SearchState;

/// A side of the river.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    /// Returns the opposite bank.
    pub const fn across(self) -> Bank {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }
}

/// Positions of the fox, chicken, grain, and boat.
///
/// Identity is exactly these four banks; there is no move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiverCrossingState {
    pub fox: Bank,
    pub chicken: Bank,
    pub grain: Bank,
    pub boat: Bank,
}

impl RiverCrossingState {
    /// Returns true if no unsupervised pair can eat: the fox may not be
    /// left with the chicken, nor the chicken with the grain, on the bank
    /// the boat is away from.
    pub fn is_valid(&self) -> bool {
        if self.fox == self.chicken && self.fox != self.boat {
            return false;
        }
        if self.chicken == self.grain && self.grain != self.boat {
            return false;
        }
        true
    }

    /// Crossing with the fox aboard, without validity filtering.
    fn cross_with_fox(&self) -> RiverCrossingState {
        RiverCrossingState {
            fox: self.fox.across(),
            boat: self.boat.across(),
            ..*self
        }
    }

    /// Crossing with the chicken aboard, without validity filtering.
    fn cross_with_chicken(&self) -> RiverCrossingState {
        RiverCrossingState {
            chicken: self.chicken.across(),
            boat: self.boat.across(),
            ..*self
        }
    }

    /// Crossing with the grain aboard, without validity filtering.
    fn cross_with_grain(&self) -> RiverCrossingState {
        RiverCrossingState {
            grain: self.grain.across(),
            boat: self.boat.across(),
            ..*self
        }
    }

    /// Crossing with the boat empty, without validity filtering.
    fn cross_empty(&self) -> RiverCrossingState {
        RiverCrossingState {
            boat: self.boat.across(),
            ..*self
        }
    }
}

impl Default for RiverCrossingState {
    /// Everything on the left bank.
    fn default() -> Self {
        RiverCrossingState {
            fox: Bank::Left,
            chicken: Bank::Left,
            grain: Bank::Left,
            boat: Bank::Left,
        }
    }
}

impl SearchState for RiverCrossingState {
    fn is_goal(&self) -> bool {
        self.fox == Bank::Right
            && self.chicken == Bank::Right
            && self.grain == Bank::Right
            && self.boat == Bank::Right
    }

    fn successors(&self) -> Vec<Self> {
        let mut states = Vec::with_capacity(4);

        // A passenger can only board from the boat's bank.
        if self.fox == self.boat {
            states.push(self.cross_with_fox());
        }
        if self.chicken == self.boat {
            states.push(self.cross_with_chicken());
        }
        if self.grain == self.boat {
            states.push(self.cross_with_grain());
        }
        states.push(self.cross_empty());

        states.retain(|s| s.is_valid());
        states
    }
}

impl fmt::Display for RiverCrossingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |b: Bank| match b {
            Bank::Left => "left",
            Bank::Right => "right",
        };
        write!(
            f,
            "fox: {} chicken: {} grain: {} boat: {}",
            side(self.fox),
            side(self.chicken),
            side(self.grain),
            side(self.boat)
        )
    }
}
