//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a decided cell.
///
/// During the search, the state of a cell is represented by `Option<State>`,
/// where `None` means that the cell has not been decided yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The cell is dead.
    Dead,
    /// The cell is alive.
    Alive,
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Dead => State::Alive,
            State::Alive => State::Dead,
        }
    }
}
