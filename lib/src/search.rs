//! The backtracking search.

use crate::{cells::State, error::Error, world::World};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// A pattern is found.
    ///
    /// Searching can be resumed to find the next one.
    Found,
    /// The search space is exhausted; there are no more patterns.
    None,
    /// Still searching.
    ///
    /// The max step has been reached before finishing the search.
    Searching,
}

impl World {
    /// The search.
    ///
    /// Each cell cycles through undecided, dead, alive and back. An
    /// accepted assignment advances the cursor; a rejected one leaves it
    /// in place so the next call tries the cell's next state, and
    /// unsetting an alive cell retreats. The search ends when the cursor
    /// backtracks past the first cell.
    ///
    /// `max_step` bounds the number of cell assignments tried in this
    /// call, so that a long search can be broken up and resumed.
    pub fn search(&mut self, max_step: Option<u64>) -> Result<Status, Error> {
        let mut step_count = 0;
        while self.cursor >= 0 {
            if let Some(max) = max_step {
                if step_count >= max {
                    return Ok(Status::Searching);
                }
            }
            step_count += 1;

            let i = self.cursor as usize;
            if i >= self.grid.len() {
                return Err(Error::CursorOutOfRange(i));
            }
            match self.grid.get(i) {
                None => {
                    if self.set_cell(i, Some(State::Dead))? {
                        self.cursor += 1;
                    }
                }
                Some(State::Dead) => {
                    if self.set_cell(i, Some(State::Alive))? {
                        self.cursor += 1;
                    }
                }
                Some(State::Alive) => {
                    self.set_cell(i, None)?;
                    self.cursor -= 1;
                }
            }

            if std::mem::take(&mut self.found) {
                return Ok(Status::Found);
            }
        }
        Ok(Status::None)
    }
}
