//! The bounded tri-state cell store.

use crate::cells::State;

/// A flat strip of tri-state cells.
///
/// The store holds `budget + 1` rows of `budget + 2` cells each, and the
/// eight Moore neighbors of a cell are the flat offsets `±1`, `±(width−1)`,
/// `±width` and `±(width+1)`. There is no column bound: the last cell of a
/// row is adjacent to the first cell of the next. Since the width exceeds
/// the width of any pattern within the live-cell budget by at least two,
/// the strip is locally indistinguishable from the plane, and every flat
/// translate of a pattern renders to the same diagram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Number of cells per row.
    width: usize,
    /// The cells, row-major. `None` means not yet decided.
    cells: Vec<Option<State>>,
}

impl Grid {
    /// Creates an undecided grid sized for the given live-cell budget.
    pub(crate) fn new(budget: usize) -> Self {
        let width = budget + 2;
        let depth = budget + 1;
        Grid {
            width,
            cells: vec![None; width * depth],
        }
    }

    /// Number of cells per row.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// The eight Moore neighbor offsets in flat index space.
    pub(crate) fn nbhd_offsets(&self) -> [isize; 8] {
        let w = self.width as isize;
        [-w - 1, -w, -w + 1, -1, 1, w - 1, w, w + 1]
    }

    /// The state of a cell.
    pub(crate) fn get(&self, i: usize) -> Option<State> {
        self.cells[i]
    }

    /// Overwrites the state of a cell.
    pub(crate) fn set(&mut self, i: usize, state: Option<State>) {
        self.cells[i] = state;
    }

    /// The state at a possibly out-of-range flat index.
    ///
    /// Everything outside the grid counts as dead.
    pub(crate) fn state_or_dead(&self, i: isize) -> Option<State> {
        if i < 0 || i >= self.len() as isize {
            Some(State::Dead)
        } else {
            self.cells[i as usize]
        }
    }

    /// Whether the column through flat index `top` holds a live cell.
    pub(crate) fn column_has_alive(&self, top: usize) -> bool {
        if top >= self.len() {
            return false;
        }
        self.cells[top..]
            .iter()
            .step_by(self.width)
            .any(|&cell| cell == Some(State::Alive))
    }

    /// A row slice between two flat indices, clamped to the grid.
    pub(crate) fn row(&self, from: usize, to: usize) -> &[Option<State>] {
        &self.cells[from.min(self.cells.len())..to.min(self.cells.len())]
    }

    /// Number of cells currently alive.
    #[cfg(test)]
    pub(crate) fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Some(State::Alive))
            .count()
    }
}
