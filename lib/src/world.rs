//! The world and the cell-assignment protocol.

use crate::{
    cells::State,
    config::Config,
    connect::Connectivity,
    error::Error,
    grid::Grid,
    rules::Rule,
};

/// The world.
///
/// Holds the grid, the rule tables, the component tracker and the search
/// cursor. Cells are decided one by one in flat index order; everything
/// behind the cursor is decided, everything at or ahead of it is not.
pub struct World {
    /// The configuration of the world.
    pub(crate) config: Config,

    /// The rule tables, already inverted if the configuration asks for it.
    pub(crate) rule: Rule,

    /// The tri-state cell store.
    pub(crate) grid: Grid,

    /// Number of cells currently alive.
    pub(crate) live_count: usize,

    /// Connected components of the live cells.
    pub(crate) connect: Connectivity,

    /// The flat index of the anchor cell.
    ///
    /// Everything before it is forced dead and the anchor itself is
    /// forced alive, so every pattern is enumerated in exactly one
    /// translate: the one whose first live cell in scan order sits at
    /// the anchor.
    pub(crate) start: usize,

    /// The search cursor. Negative when the search is exhausted.
    pub(crate) cursor: isize,

    /// Set when the last assignment completed a pattern.
    pub(crate) found: bool,
}

impl World {
    /// Creates a new world from a configuration and an already-parsed rule.
    pub fn new_with_rule(config: &Config, rule: Rule) -> Self {
        let grid = Grid::new(config.max_live_cells);
        let connect = Connectivity::new(grid.width(), grid.len());
        let start = grid.width();
        World {
            config: config.clone(),
            rule,
            grid,
            live_count: 0,
            connect,
            start,
            cursor: 0,
            found: false,
        }
    }

    /// Number of cells currently alive.
    pub fn cell_count(&self) -> usize {
        self.live_count
    }

    /// Assigns a state to a cell and checks whether the assignment can
    /// still lead to a pattern.
    ///
    /// Returns `Ok(true)` to accept and `Ok(false)` to reject. The grid
    /// state is written and the derived bookkeeping of the previous
    /// assignment to the same cell is undone in either case: a rejected
    /// assignment stays on the grid so that the search tries the next
    /// state of the same cell, and the next assignment undoes whatever
    /// the rejected one left behind.
    pub(crate) fn set_cell(&mut self, i: usize, state: Option<State>) -> Result<bool, Error> {
        let old_state = self.grid.get(i);
        self.grid.set(i, state);
        if state == old_state {
            return Ok(true);
        }

        if old_state == Some(State::Alive) {
            self.live_count -= 1;
        }
        if state == Some(State::Alive) {
            self.live_count += 1;
        }

        // Undo the derived state of the previous assignment before
        // deriving anything from the new one. Doing the cheap checks
        // first would be faster but would break this pairing.
        if old_state == Some(State::Alive) {
            self.connect.undo_merge(i)?;
        }
        if old_state == Some(State::Dead) {
            self.connect.undo_close(i)?;
        }

        match state {
            Some(State::Alive) => {
                let nbhd = self.live_neighbors(i);
                self.connect.merge(i, &nbhd)?;
                // joining k components takes at least k - 1 more cells
                let budget = self.config.max_live_cells;
                if self.live_count + self.connect.count() - 1 > budget {
                    return Ok(false);
                }
                if self.live_count + self.connect.bridge_length() > budget {
                    return Ok(false);
                }
            }
            Some(State::Dead) => {
                if !self.connect.close(i) {
                    // a component is sealed; if it was the only one,
                    // this may be a completed pattern
                    if self.connect.count() == 1 && self.final_rule_check(i) {
                        self.found = true;
                    }
                    // either way, backtrack
                    return Ok(false);
                }
            }
            None => {}
        }

        // cells before the anchor must all be dead
        if state == Some(State::Alive) && i < self.start {
            return Ok(false);
        }
        // the anchor itself must be alive
        if state != Some(State::Alive) && i == self.start {
            return Ok(false);
        }

        Ok(self.check_rule_near(i as isize))
    }

    /// The live Moore neighbors of a cell.
    fn live_neighbors(&self, i: usize) -> Vec<usize> {
        self.grid
            .nbhd_offsets()
            .into_iter()
            .map(|delta| i as isize + delta)
            .filter(|&j| self.grid.state_or_dead(j) == Some(State::Alive))
            .map(|j| j as usize)
            .collect()
    }

    /// Whether a cell and its neighbors can still be part of a still life.
    pub(crate) fn check_rule_near(&self, i: isize) -> bool {
        if !self.check_rule_at(i, false) {
            return false;
        }
        self.grid
            .nbhd_offsets()
            .into_iter()
            .all(|delta| self.check_rule_at(i + delta, false))
    }

    /// A stricter check over the last two rows around a sealed cell,
    /// knowing that no further live cells will appear there.
    pub(crate) fn final_rule_check(&self, i: usize) -> bool {
        let w = self.grid.width() as isize;
        let i = i as isize;
        (i - w - 1..=i + w + 1).all(|j| self.check_rule_at(j, true))
    }

    /// Whether a single cell can still satisfy the rule.
    ///
    /// Counts the definitely-live and possibly-live neighbors of the
    /// cell and checks whether any neighbor count in that interval
    /// satisfies the cell's (possibly still undecided) state. Undecided
    /// neighbors stop counting as possibly live once the budget is
    /// exhausted, or once `closing` declares them unreachable.
    fn check_rule_at(&self, i: isize, closing: bool) -> bool {
        let state = self.grid.state_or_dead(i);

        let mut min_neighbors = 0;
        let mut max_neighbors = 8;
        for delta in self.grid.nbhd_offsets() {
            match self.grid.state_or_dead(i + delta) {
                Some(State::Dead) => max_neighbors -= 1,
                Some(State::Alive) => min_neighbors += 1,
                None => {
                    if closing || self.live_count >= self.config.max_live_cells {
                        max_neighbors -= 1;
                    }
                }
            }
        }

        if state != Some(State::Alive)
            && (min_neighbors..=max_neighbors).any(|n| !self.rule.birth[n])
        {
            return true;
        }
        if state != Some(State::Dead)
            && (min_neighbors..=max_neighbors).any(|n| self.rule.survive[n])
        {
            return true;
        }
        false
    }

    /// Renders the found pattern as a plaintext diagram.
    ///
    /// Live cells are `o`, everything else is `.`. The diagram is trimmed
    /// to the columns and rows that hold live cells; the column wrap
    /// makes this well defined even when the pattern crosses a row
    /// boundary of the flat strip. Every row ends with a newline.
    pub fn display(&self) -> String {
        let width = self.grid.width();
        let mut left = self.start;
        let mut right = self.start;
        while left > 0 && self.grid.column_has_alive(left - 1) {
            left -= 1;
        }
        while right <= left + width && self.grid.column_has_alive(right) {
            right += 1;
        }

        let mut output = String::new();
        loop {
            let row = self.grid.row(left, right);
            if !row.contains(&Some(State::Alive)) {
                break;
            }
            for &cell in row {
                output.push(if cell == Some(State::Alive) { 'o' } else { '.' });
            }
            output.push('\n');
            left += width;
            right += width;
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(budget: usize) -> World {
        Config::new(budget).world().unwrap()
    }

    #[test]
    fn assign_undo_round_trip() {
        let mut world = world(4);
        let grid = world.grid.clone();
        let connect = world.connect.clone();
        let live_count = world.live_count;

        assert!(world.set_cell(world.start, Some(State::Alive)).unwrap());
        assert_eq!(world.live_count, 1);
        assert_eq!(world.connect.count(), 1);

        world.set_cell(world.start, None).unwrap();
        assert_eq!(world.grid, grid);
        assert_eq!(world.connect, connect);
        assert_eq!(world.live_count, live_count);
    }

    #[test]
    fn rejected_attempt_still_undoes_exactly() {
        let mut world = world(4);
        let grid = world.grid.clone();
        let connect = world.connect.clone();

        // killing the anchor is rejected, but stays on the grid
        assert!(!world.set_cell(world.start, Some(State::Dead)).unwrap());
        assert_eq!(world.grid.get(world.start), Some(State::Dead));

        // the next assignment to the same cell undoes the leftovers
        world.set_cell(world.start, None).unwrap();
        assert_eq!(world.grid, grid);
        assert_eq!(world.connect, connect);
    }

    #[test]
    fn live_count_matches_grid() {
        let mut world = world(4);
        world.search(Some(200)).unwrap();
        assert_eq!(world.live_count, world.grid.alive_count());
    }

    #[test]
    fn forest_sizes_match_components() {
        let mut world = world(5);
        world.search(Some(500)).unwrap();

        let mut counts = std::collections::HashMap::new();
        for i in 0..world.grid.len() {
            if world.grid.get(i) == Some(State::Alive) {
                *counts.entry(world.connect.root(i).unwrap()).or_insert(0) += 1;
            }
        }
        assert_eq!(
            counts.keys().copied().collect::<std::collections::BTreeSet<_>>(),
            world.connect.components
        );
        for (&root, &count) in &counts {
            assert_eq!(world.connect.size_of(root), count);
        }
    }
}
