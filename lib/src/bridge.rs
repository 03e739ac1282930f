//! A lower bound on the cells needed to join the components together.
//!
//! The bound is computed from column projections only. Each component is
//! projected to the sorted list of columns of its freedom cells, and a
//! single sweep over these ranges sums up the column gaps that any
//! connecting path would have to cross, discounting the largest gap (the
//! components can be joined in a chain that skips it). On top of the gaps,
//! joining `k` components takes at least `k - 1` extra live cells.
//!
//! The bound ignores rows entirely, so it is coarse, but it only ever
//! underestimates, which is all the budget pruning needs.

use crate::connect::Connectivity;

impl Connectivity {
    /// A lower bound on the number of extra live cells needed to connect
    /// all current components.
    ///
    /// Returns `0` with fewer than two components. A component with an
    /// empty freedom range can never be connected to anything, so the
    /// bound degenerates to the grid size, which no budget can cover.
    pub(crate) fn bridge_length(&self) -> usize {
        if self.count() < 2 {
            return 0;
        }

        let mut ranges = Vec::with_capacity(self.count() + 1);
        for c in &self.components {
            let mut range: Vec<isize> = self.freedoms[c]
                .iter()
                .map(|&f| (f % self.width) as isize)
                .collect();
            range.sort_unstable();
            if range.is_empty() {
                return self.len;
            }
            ranges.push(range);
        }
        ranges.sort();

        // The columns wrap around at the width, so the sweep must come
        // back to the first range one row down.
        let sentinel: Vec<isize> = ranges[0].iter().map(|&c| c + self.width as isize).collect();
        ranges.push(sentinel);

        let mut prev: &[isize] = &ranges[0];
        let mut parent: &[isize] = &[];
        let mut stack: Vec<(&[isize], isize)> = Vec::new();
        let mut gap_sum = 0;
        let mut gap_max = 0;

        for curr in &ranges[1..] {
            let curr: &[isize] = curr;
            let first = curr[0];
            if first < *prev.last().unwrap() {
                // the new range is nested inside the previous one
                stack.push((prev, gap_max));
                parent = prev;
                let gap = first - parent.iter().copied().filter(|&c| c <= first).max().unwrap();
                gap_max = gap;
                gap_sum += gap;
                continue;
            }

            while !stack.is_empty() && first >= *parent.last().unwrap() {
                // the new range is outside the old parent
                let last = *prev.last().unwrap();
                let out = parent.iter().copied().filter(|&c| c >= last).min().unwrap();
                let gap = out - last;
                gap_max = gap.max(gap_max);
                gap_sum += gap - gap_max;
                // the old parent becomes the previous component
                let (popped, popped_max) = stack.pop().unwrap();
                prev = popped;
                gap_max = popped_max;
                if let Some(&(grandparent, _)) = stack.last() {
                    parent = grandparent;
                }
            }

            // now the new range is simply adjacent to the previous
            let gap = first - *prev.last().unwrap();
            gap_max = gap.max(gap_max);
            gap_sum += gap;
            prev = curr;
        }

        gap_sum -= gap_max;
        (gap_sum + self.count() as isize - 1).max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn singletons(width: usize, len: usize, cells: &[usize]) -> Connectivity {
        let mut conn = Connectivity::new(width, len);
        for &i in cells {
            conn.merge(i, &[]).unwrap();
        }
        conn
    }

    #[test]
    fn no_bridge_needed_below_two_components() {
        let empty = Connectivity::new(10, 100);
        assert_eq!(empty.bridge_length(), 0);
        let single = singletons(10, 100, &[21]);
        assert_eq!(single.bridge_length(), 0);
    }

    #[test]
    fn two_cells_in_a_row() {
        // columns 1 and 6: freedom ranges [0..2] and [5..7], gap 3,
        // wrap-around gap 3 discounted, plus one for the extra join
        let conn = singletons(10, 100, &[21, 26]);
        assert_eq!(conn.bridge_length(), 4);
    }

    #[test]
    fn three_cells_in_a_row() {
        let conn = singletons(12, 144, &[25, 28, 31]);
        assert_eq!(conn.bridge_length(), 4);
    }

    #[test]
    fn vertically_stacked_cells() {
        // same column: the projections overlap, only the join cost remains
        let conn = singletons(10, 100, &[24, 64]);
        assert_eq!(conn.bridge_length(), 1);
    }

    #[test]
    fn nested_ranges() {
        // one projected range inside the other: the sweep charges only
        // the entry gap, and discounting collapses the rest
        let mut conn = singletons(10, 100, &[22, 55]);
        conn.freedoms
            .insert(22, [30, 38].iter().copied().collect::<BTreeSet<_>>());
        conn.freedoms
            .insert(55, [43, 44, 45].iter().copied().collect::<BTreeSet<_>>());
        assert_eq!(conn.bridge_length(), 1);
    }

    #[test]
    fn empty_freedom_range_is_unbridgeable() {
        let mut conn = singletons(10, 100, &[21, 26]);
        conn.freedoms.insert(21, BTreeSet::new());
        assert_eq!(conn.bridge_length(), 100);
    }

    /// The flat-strip Moore distance between two cells, minimized over the
    /// row/column representations induced by the column wrap.
    fn flat_moore_distance(width: usize, a: usize, b: usize) -> isize {
        let w = width as isize;
        let (ra, ca) = ((a / width) as isize, (a % width) as isize);
        let (rb, cb) = ((b / width) as isize, (b % width) as isize);
        (-2..=2)
            .map(|k| (ra - (rb - k)).abs().max((ca - (cb + k * w)).abs()))
            .min()
            .unwrap()
    }

    #[test]
    fn admissible_for_singleton_pairs() {
        // Joining two lone cells at Moore distance d takes at least d - 1
        // cells, so the bound must never exceed that.
        let width = 8;
        for a in 0..48 {
            for b in (a + 1)..48 {
                let d = flat_moore_distance(width, a, b);
                if d <= 1 {
                    continue;
                }
                let conn = singletons(width, 64, &[a, b]);
                let bound = conn.bridge_length() as isize;
                assert!(
                    bound <= d - 1,
                    "cells {} and {}: bound {} exceeds distance bound {}",
                    a,
                    b,
                    bound,
                    d - 1
                );
            }
        }
    }
}
