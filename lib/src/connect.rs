//! Incremental tracking of the connected components of the live cells.
//!
//! A union-find forest over flat cell indices, merged by size. Path
//! compression is deliberately absent: it destroys the information needed
//! to reverse a merge. Every operation here must be undoable exactly, in
//! LIFO order, keyed by the cell whose assignment triggered it.

use crate::error::Error;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// What a merge must remember to be split apart again.
#[derive(Clone, Debug, PartialEq, Eq)]
struct MergeRecord {
    /// The adjacent roots at merge time, sorted by component size,
    /// the surviving root last.
    roots: Vec<usize>,

    /// The freedom set of the surviving root before the merge.
    old_freedoms: BTreeSet<usize>,
}

/// The connected components of the live cells, with their freedom sets.
///
/// A freedom cell is an undecided cell adjacent to a component, through
/// which the component could still grow or connect to another component.
/// A component whose freedom set empties is sealed: it can never change
/// again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Connectivity {
    /// Number of grid columns.
    pub(crate) width: usize,

    /// Number of grid cells.
    pub(crate) len: usize,

    /// Parent links; `None` for cells outside the forest.
    parent: Vec<Option<usize>>,

    /// Component sizes, valid at root indices.
    size: Vec<usize>,

    /// The roots of the current components.
    pub(crate) components: BTreeSet<usize>,

    /// Freedom sets by root.
    ///
    /// Roots absorbed by a merge keep their entries here, and closes keep
    /// updating them, so that undoing the merge restores every set
    /// verbatim instead of recomputing it. Only the entries of current
    /// component roots count for sealing.
    pub(crate) freedoms: BTreeMap<usize, BTreeSet<usize>>,

    /// Undo log for merges, keyed by the cell whose assignment caused them.
    merge_undo: HashMap<usize, MergeRecord>,

    /// Undo log for closes, keyed by the closed cell.
    close_undo: HashMap<usize, Vec<usize>>,
}

impl Connectivity {
    /// Creates an empty tracker for a grid of the given dimensions.
    pub(crate) fn new(width: usize, len: usize) -> Self {
        Connectivity {
            width,
            len,
            parent: vec![None; len],
            size: vec![0; len],
            components: BTreeSet::new(),
            freedoms: BTreeMap::new(),
            merge_undo: HashMap::new(),
            close_undo: HashMap::new(),
        }
    }

    /// Number of current components.
    pub(crate) fn count(&self) -> usize {
        self.components.len()
    }

    /// Resolves the root of a cell, following parent links without
    /// compressing them.
    pub(crate) fn root(&self, cell: usize) -> Result<usize, Error> {
        let mut j = cell;
        loop {
            match self.parent[j] {
                Some(p) if p == j => return Ok(j),
                Some(p) => j = p,
                None => return Err(Error::NoRoot { cell, ancestor: j }),
            }
        }
    }

    /// The size of the component rooted at a cell.
    #[cfg(test)]
    pub(crate) fn size_of(&self, root: usize) -> usize {
        self.size[root]
    }

    /// The forward-growth neighbors of a cell that lie on the grid.
    ///
    /// Backward neighbors are never freedoms: the scan decides cells in
    /// increasing index order, so a component can only grow forward.
    /// Offsets past the end of the grid are dropped; the cells there are
    /// dead by definition and could never be closed, so keeping them
    /// would leave bottom-edge components unsealable forever.
    fn forward_freedoms(&self, i: usize) -> BTreeSet<usize> {
        [i + 1, i + self.width - 1, i + self.width, i + self.width + 1]
            .into_iter()
            .filter(|&f| f < self.len)
            .collect()
    }

    /// Registers a newly live cell, merging the components around it.
    ///
    /// `live_nbhd` are the live Moore neighbors of the cell. Their
    /// components are all folded into the largest one (ties broken by
    /// root index), freedoms are unioned, and the cell itself is folded
    /// in last. The merge list and the surviving root's pre-merge freedom
    /// set are recorded so that [`undo_merge`](Self::undo_merge) can
    /// restore everything exactly.
    pub(crate) fn merge(&mut self, i: usize, live_nbhd: &[usize]) -> Result<(), Error> {
        let mut nearby = Vec::with_capacity(live_nbhd.len());
        for &n in live_nbhd {
            let root = self.root(n)?;
            if !nearby.contains(&root) {
                nearby.push(root);
            }
        }

        let new_freedoms = self.forward_freedoms(i);

        if nearby.is_empty() {
            // a new component
            self.parent[i] = Some(i);
            self.size[i] = 1;
            self.freedoms.insert(i, new_freedoms);
            self.components.insert(i);
            return Ok(());
        }

        nearby.sort_unstable_by_key(|&r| (self.size[r], r));
        let root = *nearby.last().unwrap();
        let old_freedoms = self
            .freedoms
            .get(&root)
            .ok_or(Error::NoFreedomSet(root))?
            .clone();

        for &k in &nearby[..nearby.len() - 1] {
            let absorbed = self.freedoms.get(&k).ok_or(Error::NoFreedomSet(k))?.clone();
            self.parent[k] = Some(root);
            self.size[root] += self.size[k];
            self.freedoms
                .get_mut(&root)
                .ok_or(Error::NoFreedomSet(root))?
                .extend(absorbed);
            self.components.remove(&k);
        }

        // finally fold the cell itself into the merged component
        self.parent[i] = Some(root);
        self.size[i] = 1;
        self.size[root] += 1;
        let merged = self
            .freedoms
            .get_mut(&root)
            .ok_or(Error::NoFreedomSet(root))?;
        if !merged.remove(&i) {
            return Err(Error::MissingFreedom { cell: i, root });
        }
        merged.extend(new_freedoms);

        self.merge_undo.insert(
            i,
            MergeRecord {
                roots: nearby,
                old_freedoms,
            },
        );
        Ok(())
    }

    /// Splits apart the merge triggered by cell `i`.
    ///
    /// Every absorbed root becomes a component again with its recorded
    /// size, and the surviving root gets its pre-merge freedom set back
    /// verbatim.
    pub(crate) fn undo_merge(&mut self, i: usize) -> Result<(), Error> {
        let parent = self.parent[i];
        if let Some(p) = parent {
            if self.parent[p] != Some(p) {
                return Err(Error::NotARoot { cell: i, parent: p });
            }
        }

        if let Some(MergeRecord {
            roots,
            old_freedoms,
        }) = self.merge_undo.remove(&i)
        {
            let root = *roots.last().unwrap();
            if parent != Some(root) {
                return Err(Error::ParentMismatch {
                    cell: i,
                    parent,
                    expected: root,
                });
            }
            self.size[root] -= 1;
            for &k in &roots[..roots.len() - 1] {
                if self.parent[k] != Some(root) {
                    return Err(Error::SplitMismatch {
                        cell: i,
                        component: k,
                        root,
                    });
                }
                self.parent[k] = Some(k);
                self.size[root] -= self.size[k];
                self.components.insert(k);
            }
            self.freedoms.insert(root, old_freedoms);
        } else if let Some(p) = parent {
            if p != i {
                return Err(Error::NoMergeRecord { cell: i, parent: p });
            }
            if !self.components.remove(&i) {
                return Err(Error::NotAComponent(i));
            }
            self.freedoms.remove(&i);
        } else {
            // the assignment was rejected before any merge happened
            return Ok(());
        }

        self.parent[i] = None;
        self.size[i] = 0;
        Ok(())
    }

    /// Removes a dead cell from every freedom set that contains it.
    ///
    /// Returns `false` if this seals a component, i.e. empties the
    /// freedom set of a current component root. Stale sets of absorbed
    /// roots are updated too (their undo depends on it), but emptying
    /// one is not a seal: the component that absorbed them may well be
    /// free elsewhere.
    pub(crate) fn close(&mut self, i: usize) -> bool {
        let mut touched = Vec::new();
        let mut sealed = false;
        for (&c, f) in self.freedoms.iter_mut() {
            if f.remove(&i) {
                touched.push(c);
                if f.is_empty() && self.components.contains(&c) {
                    sealed = true;
                    break;
                }
            }
        }
        self.close_undo.insert(i, touched);
        !sealed
    }

    /// Puts a cell back into the freedom sets it was closed out of.
    pub(crate) fn undo_close(&mut self, i: usize) -> Result<(), Error> {
        if let Some(touched) = self.close_undo.remove(&i) {
            for c in touched {
                self.freedoms
                    .get_mut(&c)
                    .ok_or(Error::NoFreedomSet(c))?
                    .insert(i);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> Connectivity {
        Connectivity::new(6, 30)
    }

    #[test]
    fn singleton_and_undo() {
        let mut conn = tracker();
        let snapshot = conn.clone();
        conn.merge(7, &[]).unwrap();
        assert_eq!(conn.count(), 1);
        assert_eq!(conn.root(7).unwrap(), 7);
        assert_eq!(conn.freedoms[&7], [8, 12, 13, 14].into_iter().collect());
        conn.undo_merge(7).unwrap();
        assert_eq!(conn, snapshot);
    }

    #[test]
    fn merge_two_components_and_undo() {
        let mut conn = tracker();
        conn.merge(7, &[]).unwrap();
        conn.merge(9, &[]).unwrap();
        assert_eq!(conn.count(), 2);
        let snapshot = conn.clone();

        // cell 14 touches both singletons diagonally
        conn.merge(14, &[7, 9]).unwrap();
        assert_eq!(conn.count(), 1);
        let root = conn.root(14).unwrap();
        assert_eq!(conn.root(7).unwrap(), root);
        assert_eq!(conn.root(9).unwrap(), root);
        assert_eq!(conn.size_of(root), 3);

        conn.undo_merge(14).unwrap();
        assert_eq!(conn, snapshot);
    }

    #[test]
    fn close_seals_when_freedoms_empty() {
        let mut conn = tracker();
        conn.merge(7, &[]).unwrap();
        assert!(conn.close(8));
        assert!(conn.close(12));
        assert!(conn.close(13));
        // the last freedom cell dies: sealed
        assert!(!conn.close(14));
        assert!(conn.freedoms[&7].is_empty());

        conn.undo_close(14).unwrap();
        conn.undo_close(13).unwrap();
        conn.undo_close(12).unwrap();
        conn.undo_close(8).unwrap();
        assert_eq!(conn.freedoms[&7], [8, 12, 13, 14].into_iter().collect());
    }

    #[test]
    fn bottom_edge_freedoms_are_clamped() {
        let mut conn = tracker();
        // row 4 is the last row of a budget-4 grid
        conn.merge(26, &[]).unwrap();
        assert_eq!(conn.freedoms[&26], [27].into_iter().collect());
    }

    #[test]
    fn root_resolution_fails_outside_forest() {
        let mut conn = tracker();
        assert!(matches!(
            conn.merge(8, &[7]),
            Err(Error::NoRoot { cell: 7, .. })
        ));
    }
}
