//! All kinds of errors in this crate.
//!
//! Note that a candidate assignment failing the rule, the budget, or the
//! sealing checks is not an error: it is an ordinary reject, reported as a
//! `bool` and handled by backtracking. The variants here signal broken
//! bookkeeping invariants, and a search that returns one must be aborted.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// Cell {cell} has an ancestor {ancestor} outside the forest.
    NoRoot { cell: usize, ancestor: usize },
    /// Parent {parent} of cell {cell} is not a root.
    NotARoot { cell: usize, parent: usize },
    /// Cell {cell} has parent {parent:?}, but its merge record expects {expected}.
    ParentMismatch {
        cell: usize,
        parent: Option<usize>,
        expected: usize,
    },
    /// Cannot split component {component} from root {root} while unsetting cell {cell}.
    SplitMismatch {
        cell: usize,
        component: usize,
        root: usize,
    },
    /// Cell {cell} has parent {parent} but no merge record.
    NoMergeRecord { cell: usize, parent: usize },
    /// Cell {0} is self-parented but not a component.
    NotAComponent(usize),
    /// Component {0} has no freedom set.
    NoFreedomSet(usize),
    /// Freedom set of root {root} does not contain cell {cell}.
    MissingFreedom { cell: usize, root: usize },
    /// Search cursor ran off the grid at {0}.
    CursorOutOfRange(usize),
}
