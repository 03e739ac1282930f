//! Totalistic Life-like rules.
//!
//! For the notation of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::error::Error;
use ca_rules::ParseLife;
use std::str::FromStr;

/// A totalistic Life-like rule, as a pair of lookup tables over the
/// live-neighbor count.
///
/// The still-life condition for a cell with `n` live neighbors is
/// `!birth[n]` if the cell is dead, and `survive[n]` if it is alive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Whether a dead cell with the given number of live neighbors
    /// becomes alive in the next generation.
    pub(crate) birth: [bool; 9],

    /// Whether a live cell with the given number of live neighbors
    /// stays alive in the next generation.
    pub(crate) survive: [bool; 9],
}

impl Rule {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survive = [false; 9];
        for &n in b {
            birth[n as usize] = true;
        }
        for &n in s {
            survive[n as usize] = true;
        }
        Rule { birth, survive }
    }

    /// Complements the survival table.
    ///
    /// A still life of the inverted rule is a pattern that vanishes
    /// completely after one step of the original rule: every live cell
    /// dies, and no dead cell is born.
    #[must_use]
    pub fn invert(mut self) -> Self {
        for s in self.survive.iter_mut() {
            *s = !*s;
        }
        self
    }
}

/// A parser for the rule.
impl ParseLife for Rule {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ParseLife::parse_rule(input).map_err(Error::ParseRuleError)
    }
}
