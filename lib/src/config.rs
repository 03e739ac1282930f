//! Search configuration.

use crate::{error::Error, rules::Rule, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search configuration.
///
/// The world will be generated from this configuration.
///
/// Nothing is validated beyond parsing the rule string: a zero budget or a
/// degenerate rule table is a documented precondition violation, not a
/// checked contract.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximum number of live cells in a pattern.
    #[educe(Default = 16)]
    pub max_live_cells: usize,

    /// The rule string of the cellular automaton.
    #[educe(Default(expression = "String::from(\"B3/S23\")"))]
    pub rule_string: String,

    /// Whether to complement the survival table before searching.
    ///
    /// Still lifes of the inverted rule are exactly the patterns that
    /// vanish in one step of the original rule.
    pub invert: bool,
}

impl Config {
    /// Sets up a new configuration with the given live-cell budget.
    pub fn new(max_live_cells: usize) -> Self {
        Config {
            max_live_cells,
            ..Config::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule(mut self, rule_string: &str) -> Self {
        self.rule_string = String::from(rule_string);
        self
    }

    /// Sets whether to complement the survival table before searching.
    pub fn set_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Creates a world from the configuration.
    pub fn world(&self) -> Result<World, Error> {
        let rule: Rule = self.rule_string.parse()?;
        let rule = if self.invert { rule.invert() } else { rule };
        Ok(World::new_with_rule(self, rule))
    }
}
