//! Rule Set Module
//!
//! Defines the canonical representation of a Life-like rule.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// == Rule Set ==
/// A validated Life-like rule.
///
/// `birth` holds the neighbor counts at which a dead cell becomes alive,
/// `survival` the counts at which a live cell stays alive. Both are sets of
/// values in 0..=8; duplicates and ordering in the input are irrelevant.
///
/// Immutable once constructed. A session-owned value; no shared mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Neighbor counts at which a dead cell becomes alive
    pub birth: BTreeSet<u8>,
    /// Neighbor counts at which a live cell remains alive
    pub survival: BTreeSet<u8>,
}

impl RuleSet {
    // == Constructor ==
    /// Creates a rule set from iterators of neighbor counts.
    ///
    /// Values outside 0..=8 are discarded.
    pub fn new<B, S>(birth: B, survival: S) -> Self
    where
        B: IntoIterator<Item = u8>,
        S: IntoIterator<Item = u8>,
    {
        Self {
            birth: birth.into_iter().filter(|&n| n <= super::MAX_NEIGHBORS).collect(),
            survival: survival.into_iter().filter(|&n| n <= super::MAX_NEIGHBORS).collect(),
        }
    }

    // == Conway ==
    /// The classic Game of Life rule, B3/S23.
    pub fn conway() -> Self {
        Self::new([3], [2, 3])
    }

    // == Births On ==
    /// Returns true if a dead cell with `neighbors` live neighbors is born.
    pub fn births_on(&self, neighbors: u8) -> bool {
        self.birth.contains(&neighbors)
    }

    // == Survives On ==
    /// Returns true if a live cell with `neighbors` live neighbors survives.
    pub fn survives_on(&self, neighbors: u8) -> bool {
        self.survival.contains(&neighbors)
    }

    // == Is Empty ==
    /// Returns true if both halves of the rule are empty.
    pub fn is_empty(&self) -> bool {
        self.birth.is_empty() && self.survival.is_empty()
    }
}

// == Display ==
/// Renders the canonical compact form, e.g. `B3/S23`.
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in &self.birth {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in &self.survival {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
