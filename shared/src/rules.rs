//! Birth/survival rules of Life-like automata.
//!
//! A rule is a pair of neighbor-count sets. Conway's Game of Life is `B3/S23`:
//! a dead cell with exactly three living neighbors is born, a living cell with
//! two or three living neighbors survives, every other cell is dead next turn.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest possible number of living neighbors.
pub const MAX_NEIGHBORS: u8 = 8;

/// A set of neighbor counts in `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const EMPTY: NeighborSet = NeighborSet(0);

    /// Builds a set from counts; duplicates collapse and order is irrelevant.
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        let mut bits = 0u16;
        for &digit in digits {
            if digit > MAX_NEIGHBORS {
                return Err(Error::InvalidRuleInput {
                    input: digits.iter().map(u8::to_string).collect::<Vec<_>>().join(","),
                });
            }
            bits |= 1 << digit;
        }
        Ok(NeighborSet(bits))
    }

    pub fn contains(self, count: usize) -> bool {
        count <= MAX_NEIGHBORS as usize && self.0 & (1 << count) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn digits(self) -> Vec<u8> {
        (0..=MAX_NEIGHBORS).filter(|&d| self.0 & (1 << d) != 0).collect()
    }
}

impl FromStr for NeighborSet {
    type Err = Error;

    /// Parses a run of digits such as `"23"`. The empty string is the empty set.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRuleInput { input: s.to_string() };
        let digits = s
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(invalid))
            .collect::<Result<Vec<u8>>>()?;
        NeighborSet::from_digits(&digits).map_err(|_| invalid())
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub born: NeighborSet,
    pub survive: NeighborSet,
}

impl Rule {
    pub fn new(born: NeighborSet, survive: NeighborSet) -> Self {
        Rule { born, survive }
    }

    /// `B3/S23`
    pub fn conway() -> Self {
        Rule {
            born: NeighborSet(1 << 3),
            survive: NeighborSet((1 << 2) | (1 << 3)),
        }
    }

    pub fn from_digits(born: &[u8], survive: &[u8]) -> Result<Self> {
        Ok(Rule {
            born: NeighborSet::from_digits(born)?,
            survive: NeighborSet::from_digits(survive)?,
        })
    }

    /// Next living state of a cell given its current state and neighbor count.
    pub fn next_state(&self, living: bool, neighbors: usize) -> bool {
        if living {
            self.survive.contains(neighbors)
        } else {
            self.born.contains(neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::conway()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.born, self.survive)
    }
}

impl FromStr for Rule {
    type Err = Error;

    /// Parses `B3/S23` notation; the letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRuleInput { input: s.to_string() };
        let (born, survive) = s.trim().split_once('/').ok_or_else(invalid)?;
        let born = born
            .strip_prefix(&['B', 'b'][..])
            .ok_or_else(invalid)?
            .parse::<NeighborSet>()
            .map_err(|_| invalid())?;
        let survive = survive
            .strip_prefix(&['S', 's'][..])
            .ok_or_else(invalid)?
            .parse::<NeighborSet>()
            .map_err(|_| invalid())?;
        Ok(Rule { born, survive })
    }
}
