//! Pairing model.
//!
//! A pairing is an unordered grouping of teams occupying one slot of a
//! round: two teams at a competition station, two teams resting together
//! (even team count), or a single resting team (odd team count).
//!
//! # Reference
//! Mendelsohn & Rosa (1985), "One-Factorizations of the Complete Graph — A Survey"

use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered one- or two-team grouping at a station or in the pause slot.
///
/// Two-team pairings are stored in ascending order, so reflection-symmetric
/// pairings compare and hash identically: `Pairing::pair(3, 1) == Pairing::pair(1, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pairing {
    first: u32,
    second: Option<u32>,
}

impl Pairing {
    /// Creates a two-team pairing. Order of arguments does not matter.
    pub fn pair(a: u32, b: u32) -> Self {
        debug_assert!(a != b, "a pairing needs two distinct teams");
        Self {
            first: a.min(b),
            second: Some(a.max(b)),
        }
    }

    /// Creates a single-team pairing (odd-count pause slot).
    pub fn single(team: u32) -> Self {
        Self {
            first: team,
            second: None,
        }
    }

    /// Lowest team id in the pairing.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Highest team id, or `None` for a singleton.
    pub fn second(&self) -> Option<u32> {
        self.second
    }

    /// Whether this pairing holds two teams.
    pub fn is_pair(&self) -> bool {
        self.second.is_some()
    }

    /// Number of teams in the pairing (1 or 2).
    pub fn size(&self) -> usize {
        if self.second.is_some() {
            2
        } else {
            1
        }
    }

    /// Whether the given team belongs to this pairing.
    pub fn contains(&self, team: u32) -> bool {
        self.first == team || self.second == Some(team)
    }

    /// Iterates over the team ids in ascending order.
    pub fn teams(&self) -> impl Iterator<Item = u32> {
        [Some(self.first), self.second].into_iter().flatten()
    }

    /// Whether the two pairings share no team.
    pub fn is_disjoint(&self, other: &Pairing) -> bool {
        !other.teams().any(|t| self.contains(t))
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(f, "({},{})", self.first, second),
            None => write!(f, "({})", self.first),
        }
    }
}
