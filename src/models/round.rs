//! Round model.
//!
//! A round is one time slot's complete assignment: every team occupies
//! exactly one slot, either a two-team station pairing or the trailing
//! pause group. Station order is fixed and significant — station 0 and
//! station 1 host different competitions, so rounds that differ only in
//! station order are distinct.
//!
//! # Reference
//! Rasmussen & Trick (2008), "Round Robin Scheduling — a Survey"

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Pairing;

/// One round: K station pairings in station order, plus the pause group.
///
/// The canonical form sorts each pairing internally (handled by [`Pairing`]),
/// so permutations that differ only by intra-pair order collapse to one
/// `Round` value. Equality and hashing operate on the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Round {
    stations: Vec<Pairing>,
    pause: Pairing,
}

impl Round {
    /// Creates a round from station pairings and a pause group.
    pub fn new(stations: Vec<Pairing>, pause: Pairing) -> Self {
        Self { stations, pause }
    }

    /// Builds the canonical round for a full permutation of the seed list.
    ///
    /// Consecutive 2-groups become station pairings; the trailing group is
    /// the pause — a pair for an even team count, a singleton for an odd one.
    pub fn from_permutation(perm: &[u32]) -> Self {
        debug_assert!(perm.len() >= 3, "need at least one station plus a pause");
        let station_count = (perm.len() - 1) / 2;
        let stations = (0..station_count)
            .map(|i| Pairing::pair(perm[2 * i], perm[2 * i + 1]))
            .collect();
        let pause = if perm.len() % 2 == 0 {
            Pairing::pair(perm[perm.len() - 2], perm[perm.len() - 1])
        } else {
            Pairing::single(perm[perm.len() - 1])
        };
        Self { stations, pause }
    }

    /// The ordered station pairings.
    pub fn competitions(&self) -> &[Pairing] {
        &self.stations
    }

    /// The pause group (size 1 or 2).
    pub fn pause(&self) -> &Pairing {
        &self.pause
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of teams in the round.
    pub fn team_count(&self) -> usize {
        self.stations.len() * 2 + self.pause.size()
    }

    /// Iterates over every team in the round, stations first, pause last.
    pub fn teams(&self) -> impl Iterator<Item = u32> + '_ {
        self.stations
            .iter()
            .flat_map(|p| p.teams())
            .chain(self.pause.teams())
    }

    /// Adjacency rule for consecutive rounds.
    ///
    /// Admissible iff for every station index the two rounds' pairings
    /// share no team, and the two pause groups share no team — nobody
    /// occupies the same station twice in a row, and nobody rests twice
    /// in a row (this covers the odd-count singleton pause as well).
    pub fn is_allowed_next_round(&self, other: &Round) -> bool {
        if self.stations.len() != other.stations.len() {
            return false;
        }
        let station_clash = self
            .stations
            .iter()
            .zip(&other.stations)
            .any(|(a, b)| !a.is_disjoint(b));
        !station_clash && self.pause.is_disjoint(&other.pause)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.stations.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, " | pause {}", self.pause)
    }
}
