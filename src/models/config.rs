//! Tournament configuration model.
//!
//! Everything the search consumes as input: the team seed list, target
//! schedule length, the per-station play cap, statically forbidden
//! pairings, the search mode, the candidate ordering policy, and an
//! optional node budget.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::Pairing;

/// Which schedules the search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchMode {
    /// Collect every complete schedule reachable from the empty state.
    Exhaustive,
    /// Stop at the first complete schedule and propagate it upward.
    #[default]
    FirstFound,
}

/// Order in which the candidate pool is tried at every depth.
///
/// Ordering affects only which valid schedule is found first, never
/// correctness. Shuffling is seeded so runs are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderingPolicy {
    /// First-occurrence order of the generator's permutation stream.
    #[default]
    AsGenerated,
    /// Lexicographic order of canonical rounds.
    Sorted,
    /// Seeded, reproducible shuffle.
    Shuffled { seed: u64 },
}

/// Statically forbidden pairings, per station.
///
/// A round is excluded from the candidate pool if any of its station
/// pairings is forbidden at that station. This encodes domain seeding
/// preferences ("these two teams never meet at station 0") and is applied
/// once, before search, independent of search state.
///
/// Entries are stored as raw id pairs rather than [`Pairing`]s so that a
/// malformed entry (a team paired with itself) survives construction and
/// is reported by [`validate_config`](crate::validation::validate_config)
/// instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForbiddenPairings {
    by_station: HashMap<usize, HashSet<(u32, u32)>>,
}

impl ForbiddenPairings {
    /// Creates an empty forbidden set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbids the pairing of `a` and `b` at the given station.
    ///
    /// A self pairing (`a == b`) is stored as given; it can never match a
    /// real station pairing and is rejected by configuration validation.
    pub fn with_pair(mut self, station: usize, a: u32, b: u32) -> Self {
        self.by_station
            .entry(station)
            .or_default()
            .insert((a.min(b), a.max(b)));
        self
    }

    /// Whether the pairing is forbidden at the given station.
    pub fn is_forbidden(&self, station: usize, pairing: &Pairing) -> bool {
        let Some(second) = pairing.second() else {
            return false;
        };
        self.by_station
            .get(&station)
            .is_some_and(|set| set.contains(&(pairing.first(), second)))
    }

    /// Whether no pairing is forbidden anywhere.
    pub fn is_empty(&self) -> bool {
        self.by_station.values().all(|set| set.is_empty())
    }

    /// Iterates over all `(station, low id, high id)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (usize, u32, u32)> + '_ {
        self.by_station
            .iter()
            .flat_map(|(&station, set)| set.iter().map(move |&(a, b)| (station, a, b)))
    }
}

/// Full input for a scheduling run.
///
/// # Example
/// ```
/// use station_schedule::models::{TournamentConfig, SearchMode, OrderingPolicy};
///
/// let config = TournamentConfig::new(8, 8)
///     .with_max_plays(2)
///     .with_mode(SearchMode::FirstFound)
///     .with_ordering(OrderingPolicy::Sorted);
/// assert_eq!(config.station_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Team seed list. Defaults to `1..=N`; every id must be distinct.
    pub teams: Vec<u32>,
    /// Number of rounds a complete schedule must have.
    pub target_rounds: usize,
    /// Maximum rounds any team may play at any single station.
    pub max_plays_per_station: u32,
    /// Statically forbidden station pairings.
    pub forbidden: ForbiddenPairings,
    /// Exhaustive enumeration or first-found short-circuit.
    pub mode: SearchMode,
    /// Candidate ordering policy.
    pub ordering: OrderingPolicy,
    /// Optional search budget: maximum states visited before aborting.
    pub max_nodes: Option<u64>,
}

impl TournamentConfig {
    /// Creates a configuration for teams `1..=team_count`.
    pub fn new(team_count: u32, target_rounds: usize) -> Self {
        Self {
            teams: (1..=team_count).collect(),
            target_rounds,
            max_plays_per_station: 2,
            forbidden: ForbiddenPairings::new(),
            mode: SearchMode::default(),
            ordering: OrderingPolicy::default(),
            max_nodes: None,
        }
    }

    /// Replaces the seed list with explicit team ids.
    pub fn with_teams(mut self, teams: Vec<u32>) -> Self {
        self.teams = teams;
        self
    }

    /// Sets the per-station play cap.
    pub fn with_max_plays(mut self, max_plays: u32) -> Self {
        self.max_plays_per_station = max_plays;
        self
    }

    /// Sets the forbidden pairings.
    pub fn with_forbidden(mut self, forbidden: ForbiddenPairings) -> Self {
        self.forbidden = forbidden;
        self
    }

    /// Sets the search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the candidate ordering policy.
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Sets the node budget.
    pub fn with_node_budget(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of stations: all pairing slots but the trailing pause one.
    pub fn station_count(&self) -> usize {
        self.teams.len().saturating_sub(1) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_list() {
        let config = TournamentConfig::new(8, 8);
        assert_eq!(config.teams, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(config.max_plays_per_station, 2);
        assert_eq!(config.mode, SearchMode::FirstFound);
    }

    #[test]
    fn test_station_count() {
        assert_eq!(TournamentConfig::new(4, 2).station_count(), 1);
        assert_eq!(TournamentConfig::new(8, 8).station_count(), 3);
        assert_eq!(TournamentConfig::new(9, 9).station_count(), 4);
        assert_eq!(TournamentConfig::new(0, 1).station_count(), 0);
    }

    #[test]
    fn test_forbidden_lookup() {
        let forbidden = ForbiddenPairings::new().with_pair(0, 2, 1).with_pair(1, 3, 4);
        assert!(forbidden.is_forbidden(0, &Pairing::pair(1, 2)));
        assert!(!forbidden.is_forbidden(1, &Pairing::pair(1, 2)));
        assert!(forbidden.is_forbidden(1, &Pairing::pair(3, 4)));
        assert!(!forbidden.is_empty());
        assert_eq!(forbidden.entries().count(), 2);
    }

    #[test]
    fn test_self_pairing_entry_is_stored_without_panic() {
        let forbidden = ForbiddenPairings::new().with_pair(0, 5, 5);
        assert!(!forbidden.is_empty());
        assert_eq!(forbidden.entries().collect::<Vec<_>>(), vec![(0, 5, 5)]);
        // A degenerate entry never matches a real station pairing.
        assert!(!forbidden.is_forbidden(0, &Pairing::pair(4, 5)));
        assert!(!forbidden.is_forbidden(0, &Pairing::single(5)));
    }

    #[test]
    fn test_empty_forbidden() {
        let forbidden = ForbiddenPairings::new();
        assert!(forbidden.is_empty());
        assert!(!forbidden.is_forbidden(0, &Pairing::pair(1, 2)));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = TournamentConfig::new(6, 6)
            .with_forbidden(ForbiddenPairings::new().with_pair(0, 1, 2))
            .with_ordering(OrderingPolicy::Shuffled { seed: 7 })
            .with_node_budget(1000);
        let json = serde_json::to_string(&config).unwrap();
        let back: TournamentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
