//! Incremental schedule state.
//!
//! `ScheduleState` is the tournament-in-progress threaded through the
//! backtracking search: the round sequence so far plus the aggregates the
//! validity checks consult — seen station pairings and per-station play
//! counts. The state is mutated in place; `pop_round` is the exact inverse
//! of `append_round`, so a backtracking frame restores the state it was
//! given before trying its next sibling candidate.
//!
//! Nothing is recorded for a candidate before it has been admitted, so
//! rollback is always "pop the last round and subtract its contributions".

use std::collections::HashSet;

use crate::models::{Pairing, Round, TournamentSchedule};

/// Per-station, per-team play-count ledger.
///
/// Counts only station assignments; resting is not a play. Zeroed entries
/// are removed on `unrecord`, so a rolled-back ledger compares equal to one
/// that never recorded the round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayCounts {
    per_station: Vec<std::collections::HashMap<u32, u32>>,
}

impl PlayCounts {
    /// Creates an empty ledger for the given number of stations.
    pub fn new(station_count: usize) -> Self {
        Self {
            per_station: vec![std::collections::HashMap::new(); station_count],
        }
    }

    /// Rounds the team has played at the station so far.
    pub fn count(&self, station: usize, team: u32) -> u32 {
        self.per_station
            .get(station)
            .and_then(|m| m.get(&team))
            .copied()
            .unwrap_or(0)
    }

    /// Whether appending the round would push any team past `max` at any station.
    pub fn would_exceed(&self, round: &Round, max: u32) -> bool {
        round
            .competitions()
            .iter()
            .enumerate()
            .any(|(station, pairing)| pairing.teams().any(|team| self.count(station, team) >= max))
    }

    /// Records the round's station assignments.
    pub fn record(&mut self, round: &Round) {
        for (station, pairing) in round.competitions().iter().enumerate() {
            for team in pairing.teams() {
                *self.per_station[station].entry(team).or_insert(0) += 1;
            }
        }
    }

    /// Exactly reverses [`record`](Self::record) for the same round.
    pub fn unrecord(&mut self, round: &Round) {
        for (station, pairing) in round.competitions().iter().enumerate() {
            for team in pairing.teams() {
                if let Some(count) = self.per_station[station].get_mut(&team) {
                    *count -= 1;
                    if *count == 0 {
                        self.per_station[station].remove(&team);
                    }
                }
            }
        }
    }
}

/// A tournament in progress: the round sequence plus derived aggregates.
///
/// Created empty and extended only through [`append_round`](Self::append_round).
/// The pause pairing is deliberately not entered into `seen_pairings`:
/// with one pause pair per round, an N-round schedule over N teams would
/// need more distinct pairings than C(N,2) provides. Pause repetition is
/// constrained by the adjacency rule instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    rounds: Vec<Round>,
    seen_pairings: HashSet<Pairing>,
    plays: PlayCounts,
}

impl ScheduleState {
    /// Creates an empty state for the given number of stations.
    pub fn new(station_count: usize) -> Self {
        Self {
            rounds: Vec::new(),
            seen_pairings: HashSet::new(),
            plays: PlayCounts::new(station_count),
        }
    }

    /// Number of rounds appended so far.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether no round has been appended.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Whether the state has reached the target length.
    pub fn is_complete(&self, target_rounds: usize) -> bool {
        self.rounds.len() == target_rounds
    }

    /// The rounds appended so far, in order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The most recently appended round.
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Whether the exact round is already in the sequence.
    pub fn contains_round(&self, round: &Round) -> bool {
        self.rounds.contains(round)
    }

    /// Every station pairing used by any appended round.
    pub fn seen_pairings(&self) -> &HashSet<Pairing> {
        &self.seen_pairings
    }

    /// The play-count ledger.
    pub fn plays(&self) -> &PlayCounts {
        &self.plays
    }

    /// Appends an admitted round, recording its pairings and plays.
    ///
    /// The caller is responsible for admissibility; appending an
    /// inadmissible round corrupts the aggregates' invariants.
    pub fn append_round(&mut self, round: Round) {
        for pairing in round.competitions() {
            self.seen_pairings.insert(*pairing);
        }
        self.plays.record(&round);
        self.rounds.push(round);
    }

    /// Removes the last round and subtracts its contributions.
    ///
    /// Exact inverse of [`append_round`](Self::append_round).
    pub fn pop_round(&mut self) -> Option<Round> {
        let round = self.rounds.pop()?;
        for pairing in round.competitions() {
            self.seen_pairings.remove(pairing);
        }
        self.plays.unrecord(&round);
        Some(round)
    }

    /// Snapshots the current sequence as a schedule.
    pub fn to_schedule(&self) -> TournamentSchedule {
        TournamentSchedule::new(self.rounds.clone())
    }
}
