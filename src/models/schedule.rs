//! Tournament schedule (solution) model.
//!
//! A schedule is an ordered sequence of rounds of the target length.
//! `audit` re-checks a completed schedule against the invariants the
//! search maintains, so callers (and tests) can verify solutions
//! independently of the search path that produced them.
//!
//! # Reference
//! de Werra (1981), "Scheduling in Sports"

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::{Pairing, Round};

/// A complete tournament schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TournamentSchedule {
    /// Rounds in play order.
    pub rounds: Vec<Round>,
}

/// A constraint violation found by [`TournamentSchedule::audit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Index of the round where the violation surfaces.
    pub round_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A round does not cover every team exactly once.
    MalformedRound,
    /// The same station pairing occurs in two rounds.
    RepeatedPairing,
    /// A team plays one station more often than allowed.
    MaxPlaysExceeded,
    /// A team occupies the same station in two consecutive rounds.
    StationRepeat,
    /// A team rests in two consecutive rounds.
    PauseRepeat,
}

impl Violation {
    fn new(violation_type: ViolationType, round_index: usize, message: impl Into<String>) -> Self {
        Self {
            violation_type,
            round_index,
            message: message.into(),
        }
    }
}

impl TournamentSchedule {
    /// Creates a schedule from rounds in play order.
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the schedule has no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of stations, taken from the first round. Zero when empty.
    pub fn station_count(&self) -> usize {
        self.rounds.first().map_or(0, Round::station_count)
    }

    /// All team ids, taken from the first round.
    pub fn team_ids(&self) -> BTreeSet<u32> {
        self.rounds
            .first()
            .map_or_else(BTreeSet::new, |r| r.teams().collect())
    }

    /// Rounds a team plays at the given station across the schedule.
    pub fn plays_at(&self, station: usize, team: u32) -> u32 {
        self.rounds
            .iter()
            .filter(|r| {
                r.competitions()
                    .get(station)
                    .is_some_and(|p| p.contains(team))
            })
            .count() as u32
    }

    /// Rounds in which a team rests.
    pub fn pause_count(&self, team: u32) -> u32 {
        self.rounds
            .iter()
            .filter(|r| r.pause().contains(team))
            .count() as u32
    }

    /// Re-checks every invariant and returns all violations found.
    ///
    /// Checks, matching the search's admissibility rules:
    /// 1. each round covers the team set of the first round exactly once;
    /// 2. no station pairing occurs twice anywhere in the schedule;
    /// 3. no team exceeds `max_plays` at any station;
    /// 4. consecutive rounds share no team at any station index;
    /// 5. consecutive rounds share no resting team.
    pub fn audit(&self, max_plays: u32) -> Vec<Violation> {
        let mut violations = Vec::new();
        let expected = self.team_ids();

        for (i, round) in self.rounds.iter().enumerate() {
            let teams: Vec<u32> = round.teams().collect();
            let unique: BTreeSet<u32> = teams.iter().copied().collect();
            if unique != expected || unique.len() != teams.len() {
                violations.push(Violation::new(
                    ViolationType::MalformedRound,
                    i,
                    format!("round {i} does not cover every team exactly once"),
                ));
            }
        }

        let mut seen: HashSet<Pairing> = HashSet::new();
        for (i, round) in self.rounds.iter().enumerate() {
            for pairing in round.competitions() {
                if !seen.insert(*pairing) {
                    violations.push(Violation::new(
                        ViolationType::RepeatedPairing,
                        i,
                        format!("station pairing {pairing} occurs twice"),
                    ));
                }
            }
        }

        let mut plays: HashMap<(usize, u32), u32> = HashMap::new();
        for (i, round) in self.rounds.iter().enumerate() {
            for (station, pairing) in round.competitions().iter().enumerate() {
                for team in pairing.teams() {
                    let count = plays.entry((station, team)).or_insert(0);
                    *count += 1;
                    if *count == max_plays + 1 {
                        violations.push(Violation::new(
                            ViolationType::MaxPlaysExceeded,
                            i,
                            format!(
                                "team {team} plays station {station} more than {max_plays} times"
                            ),
                        ));
                    }
                }
            }
        }

        for (i, pair) in self.rounds.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            for (station, (a, b)) in prev
                .competitions()
                .iter()
                .zip(next.competitions())
                .enumerate()
            {
                if !a.is_disjoint(b) {
                    violations.push(Violation::new(
                        ViolationType::StationRepeat,
                        i + 1,
                        format!(
                            "station {station} keeps a team across rounds {i} and {}",
                            i + 1
                        ),
                    ));
                }
            }
            if !prev.pause().is_disjoint(next.pause()) {
                violations.push(Violation::new(
                    ViolationType::PauseRepeat,
                    i + 1,
                    format!("a team rests in both rounds {i} and {}", i + 1),
                ));
            }
        }

        violations
    }

    /// Whether the schedule passes [`audit`](Self::audit) cleanly.
    pub fn is_valid(&self, max_plays: u32) -> bool {
        self.audit(max_plays).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> TournamentSchedule {
        TournamentSchedule::new(vec![
            Round::from_permutation(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Round::from_permutation(&[3, 7, 5, 8, 1, 4, 2, 6]),
        ])
    }

    #[test]
    fn test_valid_schedule_audits_clean() {
        let s = sample_schedule();
        assert!(s.audit(2).is_empty());
        assert!(s.is_valid(2));
    }

    #[test]
    fn test_plays_and_pause_counts() {
        let s = sample_schedule();
        assert_eq!(s.plays_at(0, 1), 1);
        assert_eq!(s.plays_at(2, 1), 1); // (1,4) at station 2 in the second round
        assert_eq!(s.plays_at(1, 1), 0);
        assert_eq!(s.pause_count(7), 1);
        assert_eq!(s.pause_count(1), 0);
        assert_eq!(s.station_count(), 3);
        assert_eq!(s.team_ids().len(), 8);
    }

    #[test]
    fn test_audit_repeated_pairing() {
        let s = TournamentSchedule::new(vec![
            Round::from_permutation(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Round::from_permutation(&[3, 7, 5, 8, 1, 4, 2, 6]),
            // (1,2) played station 0 in the first round, repeats at station 1.
            Round::from_permutation(&[5, 6, 1, 2, 7, 8, 3, 4]),
        ]);
        assert!(s
            .audit(2)
            .iter()
            .any(|v| v.violation_type == ViolationType::RepeatedPairing));
    }

    #[test]
    fn test_audit_station_repeat() {
        let s = TournamentSchedule::new(vec![
            Round::from_permutation(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Round::from_permutation(&[1, 3, 5, 7, 2, 8, 4, 6]),
        ]);
        let violations = s.audit(2);
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::StationRepeat && v.round_index == 1));
    }

    #[test]
    fn test_audit_pause_repeat() {
        let s = TournamentSchedule::new(vec![
            Round::from_permutation(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Round::from_permutation(&[3, 5, 6, 8, 1, 4, 2, 7]),
        ]);
        assert!(s
            .audit(2)
            .iter()
            .any(|v| v.violation_type == ViolationType::PauseRepeat));
    }

    #[test]
    fn test_audit_max_plays() {
        let s = sample_schedule();
        // With a cap of zero every station assignment is a violation.
        assert!(s
            .audit(0)
            .iter()
            .any(|v| v.violation_type == ViolationType::MaxPlaysExceeded));
        assert!(s.is_valid(1));
    }

    #[test]
    fn test_audit_malformed_round() {
        let s = TournamentSchedule::new(vec![
            Round::from_permutation(&[1, 2, 3, 4, 5, 6, 7, 8]),
            Round::from_permutation(&[9, 10, 3, 4, 5, 6, 7, 8]), // wrong team set
        ]);
        assert!(s
            .audit(2)
            .iter()
            .any(|v| v.violation_type == ViolationType::MalformedRound));
    }

    #[test]
    fn test_empty_schedule() {
        let s = TournamentSchedule::default();
        assert!(s.is_empty());
        assert_eq!(s.station_count(), 0);
        assert!(s.audit(2).is_empty());
    }

    #[test]
    fn test_schedule_serde() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: TournamentSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
