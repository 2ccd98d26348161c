//! Schedule fairness metrics (KPIs).
//!
//! Computes fairness indicators from a completed tournament schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Play Spread | max − min play count per station, worst station |
//! | Pause Spread | max − min rest count across teams |
//! | Station Coverage | fraction of team×station combos played ≥ once |
//! | Distinct Pairings | number of distinct station pairings used |

use std::collections::HashMap;

use crate::models::TournamentSchedule;

/// Fairness indicators for a completed schedule.
#[derive(Debug, Clone)]
pub struct TournamentKpi {
    /// Per-team total station plays (excludes pauses).
    pub plays_by_team: HashMap<u32, u32>,
    /// Worst per-station spread: max − min plays over teams.
    pub play_spread: u32,
    /// Spread of rest counts: max − min pauses over teams.
    pub pause_spread: u32,
    /// Fraction of (team, station) combinations played at least once.
    pub station_coverage: f64,
    /// Number of distinct station pairings used.
    pub distinct_pairings: usize,
}

impl TournamentKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &TournamentSchedule) -> Self {
        let teams: Vec<u32> = schedule.team_ids().into_iter().collect();
        let stations = schedule.station_count();

        let mut plays_by_team: HashMap<u32, u32> = HashMap::new();
        let mut play_spread = 0u32;
        let mut covered = 0usize;
        for station in 0..stations {
            let mut min_plays = u32::MAX;
            let mut max_plays = 0u32;
            for &team in &teams {
                let plays = schedule.plays_at(station, team);
                *plays_by_team.entry(team).or_insert(0) += plays;
                min_plays = min_plays.min(plays);
                max_plays = max_plays.max(plays);
                if plays > 0 {
                    covered += 1;
                }
            }
            if !teams.is_empty() {
                play_spread = play_spread.max(max_plays - min_plays);
            }
        }

        let pause_spread = if teams.is_empty() {
            0
        } else {
            let pauses: Vec<u32> = teams.iter().map(|&t| schedule.pause_count(t)).collect();
            pauses.iter().max().unwrap_or(&0) - pauses.iter().min().unwrap_or(&0)
        };

        let combos = teams.len() * stations;
        let station_coverage = if combos == 0 {
            0.0
        } else {
            covered as f64 / combos as f64
        };

        let distinct_pairings = schedule
            .rounds
            .iter()
            .flat_map(|r| r.competitions().iter().copied())
            .collect::<std::collections::HashSet<_>>()
            .len();

        Self {
            plays_by_team,
            play_spread,
            pause_spread,
            station_coverage,
            distinct_pairings,
        }
    }

    /// Whether the schedule meets the given fairness thresholds.
    pub fn meets_thresholds(&self, max_play_spread: u32, min_coverage: f64) -> bool {
        self.play_spread <= max_play_spread && self.station_coverage >= min_coverage
    }
}
