//! Depth-first backtracking search driver.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::checker::rules::RestSandwich;
use crate::checker::{ScheduleRule, ValidityChecker};
use crate::generator;
use crate::models::{OrderingPolicy, Round, SearchMode, TournamentConfig, TournamentSchedule};
use crate::state::ScheduleState;
use crate::validation::{validate_config, ValidationError};

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The search ran to its natural end. An empty schedule list here
    /// means the configuration is unsatisfiable.
    Completed,
    /// The node budget was exhausted before the search could finish.
    /// Says nothing about satisfiability.
    BudgetExceeded,
}

/// Search observability counters. Side channel only, never correctness.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// States visited (one per recursive call).
    pub nodes_visited: u64,
    /// Non-terminal states from which no candidate was admissible.
    pub dead_ends: u64,
    /// Largest round count reached by any dead branch.
    pub deepest_round: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Complete schedules found: all of them in exhaustive mode, at most
    /// one in first-found mode.
    pub schedules: Vec<TournamentSchedule>,
    /// Observability counters.
    pub stats: SearchStats,
    /// How the run ended.
    pub termination: Termination,
}

impl SearchReport {
    /// Whether the search proved the configuration unsatisfiable.
    pub fn is_unsatisfiable(&self) -> bool {
        self.schedules.is_empty() && self.termination == Termination::Completed
    }
}

/// Outcome of one recursive frame, propagated explicitly so first-found
/// short-circuits and budget aborts are ordinary control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Explored,
    ShortCircuit,
    Aborted,
}

/// Depth-first backtracking scheduler.
///
/// Generates the candidate pool, orders it per the configuration, and
/// extends a single rolled-back [`ScheduleState`] until the target length
/// is reached. The pool is read-only during search and shared by every
/// branch.
///
/// # Example
///
/// ```
/// use station_schedule::search::SearchDriver;
/// use station_schedule::models::{TournamentConfig, SearchMode};
///
/// let config = TournamentConfig::new(4, 2)
///     .with_mode(SearchMode::Exhaustive);
/// let report = SearchDriver::new().run(&config).unwrap();
/// assert_eq!(report.schedules.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SearchDriver {
    extra_rules: Vec<Arc<dyn ScheduleRule>>,
    use_standard_rules: bool,
}

impl Default for SearchDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchDriver {
    /// Creates a driver with the standard rule set ([`RestSandwich`]).
    pub fn new() -> Self {
        Self {
            extra_rules: Vec::new(),
            use_standard_rules: true,
        }
    }

    /// Creates a driver with only the hard invariants, no pluggable rules.
    pub fn without_standard_rules() -> Self {
        Self {
            extra_rules: Vec::new(),
            use_standard_rules: false,
        }
    }

    /// Adds a pluggable rule on top of the configured set.
    pub fn with_rule<R: ScheduleRule + 'static>(mut self, rule: R) -> Self {
        self.extra_rules.push(Arc::new(rule));
        self
    }

    /// Runs the search for the given configuration.
    ///
    /// Configuration errors are reported before any search work happens.
    pub fn run(&self, config: &TournamentConfig) -> Result<SearchReport, Vec<ValidationError>> {
        validate_config(config)?;
        let start = Instant::now();

        let mut pool = generator::candidate_pool(&config.teams, &config.forbidden);
        match config.ordering {
            OrderingPolicy::AsGenerated => {}
            OrderingPolicy::Sorted => pool.sort(),
            OrderingPolicy::Shuffled { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                pool.shuffle(&mut rng);
            }
        }

        let mut checker = ValidityChecker::new(config.max_plays_per_station);
        if self.use_standard_rules {
            checker = checker.with_rule(RestSandwich);
        }
        checker = checker.with_shared_rules(&self.extra_rules);

        let mut state = ScheduleState::new(config.station_count());
        let mut stats = SearchStats::default();
        let mut schedules = Vec::new();
        let step = self.extend(
            &pool,
            &checker,
            config,
            &mut state,
            &mut stats,
            &mut schedules,
        );
        stats.elapsed = start.elapsed();

        let termination = if step == Step::Aborted {
            Termination::BudgetExceeded
        } else {
            Termination::Completed
        };
        Ok(SearchReport {
            schedules,
            stats,
            termination,
        })
    }

    fn extend(
        &self,
        pool: &[Round],
        checker: &ValidityChecker,
        config: &TournamentConfig,
        state: &mut ScheduleState,
        stats: &mut SearchStats,
        schedules: &mut Vec<TournamentSchedule>,
    ) -> Step {
        stats.nodes_visited += 1;
        if let Some(budget) = config.max_nodes {
            if stats.nodes_visited > budget {
                return Step::Aborted;
            }
        }

        if state.is_complete(config.target_rounds) {
            schedules.push(state.to_schedule());
            return match config.mode {
                SearchMode::FirstFound => Step::ShortCircuit,
                SearchMode::Exhaustive => Step::Explored,
            };
        }

        let mut extended = false;
        for candidate in pool {
            if !checker.is_valid_next_round(state, candidate) {
                continue;
            }
            extended = true;
            state.append_round(candidate.clone());
            let step = self.extend(pool, checker, config, state, stats, schedules);
            state.pop_round();
            if step != Step::Explored {
                return step;
            }
        }

        if !extended {
            stats.dead_ends += 1;
            stats.deepest_round = stats.deepest_round.max(state.round_count());
        }
        Step::Explored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForbiddenPairings;
    use std::collections::HashSet;

    #[test]
    fn test_exhaustive_four_teams_two_rounds() {
        // Each of the 6 first rounds has exactly one admissible successor:
        // the round swapping its station pair with its pause pair.
        let config = TournamentConfig::new(4, 2).with_mode(SearchMode::Exhaustive);
        let report = SearchDriver::new().run(&config).unwrap();

        assert_eq!(report.termination, Termination::Completed);
        assert_eq!(report.schedules.len(), 6);
        for schedule in &report.schedules {
            assert_eq!(schedule.round_count(), 2);
            assert!(schedule.is_valid(config.max_plays_per_station));
        }
        let unique: HashSet<_> = report.schedules.iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_exhaustive_four_teams_three_rounds_unsatisfiable() {
        // The third round would have to repeat the first round's station
        // pairing, so every branch dies at depth 2.
        let config = TournamentConfig::new(4, 3).with_mode(SearchMode::Exhaustive);
        let report = SearchDriver::new().run(&config).unwrap();

        assert!(report.is_unsatisfiable());
        assert_eq!(report.schedules.len(), 0);
        assert_eq!(report.stats.dead_ends, 6);
        assert_eq!(report.stats.deepest_round, 2);
        assert_eq!(report.stats.nodes_visited, 13); // root + 6 + 6
    }

    #[test]
    fn test_exhaustive_is_deterministic() {
        let config = TournamentConfig::new(4, 2)
            .with_mode(SearchMode::Exhaustive)
            .with_ordering(OrderingPolicy::Sorted);
        let a = SearchDriver::new().run(&config).unwrap();
        let b = SearchDriver::new().run(&config).unwrap();
        assert_eq!(a.schedules, b.schedules);
    }

    #[test]
    fn test_sorted_first_found_yields_known_schedule() {
        // The sorted pool for 4 teams starts at (1,2)|(3,4); the only round
        // admissible after it is its station/pause swap. Pinning the literal
        // result catches ordering regressions that a run-vs-run comparison
        // would miss.
        let config = TournamentConfig::new(4, 2).with_ordering(OrderingPolicy::Sorted);
        let report = SearchDriver::new().run(&config).unwrap();

        let expected = TournamentSchedule::new(vec![
            Round::from_permutation(&[1, 2, 3, 4]),
            Round::from_permutation(&[3, 4, 1, 2]),
        ]);
        assert_eq!(report.schedules, vec![expected]);
    }

    #[test]
    fn test_first_found_reference_scenario() {
        // N=8, 3 stations + pause pair, target 8, cap 2: the reference
        // configuration. A solution forces every team to exactly 2 plays
        // per station and 2 rests.
        let config = TournamentConfig::new(8, 8);
        let report = SearchDriver::new().run(&config).unwrap();

        assert_eq!(report.termination, Termination::Completed);
        assert_eq!(report.schedules.len(), 1);
        let schedule = &report.schedules[0];
        assert_eq!(schedule.round_count(), 8);
        assert!(schedule.is_valid(2));
        for team in 1..=8 {
            for station in 0..3 {
                let plays = schedule.plays_at(station, team);
                assert!((1..=2).contains(&plays), "team {team} station {station}");
            }
            assert!(schedule.pause_count(team) >= 1);
        }
    }

    #[test]
    fn test_first_found_returns_at_most_one() {
        let config = TournamentConfig::new(6, 2).with_mode(SearchMode::FirstFound);
        let report = SearchDriver::new().run(&config).unwrap();
        assert_eq!(report.schedules.len(), 1);
        assert!(report.schedules[0].is_valid(2));
    }

    #[test]
    fn test_shuffled_ordering_is_reproducible() {
        let config = TournamentConfig::new(6, 2)
            .with_ordering(OrderingPolicy::Shuffled { seed: 42 });
        let a = SearchDriver::new().run(&config).unwrap();
        let b = SearchDriver::new().run(&config).unwrap();
        assert_eq!(a.schedules, b.schedules);
        assert_eq!(a.schedules.len(), 1);
    }

    #[test]
    fn test_budget_abort_is_distinct_from_unsatisfiable() {
        let config = TournamentConfig::new(8, 8).with_node_budget(5);
        let report = SearchDriver::new().run(&config).unwrap();

        assert_eq!(report.termination, Termination::BudgetExceeded);
        assert!(report.schedules.is_empty());
        assert!(!report.is_unsatisfiable());
    }

    #[test]
    fn test_forbidden_everywhere_reports_unsatisfiable() {
        let mut forbidden = ForbiddenPairings::new();
        for a in 1..=4u32 {
            for b in (a + 1)..=4 {
                forbidden = forbidden.with_pair(0, a, b);
            }
        }
        let config = TournamentConfig::new(4, 2)
            .with_mode(SearchMode::Exhaustive)
            .with_forbidden(forbidden);
        let report = SearchDriver::new().run(&config).unwrap();

        assert!(report.is_unsatisfiable());
        assert_eq!(report.stats.dead_ends, 1); // the root itself
        assert_eq!(report.stats.deepest_round, 0);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_search() {
        let config = TournamentConfig::new(8, 0);
        assert!(SearchDriver::new().run(&config).is_err());
    }

    #[test]
    fn test_self_pairing_forbidden_config_is_an_error_not_a_panic() {
        let forbidden = ForbiddenPairings::new().with_pair(0, 5, 5);
        let config = TournamentConfig::new(8, 8).with_forbidden(forbidden);
        let errors = SearchDriver::new().run(&config).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_custom_rule_prunes_search() {
        // A rule rejecting everything makes even target 1 unsatisfiable.
        #[derive(Debug)]
        struct RejectAll;
        impl ScheduleRule for RejectAll {
            fn name(&self) -> &'static str {
                "reject-all"
            }
            fn admits(&self, _: &ScheduleState, _: &Round) -> bool {
                false
            }
        }

        let config = TournamentConfig::new(4, 1).with_mode(SearchMode::Exhaustive);
        let report = SearchDriver::new()
            .with_rule(RejectAll)
            .run(&config)
            .unwrap();
        assert!(report.is_unsatisfiable());
    }

    #[test]
    fn test_without_standard_rules() {
        let config = TournamentConfig::new(4, 2).with_mode(SearchMode::Exhaustive);
        let report = SearchDriver::without_standard_rules().run(&config).unwrap();
        // Rest-sandwich never fires at depth < 2, so the result matches.
        assert_eq!(report.schedules.len(), 6);
    }
}
