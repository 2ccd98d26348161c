//! Validity checking engine.
//!
//! Decides whether a candidate round may legally extend a schedule state.
//! Checks run cheapest and most discriminating first, with short-circuit,
//! since this predicate is the innermost loop of the search.

use std::sync::Arc;

use super::rules::RestSandwich;
use super::ScheduleRule;
use crate::models::Round;
use crate::state::ScheduleState;

/// Admissibility checker for extending a schedule state by one round.
///
/// Hard checks, in order:
/// 1. the exact round has not been used before;
/// 2. none of the candidate's station pairings has been seen;
/// 3. adjacency against the last round (stations and pause disjoint);
/// 4. every configured [`ScheduleRule`] admits the candidate;
/// 5. no team's per-station play count would exceed the cap.
#[derive(Debug, Clone)]
pub struct ValidityChecker {
    max_plays: u32,
    rules: Vec<Arc<dyn ScheduleRule>>,
}

impl ValidityChecker {
    /// Creates a checker with no pluggable rules.
    pub fn new(max_plays: u32) -> Self {
        Self {
            max_plays,
            rules: Vec::new(),
        }
    }

    /// Creates a checker with the standard rule set ([`RestSandwich`]).
    pub fn standard(max_plays: u32) -> Self {
        Self::new(max_plays).with_rule(RestSandwich)
    }

    /// Adds a pluggable rule.
    pub fn with_rule<R: ScheduleRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds already-shared rules (used by the search driver).
    pub fn with_shared_rules(mut self, rules: &[Arc<dyn ScheduleRule>]) -> Self {
        self.rules.extend(rules.iter().cloned());
        self
    }

    /// The configured per-station play cap.
    pub fn max_plays(&self) -> u32 {
        self.max_plays
    }

    /// Names of the configured rules.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Whether the candidate may legally extend the state.
    pub fn is_valid_next_round(&self, state: &ScheduleState, candidate: &Round) -> bool {
        if state.contains_round(candidate) {
            return false;
        }
        if candidate
            .competitions()
            .iter()
            .any(|p| state.seen_pairings().contains(p))
        {
            return false;
        }
        if let Some(last) = state.last_round() {
            if !last.is_allowed_next_round(candidate) {
                return false;
            }
        }
        if !self.rules.iter().all(|rule| rule.admits(state, candidate)) {
            return false;
        }
        !state.plays().would_exceed(candidate, self.max_plays)
    }
}
