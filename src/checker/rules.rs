//! Built-in schedule rules.

use super::ScheduleRule;
use crate::models::Round;
use crate::state::ScheduleState;

/// Rest-sandwich rule.
///
/// A team must not be sent into the pause group right after being locked
/// into the final station's pairing in both of the two preceding rounds —
/// a fatigue pattern around the last station that the tournament hosts
/// consider unfair.
///
/// The rule applies only once two rounds exist. Its correct generalization
/// to other station counts or multiple pause slots is an open domain
/// question, which is why it is a pluggable rule rather than a hard check
/// in the engine: drop it with [`ValidityChecker::new`](super::ValidityChecker::new)
/// or replace it with a domain-confirmed variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestSandwich;

impl ScheduleRule for RestSandwich {
    fn name(&self) -> &'static str {
        "rest-sandwich"
    }

    fn admits(&self, state: &ScheduleState, candidate: &Round) -> bool {
        if state.round_count() < 2 {
            return true;
        }
        let Some(last_station) = candidate.station_count().checked_sub(1) else {
            return true;
        };
        let rounds = state.rounds();
        let prev1 = &rounds[rounds.len() - 1];
        let prev2 = &rounds[rounds.len() - 2];
        let (Some(p1), Some(p2)) = (
            prev1.competitions().get(last_station),
            prev2.competitions().get(last_station),
        ) else {
            return true;
        };
        !candidate
            .pause()
            .teams()
            .any(|team| p1.contains(team) && p2.contains(team))
    }

    fn description(&self) -> &'static str {
        "no rest immediately after two consecutive rounds at the final station"
    }
}
