//! Round admissibility checking.
//!
//! Provides the [`ValidityChecker`] that decides whether a candidate round
//! may extend the current schedule state, and a pluggable [`ScheduleRule`]
//! trait for adjacency patterns whose exact general form is a domain
//! decision rather than a hard invariant.
//!
//! # Usage
//!
//! ```
//! use station_schedule::checker::ValidityChecker;
//! use station_schedule::state::ScheduleState;
//! use station_schedule::models::Round;
//!
//! let checker = ValidityChecker::standard(2);
//! let state = ScheduleState::new(3);
//! let round = Round::from_permutation(&[1, 2, 3, 4, 5, 6, 7, 8]);
//! assert!(checker.is_valid_next_round(&state, &round));
//! ```

mod engine;
pub mod rules;

pub use engine::ValidityChecker;

use crate::models::Round;
use crate::state::ScheduleState;
use std::fmt::Debug;

/// A pluggable admissibility rule evaluated against the growing schedule.
///
/// The hard invariants (no repeated round, no repeated station pairing,
/// station/pause adjacency, play caps) are built into [`ValidityChecker`];
/// rules cover softer adjacency patterns that domain experts may want to
/// swap out or drop — see [`rules::RestSandwich`].
pub trait ScheduleRule: Send + Sync + Debug {
    /// Rule name (e.g., "rest-sandwich").
    fn name(&self) -> &'static str;

    /// Whether the candidate may extend the given state.
    fn admits(&self, state: &ScheduleState, candidate: &Round) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
