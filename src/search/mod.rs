//! Backtracking search and schedule quality metrics.
//!
//! `SearchDriver` assembles candidate rounds into complete schedules by
//! depth-first backtracking over an incrementally validated state.
//! `TournamentKpi` computes fairness metrics from a completed schedule.
//!
//! # Algorithm
//!
//! At each depth the driver iterates the shared candidate pool in the
//! configured order, appends each admissible round, recurses, and rolls the
//! state back before trying the next sibling. First-found mode propagates
//! success upward as an explicit sentinel instead of unwinding.
//!
//! # References
//!
//! - Knuth (1975), "Estimating the Efficiency of Backtrack Programs"
//! - Rasmussen & Trick (2008), "Round Robin Scheduling — a Survey"

mod driver;
mod kpi;

pub use driver::{SearchDriver, SearchReport, SearchStats, Termination};
pub use kpi::TournamentKpi;
