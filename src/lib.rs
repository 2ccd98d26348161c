//! Multi-station tournament scheduling.
//!
//! Generates round-by-round tournament schedules for N teams over K
//! parallel competition stations plus a rest slot, such that every team
//! plays every station a bounded number of times, no two teams meet twice,
//! and no forbidden adjacency pattern occurs across consecutive rounds.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Pairing`, `Round`, `TournamentSchedule`,
//!   `TournamentConfig`, `ForbiddenPairings`, `Violation`
//! - **`validation`**: Configuration integrity checks (team ids, round
//!   counts, forbidden-pairing references)
//! - **`generator`**: Canonical round enumeration and static filtering
//! - **`state`**: Incremental schedule state with exact rollback
//! - **`checker`**: Round admissibility — hard invariants plus pluggable rules
//! - **`search`**: Depth-first backtracking driver and fairness KPIs
//!
//! # Example
//!
//! ```
//! use station_schedule::models::{TournamentConfig, SearchMode};
//! use station_schedule::search::SearchDriver;
//!
//! let config = TournamentConfig::new(4, 2).with_mode(SearchMode::Exhaustive);
//! let report = SearchDriver::new().run(&config).unwrap();
//! assert!(!report.schedules.is_empty());
//! ```
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Rasmussen & Trick (2008), "Round Robin Scheduling — a Survey"
//! - Mendelsohn & Rosa (1985), "One-Factorizations of the Complete Graph — A Survey"

pub mod checker;
pub mod generator;
pub mod models;
pub mod search;
pub mod state;
pub mod validation;
