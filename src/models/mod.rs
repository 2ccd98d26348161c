//! Tournament scheduling domain models.
//!
//! Provides the core data types for representing multi-station tournament
//! problems and solutions.
//!
//! # Domain Mapping
//!
//! | station-schedule | Tournament |
//! |------------------|------------|
//! | Pairing | Two teams meeting at a station (or resting together) |
//! | Round | One time slot: every team at a station or in pause |
//! | TournamentSchedule | The full round sequence |
//! | TournamentConfig | Team list, target length, caps, forbidden pairings |

mod config;
mod pairing;
mod round;
mod schedule;

pub use config::{ForbiddenPairings, OrderingPolicy, SearchMode, TournamentConfig};
pub use pairing::Pairing;
pub use round::Round;
pub use schedule::{TournamentSchedule, Violation, ViolationType};
