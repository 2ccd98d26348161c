//! Input validation for tournament configurations.
//!
//! Checks structural integrity of a configuration before search. Detects:
//! - Non-positive target round counts
//! - Team lists too small to form a single station
//! - Duplicate team ids
//! - Pointless play caps
//! - Forbidden pairings referencing unknown stations or teams
//! - Forbidden pairings pairing a team with itself
//!
//! Every error is reported up front; nothing is discovered mid-recursion.

use crate::models::TournamentConfig;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Target round count is zero.
    ZeroTargetRounds,
    /// Fewer than three teams — not enough for one station plus a pause.
    TooFewTeams,
    /// Two entries in the seed list share a team id.
    DuplicateTeamId,
    /// The per-station play cap is zero, so no round could ever be played.
    ZeroPlayCap,
    /// A forbidden pairing names a station the configuration doesn't have.
    UnknownStation,
    /// A forbidden pairing names a team not in the seed list.
    UnknownTeam,
    /// A forbidden pairing pairs a team with itself.
    SelfPairing,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a tournament configuration.
///
/// Checks:
/// 1. Target round count is at least 1
/// 2. At least 3 teams (one station pairing plus a pause group)
/// 3. No duplicate team ids in the seed list
/// 4. Per-station play cap is at least 1
/// 5. Forbidden pairings reference existing stations
/// 6. Forbidden pairings pair two distinct teams
/// 7. Forbidden pairings reference known team ids
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &TournamentConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.target_rounds == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTargetRounds,
            "target round count must be at least 1",
        ));
    }

    if config.team_count() < 3 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!(
                "{} team(s) cannot form a station plus a pause group",
                config.team_count()
            ),
        ));
    }

    let mut team_ids = HashSet::new();
    for &team in &config.teams {
        if !team_ids.insert(team) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeamId,
                format!("Duplicate team id: {team}"),
            ));
        }
    }

    if config.max_plays_per_station == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroPlayCap,
            "per-station play cap must be at least 1",
        ));
    }

    let station_count = config.station_count();
    for (station, a, b) in config.forbidden.entries() {
        if station >= station_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStation,
                format!(
                    "forbidden pairing ({a},{b}) names station {station}, but only {station_count} exist"
                ),
            ));
        }
        if a == b {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPairing,
                format!("forbidden pairing at station {station} pairs team {a} with itself"),
            ));
        }
        let mut teams = vec![a];
        if b != a {
            teams.push(b);
        }
        for team in teams {
            if !team_ids.contains(&team) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeam,
                    format!("forbidden pairing ({a},{b}) references unknown team {team}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
