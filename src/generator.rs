//! Canonical round generation and static filtering.
//!
//! Enumerates every structurally distinct round for a seed list of teams
//! by walking the full permutation space and collapsing to canonical form.
//! Team counts are small (≤ ~10), so exhaustive generation is cheap and
//! trivially correct; a smarter combinatorial construction would buy
//! nothing here.
//!
//! Pool sizes: N=4 → 6, N=5 → 30, N=6 → 90, N=8 → 2520, N=9 → 22680
//! (N! / 2^(pair slots)).

use itertools::Itertools;
use std::collections::HashSet;

use crate::models::{ForbiddenPairings, Round};

/// Enumerates all canonical rounds for the given seed list.
///
/// The output order is deterministic: first occurrence in the permutation
/// stream of the seed list. Every round contains each seed team exactly once.
pub fn generate_rounds(teams: &[u32]) -> Vec<Round> {
    let mut seen: HashSet<Round> = HashSet::new();
    let mut pool = Vec::new();
    for perm in teams.iter().copied().permutations(teams.len()) {
        let round = Round::from_permutation(&perm);
        if seen.insert(round.clone()) {
            pool.push(round);
        }
    }
    pool
}

/// Removes rounds containing a statically forbidden station pairing.
///
/// Independent of search state; applied once to shrink the branching
/// factor before the search begins. An empty forbidden set removes nothing.
pub fn filter_rounds(pool: Vec<Round>, forbidden: &ForbiddenPairings) -> Vec<Round> {
    if forbidden.is_empty() {
        return pool;
    }
    pool.into_iter()
        .filter(|round| {
            !round
                .competitions()
                .iter()
                .enumerate()
                .any(|(station, pairing)| forbidden.is_forbidden(station, pairing))
        })
        .collect()
}

/// Generates the candidate pool: canonical rounds minus forbidden ones.
pub fn candidate_pool(teams: &[u32], forbidden: &ForbiddenPairings) -> Vec<Round> {
    filter_rounds(generate_rounds(teams), forbidden)
}
