use super::substitution::SubstitutionOutcome;
use crate::types::roster::{ActiveChip, RosterSlot};
use std::collections::HashSet;

pub fn bench_boost_active(rows: &[RosterSlot]) -> bool {
    rows.iter().any(|row| row.has_chip(ActiveChip::BenchBoost))
}

/// Player ids whose points count this gameweek, without duplicates.
///
/// Under bench boost the whole squad scores; otherwise only the effective
/// starting set does. Wildcard and free hit have no scoring effect.
pub fn scoring_set(rows: &[RosterSlot], outcome: &SubstitutionOutcome) -> Vec<String> {
    let candidates: Vec<&String> = if bench_boost_active(rows) {
        rows.iter().map(|row| &row.player_id).collect()
    } else {
        outcome.effective_starting.iter().collect()
    };

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
