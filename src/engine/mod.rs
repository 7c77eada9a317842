//! Pure per-manager gameweek scoring.
//!
//! Nothing in this module performs I/O: every function is a deterministic
//! computation over already-materialized roster, stat and metadata snapshots.

pub mod aggregate;
pub mod captaincy;
pub mod chips;
pub mod formation;
pub mod position;
pub mod substitution;

use crate::types::result::ManagerGameweekResult;
use crate::types::roster::RosterSlot;
use crate::types::stats::{PlayerMeta, PlayerObservedStat};
use formation::FormationRules;
use std::collections::HashMap;

pub type StatsByPlayer = HashMap<String, PlayerObservedStat>;
pub type MetaByPlayer = HashMap<String, PlayerMeta>;

/// Tunable constants of the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub captain_multiplier: i32,
    pub triple_captain_multiplier: i32,
    pub formation: FormationRules,
    /// Opt-in: also reject a candidate whose acceptance completes a
    /// starting set that falls outside the formation minima. Off by default,
    /// where only maxima are enforced.
    pub require_legal_completion: bool,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            captain_multiplier: 2,
            triple_captain_multiplier: 3,
            formation: FormationRules::default(),
            require_legal_completion: false,
        }
    }
}

/// A missing stat row means the player did not participate.
pub fn participated(stats: &StatsByPlayer, player_id: &str) -> bool {
    stats
        .get(player_id)
        .map(|stat| stat.participated)
        .unwrap_or(false)
}

pub fn observed_points(stats: &StatsByPlayer, player_id: &str) -> i32 {
    stats.get(player_id).map(|stat| stat.points).unwrap_or(0)
}

pub fn compute_manager_score(
    rows: &[RosterSlot],
    stats: &StatsByPlayer,
    meta: &MetaByPlayer,
) -> ManagerGameweekResult {
    compute_manager_score_with(&ScoringRules::default(), rows, stats, meta)
}

pub fn compute_manager_score_with(
    rules: &ScoringRules,
    rows: &[RosterSlot],
    stats: &StatsByPlayer,
    meta: &MetaByPlayer,
) -> ManagerGameweekResult {
    let manager_id = rows
        .first()
        .map(|row| row.manager_id.clone())
        .unwrap_or_default();

    let outcome = substitution::resolve_substitutions(rows, stats, meta, rules);
    let captaincy = captaincy::resolve_captaincy(rows, &outcome, stats, rules);
    let bench_boost = chips::bench_boost_active(rows);
    let scoring_set = chips::scoring_set(rows, &outcome);
    let total_points = aggregate::total_points(&scoring_set, stats, &captaincy);

    tracing::debug!(
        manager = %manager_id,
        total_points,
        subs = outcome.subs.len(),
        captain = captaincy.activated.as_str(),
        bench_boost,
        "manager scored"
    );

    ManagerGameweekResult {
        manager_id,
        total_points,
        auto_subs: outcome.subs,
        captain_activated: captaincy.activated,
        bench_boost,
    }
}
