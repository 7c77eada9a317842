use super::substitution::SubstitutionOutcome;
use super::{participated, ScoringRules, StatsByPlayer};
use crate::types::result::CaptainActivation;
use crate::types::roster::{ActiveChip, RosterSlot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captaincy {
    pub activated: CaptainActivation,
    pub player_id: Option<String>,
    pub multiplier: i32,
}

pub fn captain_multiplier(rows: &[RosterSlot], rules: &ScoringRules) -> i32 {
    if rows.iter().any(|row| row.has_chip(ActiveChip::TripleCaptain)) {
        rules.triple_captain_multiplier
    } else {
        rules.captain_multiplier
    }
}

/// Pick who receives the multiplier: the captain if they are on the
/// effective pitch and played, else the vice under the same conditions.
/// Designations never transfer to an auto-substitute.
pub fn resolve_captaincy(
    rows: &[RosterSlot],
    outcome: &SubstitutionOutcome,
    stats: &StatsByPlayer,
    rules: &ScoringRules,
) -> Captaincy {
    let eligible = |row: &&RosterSlot| {
        outcome.contains(&row.player_id) && participated(stats, &row.player_id)
    };

    let captain = rows.iter().find(|row| row.is_captain).filter(eligible);
    let vice = rows.iter().find(|row| row.is_vice_captain).filter(eligible);

    let (activated, player_id) = match (captain, vice) {
        (Some(row), _) => (CaptainActivation::Captain, Some(row.player_id.clone())),
        (None, Some(row)) => (CaptainActivation::Vice, Some(row.player_id.clone())),
        (None, None) => (CaptainActivation::None, None),
    };

    Captaincy {
        activated,
        player_id,
        multiplier: captain_multiplier(rows, rules),
    }
}
