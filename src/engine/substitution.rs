use super::formation::FormationCounts;
use super::position::Position;
use super::{participated, MetaByPlayer, ScoringRules, StatsByPlayer};
use crate::types::result::AutoSubRecord;
use crate::types::roster::RosterSlot;
use crate::types::stats::PlayerMeta;
use std::collections::{HashMap, HashSet};

/// Why a participating bench entry was passed over for an absentee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Goalkeepers only swap with goalkeepers.
    Goalkeeper,
    /// Restricted-category players only swap within their category.
    RestrictedCategory,
    /// Accepting would push the candidate's category over its maximum.
    FormationCap(Position),
    /// Accepting would complete a starting set that fails the formation bounds.
    IllegalCompletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRejection {
    pub absentee: String,
    pub candidate: String,
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionOutcome {
    /// Participating starters in roster order, then substitutes in acceptance order.
    pub effective_starting: Vec<String>,
    pub subs: Vec<AutoSubRecord>,
    pub rejections: Vec<SubRejection>,
}

impl SubstitutionOutcome {
    pub fn contains(&self, player_id: &str) -> bool {
        self.effective_starting.iter().any(|id| id == player_id)
    }
}

#[derive(Debug, Clone, Copy)]
struct Eligibility {
    position: Position,
    restricted: bool,
}

impl Eligibility {
    fn from_meta(meta: &PlayerMeta) -> Self {
        Self {
            position: Position::normalize(meta.position.as_deref()),
            restricted: meta.restricted,
        }
    }
}

/// Replace absent starters with participating bench entries.
///
/// Absentees are processed in roster order and the bench in ascending
/// priority (missing priority last). Category maxima are checked against the
/// running tally at the moment each candidate is considered, so an early
/// acceptance can never push a category over its cap.
pub fn resolve_substitutions(
    rows: &[RosterSlot],
    stats: &StatsByPlayer,
    meta: &MetaByPlayer,
    rules: &ScoringRules,
) -> SubstitutionOutcome {
    let starters: Vec<&RosterSlot> = rows.iter().filter(|row| row.is_starting).collect();
    let mut bench: Vec<&RosterSlot> = rows.iter().filter(|row| !row.is_starting).collect();
    bench.sort_by_key(|row| (row.bench_priority.is_none(), row.bench_priority));

    let profiles: HashMap<&str, Eligibility> = rows
        .iter()
        .filter_map(|row| {
            meta.get(&row.player_id)
                .map(|player| (row.player_id.as_str(), Eligibility::from_meta(player)))
        })
        .collect();

    let mut outcome = SubstitutionOutcome::default();
    let mut counts = FormationCounts::default();

    for starter in &starters {
        if participated(stats, &starter.player_id) {
            outcome.effective_starting.push(starter.player_id.clone());
            if let Some(profile) = profiles.get(starter.player_id.as_str()) {
                counts.add(profile.position);
            }
        }
    }

    let mut consumed: HashSet<&str> = HashSet::new();

    for starter in starters
        .iter()
        .filter(|starter| !participated(stats, &starter.player_id))
    {
        let Some(outgoing) = profiles.get(starter.player_id.as_str()).copied() else {
            tracing::debug!(
                player = %starter.player_id,
                "absent starter has no metadata, left unreplaced"
            );
            continue;
        };

        let mut accepted = None;
        for candidate in &bench {
            let candidate_id = candidate.player_id.as_str();
            if consumed.contains(candidate_id) || !participated(stats, candidate_id) {
                continue;
            }
            let Some(incoming) = profiles.get(candidate_id).copied() else {
                continue;
            };

            match check_candidate(outgoing, incoming, &counts, rules) {
                Ok(()) => {
                    accepted = Some((candidate_id, incoming));
                    break;
                }
                Err(reason) => outcome.rejections.push(SubRejection {
                    absentee: starter.player_id.clone(),
                    candidate: candidate.player_id.clone(),
                    reason,
                }),
            }
        }

        match accepted {
            Some((candidate_id, incoming)) => {
                consumed.insert(candidate_id);
                counts.add(incoming.position);
                outcome.effective_starting.push(candidate_id.to_string());
                tracing::debug!(
                    outgoing = %starter.player_id,
                    incoming = candidate_id,
                    "auto-substitution accepted"
                );
                outcome.subs.push(AutoSubRecord {
                    out_id: starter.player_id.clone(),
                    in_id: candidate_id.to_string(),
                    reason: format!(
                        "{} did not play, {} subbed on from bench",
                        outgoing.position, incoming.position
                    ),
                });
            }
            None => {
                tracing::debug!(
                    player = %starter.player_id,
                    "no eligible bench replacement"
                );
            }
        }
    }

    outcome
}

fn check_candidate(
    outgoing: Eligibility,
    incoming: Eligibility,
    counts: &FormationCounts,
    rules: &ScoringRules,
) -> Result<(), RejectionReason> {
    let out_is_keeper = outgoing.position == Position::Goalkeeper;
    let in_is_keeper = incoming.position == Position::Goalkeeper;
    if out_is_keeper != in_is_keeper {
        return Err(RejectionReason::Goalkeeper);
    }
    if outgoing.restricted != incoming.restricted {
        return Err(RejectionReason::RestrictedCategory);
    }
    if rules.formation.would_exceed_max(counts, incoming.position) {
        return Err(RejectionReason::FormationCap(incoming.position));
    }
    if rules.require_legal_completion {
        let mut next = *counts;
        next.add(incoming.position);
        if next.total() as usize == rules.formation.starting_size
            && !rules.formation.counts_are_legal(&next)
        {
            return Err(RejectionReason::IllegalCompletion);
        }
    }
    Ok(())
}
