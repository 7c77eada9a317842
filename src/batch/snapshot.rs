use crate::engine::{MetaByPlayer, StatsByPlayer};
use crate::error::{Result, ScoreError};
use crate::types::roster::RosterSlot;
use crate::types::stats::{PlayerMeta, PlayerObservedStat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Everything the scorer needs for one gameweek, already materialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameweekSnapshot {
    pub gameweek: u32,
    #[serde(default)]
    pub rosters: Vec<RosterSlot>,
    #[serde(default)]
    pub stats: Vec<PlayerObservedStat>,
    #[serde(default)]
    pub players: Vec<PlayerMeta>,
}

impl GameweekSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScoreError::SnapshotNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ScoreError::InvalidSnapshot(format!("{}: {}", path.display(), e)))
    }

    /// Stat lookup for this gameweek.
    ///
    /// Rows tagged with another gameweek are dropped. Several rows for the
    /// same player are merged: points add up and any participating row marks
    /// the player as having played.
    pub fn stats_by_player(&self) -> StatsByPlayer {
        let mut merged = StatsByPlayer::new();
        for stat in &self.stats {
            if let Some(gameweek) = stat.gameweek {
                if gameweek != self.gameweek {
                    tracing::warn!(
                        player = %stat.player_id,
                        stat_gameweek = gameweek,
                        snapshot_gameweek = self.gameweek,
                        "ignoring stat row from another gameweek"
                    );
                    continue;
                }
            }
            merged
                .entry(stat.player_id.clone())
                .and_modify(|existing: &mut PlayerObservedStat| {
                    existing.points = existing.points.saturating_add(stat.points);
                    existing.participated |= stat.participated;
                })
                .or_insert_with(|| PlayerObservedStat {
                    gameweek: Some(self.gameweek),
                    ..stat.clone()
                });
        }
        merged
    }

    pub fn meta_by_player(&self) -> MetaByPlayer {
        self.players
            .iter()
            .map(|player| (player.player_id.clone(), player.clone()))
            .collect()
    }

    /// Roster rows grouped per manager, managers in id order and rows in
    /// their original order.
    pub fn rosters_by_manager(&self) -> BTreeMap<String, Vec<RosterSlot>> {
        let mut grouped: BTreeMap<String, Vec<RosterSlot>> = BTreeMap::new();
        for row in &self.rosters {
            grouped
                .entry(row.manager_id.clone())
                .or_default()
                .push(row.clone());
        }
        grouped
    }
}
