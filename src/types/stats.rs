use serde::{Deserialize, Serialize};

/// Finalized per-gameweek performance for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerObservedStat {
    pub player_id: String,
    #[serde(default)]
    pub gameweek: Option<u32>,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub participated: bool,
}

/// Static player attributes needed for substitution eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMeta {
    pub player_id: String,
    /// Free-text position label as stored upstream.
    #[serde(default)]
    pub position: Option<String>,
    /// Quota category that may only be substituted within itself.
    #[serde(default)]
    pub restricted: bool,
}
