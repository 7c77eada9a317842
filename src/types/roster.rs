use serde::{Deserialize, Serialize};

/// One-shot modifier a manager can play for a single gameweek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveChip {
    BenchBoost,
    TripleCaptain,
    Wildcard,
    FreeHit,
    /// Unknown chip identifier from upstream data; never affects scoring.
    #[serde(other)]
    Other,
}

/// A single (manager, gameweek, player) selection row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub manager_id: String,
    pub player_id: String,
    #[serde(default)]
    pub is_starting: bool,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
    #[serde(default)]
    pub active_chip: Option<ActiveChip>,
    #[serde(default)]
    pub bench_priority: Option<u32>,
    /// Legacy per-slot multiplier carried by the selection table.
    /// Scoring derives captaincy from chip state and never reads this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<u32>,
}

impl RosterSlot {
    pub fn has_chip(&self, chip: ActiveChip) -> bool {
        self.active_chip == Some(chip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_deserializes_with_defaults() {
        let slot: RosterSlot = serde_json::from_str(
            r#"{"manager_id":"m1","player_id":"p1","is_starting":true}"#,
        )
        .expect("slot should parse");
        assert!(slot.is_starting);
        assert!(!slot.is_captain);
        assert_eq!(slot.active_chip, None);
        assert_eq!(slot.bench_priority, None);
        assert_eq!(slot.multiplier, None);
    }

    #[test]
    fn unknown_chip_maps_to_other() {
        let slot: RosterSlot = serde_json::from_str(
            r#"{"manager_id":"m1","player_id":"p1","active_chip":"double_gameweek"}"#,
        )
        .expect("slot should parse");
        assert_eq!(slot.active_chip, Some(ActiveChip::Other));
        assert!(!slot.has_chip(ActiveChip::BenchBoost));
    }

    #[test]
    fn legacy_multiplier_is_preserved() {
        let slot: RosterSlot = serde_json::from_str(
            r#"{"manager_id":"m1","player_id":"p1","multiplier":2,"active_chip":"triple_captain"}"#,
        )
        .expect("slot should parse");
        assert_eq!(slot.multiplier, Some(2));
        assert!(slot.has_chip(ActiveChip::TripleCaptain));

        let rendered = serde_json::to_string(&slot).expect("slot should serialize");
        assert!(rendered.contains("\"multiplier\":2"));
    }
}
