use crate::batch::snapshot::GameweekSnapshot;
use crate::engine::position::Position;
use crate::types::report::Finding;
use std::collections::{BTreeSet, HashMap};

/// Report data problems that scoring tolerates silently.
///
/// Nothing here changes how a gameweek scores; the findings exist so upstream
/// data can be fixed.
pub fn lint_snapshot(snapshot: &GameweekSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();

    for player in &snapshot.players {
        let recognized = player
            .position
            .as_deref()
            .and_then(Position::parse_label)
            .is_some();
        if !recognized {
            findings.push(Finding {
                id: "players.unknown_position".to_string(),
                title: "Unrecognized position label".to_string(),
                body: format!(
                    "Player {} has position {:?}; it will be scored as MID.",
                    player.player_id,
                    player.position.as_deref().unwrap_or("")
                ),
                blocking: false,
                subject: Some(player.player_id.clone()),
            });
        }
    }

    let known: BTreeSet<&str> = snapshot
        .players
        .iter()
        .map(|player| player.player_id.as_str())
        .collect();
    let missing: BTreeSet<&str> = snapshot
        .rosters
        .iter()
        .map(|row| row.player_id.as_str())
        .filter(|id| !known.contains(id))
        .collect();
    for player_id in missing {
        findings.push(Finding {
            id: "players.missing_metadata".to_string(),
            title: "Rostered player without metadata".to_string(),
            body: format!(
                "Player {player_id} has no metadata row; it is excluded from substitution."
            ),
            blocking: false,
            subject: Some(player_id.to_string()),
        });
    }

    for (manager_id, rows) in snapshot.rosters_by_manager() {
        let captains: Vec<&str> = rows
            .iter()
            .filter(|row| row.is_captain)
            .map(|row| row.player_id.as_str())
            .collect();
        let vices: Vec<&str> = rows
            .iter()
            .filter(|row| row.is_vice_captain)
            .map(|row| row.player_id.as_str())
            .collect();

        if captains.is_empty() {
            findings.push(Finding {
                id: "roster.missing_captain".to_string(),
                title: "No captain selected".to_string(),
                body: format!("Manager {manager_id} has no captain; only a vice can be doubled."),
                blocking: false,
                subject: Some(manager_id.clone()),
            });
        }
        if captains.len() > 1 || vices.len() > 1 {
            findings.push(Finding {
                id: "roster.multiple_captains".to_string(),
                title: "More than one captain or vice-captain".to_string(),
                body: format!(
                    "Manager {manager_id} has {} captain(s) and {} vice-captain(s).",
                    captains.len(),
                    vices.len()
                ),
                blocking: true,
                subject: Some(manager_id.clone()),
            });
        }
        if captains.iter().any(|captain| vices.contains(captain)) {
            findings.push(Finding {
                id: "roster.captain_is_vice".to_string(),
                title: "Captain and vice-captain are the same player".to_string(),
                body: format!("Manager {manager_id} named one player as both captain and vice."),
                blocking: true,
                subject: Some(manager_id.clone()),
            });
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for row in &rows {
            *seen.entry(row.player_id.as_str()).or_default() += 1;
        }
        if seen.values().any(|count| *count > 1) {
            findings.push(Finding {
                id: "roster.duplicate_player".to_string(),
                title: "Player selected twice".to_string(),
                body: format!("Manager {manager_id} has duplicate roster rows for a player."),
                blocking: true,
                subject: Some(manager_id.clone()),
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(json: &str) -> GameweekSnapshot {
        serde_json::from_str(json).expect("snapshot should parse")
    }

    #[test]
    fn clean_snapshot_has_no_findings() {
        let snap = snapshot(
            r#"{
  "gameweek": 1,
  "rosters": [
    {"manager_id": "m", "player_id": "a", "is_starting": true, "is_captain": true},
    {"manager_id": "m", "player_id": "b", "is_starting": true, "is_vice_captain": true}
  ],
  "players": [
    {"player_id": "a", "position": "Goalkeeper"},
    {"player_id": "b", "position": "striker"}
  ]
}"#,
        );
        assert!(lint_snapshot(&snap).is_empty());
    }

    #[test]
    fn flags_unknown_positions_and_missing_metadata() {
        let snap = snapshot(
            r#"{
  "gameweek": 1,
  "rosters": [
    {"manager_id": "m", "player_id": "a", "is_captain": true},
    {"manager_id": "m", "player_id": "ghost"}
  ],
  "players": [
    {"player_id": "a", "position": "wing-back"},
    {"player_id": "z"}
  ]
}"#,
        );
        let findings = lint_snapshot(&snap);
        let unknown: Vec<_> = findings
            .iter()
            .filter(|finding| finding.id == "players.unknown_position")
            .collect();
        assert_eq!(unknown.len(), 2);
        assert!(findings.iter().any(|finding| finding.id == "players.missing_metadata"
            && finding.subject.as_deref() == Some("ghost")));
        assert!(findings.iter().all(|finding| !finding.blocking));
    }

    #[test]
    fn flags_captaincy_conflicts_as_blocking() {
        let snap = snapshot(
            r#"{
  "gameweek": 1,
  "rosters": [
    {"manager_id": "m", "player_id": "a", "is_captain": true, "is_vice_captain": true},
    {"manager_id": "m", "player_id": "b", "is_captain": true},
    {"manager_id": "n", "player_id": "c"}
  ],
  "players": [
    {"player_id": "a", "position": "MID"},
    {"player_id": "b", "position": "MID"},
    {"player_id": "c", "position": "MID"}
  ]
}"#,
        );
        let findings = lint_snapshot(&snap);
        assert!(findings
            .iter()
            .any(|finding| finding.id == "roster.captain_is_vice" && finding.blocking));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "roster.multiple_captains" && finding.blocking));
        assert!(findings.iter().any(|finding| finding.id == "roster.missing_captain"
            && finding.subject.as_deref() == Some("n")));
    }
}
