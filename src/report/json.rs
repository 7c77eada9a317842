use crate::batch::GameweekRun;

pub fn to_json(run: &GameweekRun) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::RunSummary;
    use crate::types::result::{AutoSubRecord, CaptainActivation, ManagerGameweekResult};

    #[test]
    fn json_report_contains_results_and_summary() {
        let run = GameweekRun {
            summary: RunSummary {
                gameweek: 7,
                managers_scored: 1,
            },
            results: vec![ManagerGameweekResult {
                manager_id: "m1".to_string(),
                total_points: 55,
                auto_subs: vec![AutoSubRecord {
                    out_id: "a".to_string(),
                    in_id: "b".to_string(),
                    reason: "MID did not play, MID subbed on from bench".to_string(),
                }],
                captain_activated: CaptainActivation::Vice,
                bench_boost: false,
            }],
        };

        let rendered = to_json(&run).expect("json should serialize");
        assert!(rendered.contains("\"total_points\": 55"));
        assert!(rendered.contains("\"captain_activated\": \"vice\""));
        assert!(rendered.contains("\"managers_scored\": 1"));
    }
}
