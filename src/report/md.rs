use crate::batch::GameweekRun;

pub fn to_markdown(run: &GameweekRun) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Gameweek {} Scores\n\n", run.summary.gameweek));
    output.push_str(&format!(
        "Managers scored: {}\n\n",
        run.summary.managers_scored
    ));

    output.push_str("## Leaderboard\n\n");
    if run.results.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Rank | Manager | Points | Captain | Bench boost | Auto-subs |\n");
        output.push_str("|---:|---|---:|---|---|---:|\n");
        for (index, result) in run.leaderboard().iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                index + 1,
                result.manager_id,
                result.total_points,
                result.captain_activated.as_str(),
                if result.bench_boost { "yes" } else { "no" },
                result.auto_subs.len()
            ));
        }
        output.push('\n');
    }

    output.push_str("## Auto-substitutions\n\n");
    let mut any = false;
    for result in &run.results {
        for sub in &result.auto_subs {
            any = true;
            output.push_str(&format!(
                "- {}: {} -> {} ({})\n",
                result.manager_id, sub.out_id, sub.in_id, sub.reason
            ));
        }
    }
    if !any {
        output.push_str("- none\n");
    }

    output
}
