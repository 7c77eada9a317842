//! Gameweek orchestration around the pure scorer: load snapshots, fan out
//! one computation per manager, and upsert the totals.

pub mod snapshot;
pub mod store;

use crate::engine::{compute_manager_score_with, ScoringRules};
use crate::error::{Result, ScoreError};
use crate::types::result::ManagerGameweekResult;
use rayon::prelude::*;
use serde::Serialize;
use snapshot::GameweekSnapshot;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use store::{ResultsStore, UpsertSummary};
use walkdir::WalkDir;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub gameweek: u32,
    pub managers_scored: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameweekRun {
    pub summary: RunSummary,
    /// One result per manager, ordered by manager id.
    pub results: Vec<ManagerGameweekResult>,
}

impl GameweekRun {
    /// Results ordered by total descending, ties broken by manager id.
    pub fn leaderboard(&self) -> Vec<&ManagerGameweekResult> {
        let mut ranked: Vec<_> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.manager_id.cmp(&b.manager_id))
        });
        ranked
    }
}

pub fn score_gameweek(snapshot: &GameweekSnapshot, rules: &ScoringRules) -> GameweekRun {
    let stats = snapshot.stats_by_player();
    let meta = snapshot.meta_by_player();
    let groups: Vec<_> = snapshot.rosters_by_manager().into_iter().collect();

    let results: Vec<ManagerGameweekResult> = groups
        .par_iter()
        .map(|(_, rows)| compute_manager_score_with(rules, rows, &stats, &meta))
        .collect();

    tracing::info!(
        gameweek = snapshot.gameweek,
        managers = results.len(),
        "gameweek scored"
    );

    GameweekRun {
        summary: RunSummary {
            gameweek: snapshot.gameweek,
            managers_scored: results.len(),
        },
        results,
    }
}

/// Snapshot files (`*.json`) under `dir`, in path order.
///
/// `exclude` (typically the results store) is skipped even when it lives
/// inside `dir`. Any traversal error aborts discovery.
pub fn discover_snapshots(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    let excluded = exclude.map(canonical_target);
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if excluded.as_deref() == Some(path.canonicalize()?.as_path()) {
            tracing::debug!(path = %path.display(), "skipping results store");
            continue;
        }
        paths.push(path.to_path_buf());
    }
    paths.sort();
    Ok(paths)
}

/// Canonical form of a path that may not exist yet.
fn canonical_target(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match (parent.unwrap_or(Path::new(".")).canonicalize(), path.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

/// Load and score every snapshot before touching the store, then write all
/// gameweeks in a single save. Any failure leaves the store untouched,
/// including two snapshots that carry the same gameweek.
pub fn finalize(
    snapshots: &[PathBuf],
    store_path: &Path,
    rules: &ScoringRules,
) -> Result<(Vec<GameweekRun>, Vec<UpsertSummary>)> {
    let loaded = snapshots
        .iter()
        .map(|path| GameweekSnapshot::load(path).map(|snapshot| (path, snapshot)))
        .collect::<Result<Vec<_>>>()?;

    let mut seen: BTreeMap<u32, &PathBuf> = BTreeMap::new();
    for (path, snapshot) in &loaded {
        if let Some(first) = seen.insert(snapshot.gameweek, *path) {
            return Err(ScoreError::InvalidSnapshot(format!(
                "gameweek {} appears in both {} and {}",
                snapshot.gameweek,
                first.display(),
                path.display()
            )));
        }
    }

    let runs: Vec<GameweekRun> = loaded
        .iter()
        .map(|(_, snapshot)| score_gameweek(snapshot, rules))
        .collect();

    let mut store = ResultsStore::open(store_path)?;
    let summaries = runs
        .iter()
        .map(|run| store.upsert_gameweek(run.summary.gameweek, &run.results))
        .collect();
    store.save()?;

    Ok((runs, summaries))
}
