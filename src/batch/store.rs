use crate::error::{Result, ScoreError};
use crate::types::result::ManagerGameweekResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScore {
    pub manager_id: String,
    pub gameweek: u32,
    pub total_points: i32,
    pub scored_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: String,
    #[serde(default)]
    scores: Vec<StoredScore>,
    #[serde(default)]
    digests: BTreeMap<u32, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertSummary {
    pub gameweek: u32,
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Gameweek digest is identical to the one recorded before the upsert.
    pub digest_unchanged: bool,
    pub digest: String,
}

/// Weekly totals keyed uniquely by (manager, gameweek), persisted as JSON.
#[derive(Debug)]
pub struct ResultsStore {
    path: PathBuf,
    scores: BTreeMap<(u32, String), StoredScore>,
    digests: BTreeMap<u32, String>,
}

impl ResultsStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            scores: BTreeMap::new(),
            digests: BTreeMap::new(),
        };
        if !path.exists() {
            return Ok(store);
        }

        let content = fs::read_to_string(path)?;
        let file: StoreFile = serde_json::from_str(&content)
            .map_err(|e| ScoreError::Store(format!("{}: {}", path.display(), e)))?;
        for score in file.scores {
            store
                .scores
                .insert((score.gameweek, score.manager_id.clone()), score);
        }
        store.digests = file.digests;
        Ok(store)
    }

    pub fn get(&self, manager_id: &str, gameweek: u32) -> Option<&StoredScore> {
        self.scores.get(&(gameweek, manager_id.to_string()))
    }

    pub fn gameweek_rows(&self, gameweek: u32) -> Vec<&StoredScore> {
        self.scores
            .values()
            .filter(|score| score.gameweek == gameweek)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Upsert every result of one gameweek in memory. Call [`save`] to persist.
    ///
    /// A row whose total is unchanged keeps its original `scored_at`, so
    /// re-running an unchanged gameweek leaves the store byte-identical.
    ///
    /// [`save`]: ResultsStore::save
    pub fn upsert_gameweek(
        &mut self,
        gameweek: u32,
        results: &[ManagerGameweekResult],
    ) -> UpsertSummary {
        let now = Utc::now().to_rfc3339();
        let mut summary = UpsertSummary {
            gameweek,
            inserted: 0,
            updated: 0,
            unchanged: 0,
            digest_unchanged: false,
            digest: String::new(),
        };

        for result in results {
            let key = (gameweek, result.manager_id.clone());
            match self.scores.get_mut(&key) {
                Some(existing) if existing.total_points == result.total_points => {
                    summary.unchanged += 1;
                }
                Some(existing) => {
                    existing.total_points = result.total_points;
                    existing.scored_at = now.clone();
                    summary.updated += 1;
                }
                None => {
                    self.scores.insert(
                        key,
                        StoredScore {
                            manager_id: result.manager_id.clone(),
                            gameweek,
                            total_points: result.total_points,
                            scored_at: now.clone(),
                        },
                    );
                    summary.inserted += 1;
                }
            }
        }

        let digest = self.gameweek_digest(gameweek);
        summary.digest_unchanged = self.digests.get(&gameweek) == Some(&digest);
        self.digests.insert(gameweek, digest.clone());
        summary.digest = digest;
        summary
    }

    /// Persist the whole store: write a sibling temp file, then rename it
    /// over the target so readers never observe a partial write.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = StoreFile {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scores: self.scores.values().cloned().collect(),
            digests: self.digests.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ScoreError::Store(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::info!(path = %self.path.display(), rows = self.scores.len(), "results store saved");
        Ok(())
    }

    fn gameweek_digest(&self, gameweek: u32) -> String {
        let mut hasher = Sha256::new();
        for score in self.gameweek_rows(gameweek) {
            hasher.update(score.manager_id.as_bytes());
            hasher.update([0u8]);
            hasher.update(score.total_points.to_le_bytes());
        }
        let digest = hasher.finalize();
        format!("{digest:x}")
    }
}
