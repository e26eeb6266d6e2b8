use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::log;

#[derive(Debug)]
pub enum ScoreError {
    Io(std::io::Error),
    Serialize(serde_yaml_ng::Error),
    Deserialize(serde_yaml_ng::Error),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::Io(e) => write!(f, "IO error: {}", e),
            ScoreError::Serialize(e) => write!(f, "Failed to serialize scores: {}", e),
            ScoreError::Deserialize(e) => write!(f, "Failed to parse score file: {}", e),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<std::io::Error> for ScoreError {
    fn from(e: std::io::Error) -> Self {
        ScoreError::Io(e)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub wins: u32,
}

/// Persistent win counters keyed by player name, stored as a YAML map. The
/// whole table is rewritten on every recorded win; it holds a handful of
/// entries at most.
pub struct ScoreStore {
    path: PathBuf,
    wins: HashMap<String, u32>,
}

impl ScoreStore {
    /// Loads the table from `path`, starting empty when the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScoreError> {
        let path = path.into();
        let wins = match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_yaml_ng::from_str(&content).map_err(ScoreError::Deserialize)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, wins })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Increments the winner's counter and persists the table. Blank names
    /// are ignored; draws are never passed in by the caller in the first
    /// place.
    pub fn record_win(&mut self, winner: &str) -> Result<(), ScoreError> {
        let name = winner.trim();
        if name.is_empty() {
            return Ok(());
        }

        let wins = self.wins.entry(name.to_string()).or_insert(0);
        *wins += 1;
        log!("{} now has {} win(s)", name, wins);
        self.save()
    }

    pub fn top_scores(&self, limit: usize) -> Vec<PlayerScore> {
        let mut scores: Vec<PlayerScore> = self
            .wins
            .iter()
            .map(|(name, wins)| PlayerScore {
                name: name.clone(),
                wins: *wins,
            })
            .collect();
        // Name as tiebreaker keeps the table stable between renders.
        scores.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
        scores.truncate(limit);
        scores
    }

    fn save(&self) -> Result<(), ScoreError> {
        let content = serde_yaml_ng::to_string(&self.wins).map_err(ScoreError::Serialize)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
