//! Concrete `StatsStore`s

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::text::{decode, encode};
use super::{PersistenceError, StatsStore};
use crate::stats::LifetimeStats;

/// Default stats file name
pub const STATS_FILE: &str = "stats.txt";

/// Stats kept in a text file. Writes go to a sibling temp file first and
/// are renamed into place so a crash never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl Default for FileStatsStore {
    fn default() -> Self {
        Self::new(STATS_FILE)
    }
}

impl StatsStore for FileStatsStore {
    fn load(&mut self) -> Result<Option<LifetimeStats>, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stats = decode(&text)?;
        log::info!("Loaded stats from {} ({} games)", self.path.display(), stats.games_played);
        Ok(Some(stats))
    }

    fn save(&mut self, stats: &LifetimeStats) -> Result<(), PersistenceError> {
        let tmp = self.tmp_path();
        fs::write(&tmp, encode(stats))?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Stats saved to {}", self.path.display());
        Ok(())
    }
}

/// Stats kept in memory, in the same text format as the file store
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore {
    text: Option<String>,
}

impl MemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store primed with raw text, for exercising the decoder
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&mut self) -> Result<Option<LifetimeStats>, PersistenceError> {
        self.text.as_deref().map(decode).transpose()
    }

    fn save(&mut self, stats: &LifetimeStats) -> Result<(), PersistenceError> {
        self.text = Some(encode(stats));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LifetimeStats {
        LifetimeStats {
            high_score: 90,
            games_played: 1,
            shots_fired: 12,
            shots_hit: 7,
            top_hit_percent: 58,
            kills_by_type: [4, 1, 0, 1, 0],
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStatsStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert!(store.text().unwrap().ends_with("4,1,0,1,0\n"));
    }

    #[test]
    fn test_corrupt_text_falls_back_to_default() {
        let mut store = MemoryStatsStore::with_text("garbage");
        assert!(store.load().is_err());
        assert_eq!(store.load_or_default(), LifetimeStats::default());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("mob-volley-stats-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let mut store = FileStatsStore::new(dir.join(STATS_FILE));

        assert!(store.load().unwrap().is_none());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert!(store.path().exists());
        assert!(!store.tmp_path().exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
