//! High score persistence
//!
//! The best score is a single integer stored as plain text. Loading never
//! fails: a missing, unreadable or garbled store counts as 0. Saving
//! overwrites the whole value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Somewhere the best score survives between runs
pub trait HighScoreStore {
    /// Stored best score, or 0 if there is none
    fn load(&self) -> u32;

    /// Replace the stored best score
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Plain text file holding the score in decimal
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for TextFileStore {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read high score {}: {e}", self.path.display());
                return 0;
            }
        };

        match text.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded high score {score}");
                score
            }
            Err(e) => {
                log::warn!("Ignoring unparsable high score {:?}: {e}", text.trim());
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string()).map_err(|source| Error::HighScoreWrite {
            path: self.path.clone(),
            source,
        })?;
        log::info!("High score {score} saved to {}", self.path.display());
        Ok(())
    }
}

/// In-process store; can be told to fail saves
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub score: Option<u32>,
    pub fail_saves: bool,
    /// Number of successful saves
    pub saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            score: Some(score),
            ..Default::default()
        }
    }

    /// A store whose every save fails
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Default::default()
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if self.fail_saves {
            return Err(Error::StoreUnavailable);
        }
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = TextFileStore::new(dir.path().join("high_score.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_garbage_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "twelve").unwrap();
        assert_eq!(TextFileStore::new(&path).load(), 0);

        fs::write(&path, "-4").unwrap();
        assert_eq!(TextFileStore::new(&path).load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        let mut store = TextFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());

        store.save(42).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");
        assert_eq!(store.load(), 42);

        store.save(7).unwrap();
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn test_load_tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.txt");
        fs::write(&path, "31\n").unwrap();
        assert_eq!(TextFileStore::new(&path).load(), 31);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TextFileStore::new(dir.path().join("nope").join("high_score.txt"));
        let err = store.save(3).unwrap_err();
        assert!(matches!(err, Error::HighScoreWrite { .. }));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::with_score(9);
        assert_eq!(store.load(), 9);
        store.save(11).unwrap();
        assert_eq!(store.load(), 11);
        assert_eq!(store.saves, 1);

        let mut failing = MemoryStore::failing();
        assert!(failing.save(1).is_err());
        assert_eq!(failing.load(), 0);
    }
}
