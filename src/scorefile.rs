//! Previous-score persistence
//!
//! A single integer in a text file, overwritten after every round and read
//! once at startup for the "previous score" display. This is a convenience
//! display, not a save game, so reading never fails: a missing or garbled
//! file counts as zero.

use std::io;
use std::path::{Path, PathBuf};

/// Handle on the score file location
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score; missing or garbled files count as zero
    pub fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!(
                        "Score file {} does not contain a number, treating as 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                log::warn!("Could not read score file {}: {err}", self.path.display());
                0
            }
        }
    }

    /// Overwrite the stored score
    pub fn save(&self, score: u32) -> io::Result<()> {
        std::fs::write(&self.path, score.to_string())
    }
}
