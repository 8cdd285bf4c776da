//! Best-score persistence
//!
//! The best score is a single integer in a plain text file. Persistence is
//! best effort: a missing or corrupt file reads as 0 and a failed write is
//! dropped, so storage trouble never interrupts a game.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Where the best score is kept between runs
pub trait HighScoreStore {
    /// Stored best score, or 0 if there is none
    fn load(&self) -> u32;

    /// Overwrite the stored best score
    fn save(&mut self, score: u32);
}

/// Best score stored as decimal text in a file
#[derive(Debug, Clone)]
pub struct FileHighScores {
    path: PathBuf,
}

impl FileHighScores {
    /// Default file name, relative to the working directory
    pub const DEFAULT_FILE: &'static str = "highscore.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> io::Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(0);
        }
        text.parse::<u32>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

impl HighScoreStore for FileHighScores {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => {
                log::info!("Loaded best score {} from {}", score, self.path.display());
                score
            }
            Err(e) => {
                log::debug!("No best score at {} ({}), starting at 0", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        match self.write(score) {
            Ok(()) => log::info!("Best score {} saved", score),
            Err(e) => log::debug!("Best score not saved to {}: {}", self.path.display(), e),
        }
    }
}
