//! Process configuration
//!
//! Read once at startup from `settings.json` in the working directory.
//! Missing files and missing fields fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::highscores::FileHighScores;
use crate::tuning::Tuning;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File holding the best score
    pub highscore_path: PathBuf,
    /// Frame-rate cap
    pub target_fps: u32,
    /// Fixed RNG seed; a fresh one per launch when unset
    pub seed: Option<u64>,

    // === HUD ===
    /// Show the "P to Pause" hint while playing
    pub show_pause_hint: bool,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(FileHighScores::DEFAULT_FILE),
            target_fps: 60,
            seed: None,
            show_pause_hint: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file name, relative to the working directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = fs::read_to_string(path) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed {}: {}", path.display(), e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Wall-clock budget for one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// RNG seed for this launch
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.target_fps, 60);
        assert_eq!(settings.highscore_path, PathBuf::from("highscore.txt"));
        assert!(settings.seed.is_none());
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            r#"{ "seed": 9, "tuning": { "gap_height": 300.0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.session_seed(), 9);
        assert_eq!(settings.tuning.gap_height, 300.0);
        assert_eq!(settings.tuning.obstacle_width, 78.0);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(Settings::load(&path).target_fps, 60);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path).target_fps, 60);

        fs::write(&path, r#"{ "target_fps": 30 }"#).unwrap();
        assert_eq!(Settings::load(&path).target_fps, 30);
    }

    #[test]
    fn test_frame_duration() {
        let settings = Settings {
            target_fps: 50,
            ..Settings::default()
        };
        assert_eq!(settings.frame_duration(), Duration::from_millis(20));

        let settings = Settings {
            target_fps: 0,
            ..Settings::default()
        };
        assert_eq!(settings.frame_duration(), Duration::from_secs(1));
    }
}
