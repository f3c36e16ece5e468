//! Game settings and preferences
//!
//! Loaded from an optional JSON file, overridden by the CLI, then clamped to
//! sane bounds before the session starts.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::GameConfig;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Core game configuration
    pub game: GameConfig,
    /// Simulation speed in ticks per second
    pub ticks_per_second: u32,
    /// Where the previous score is kept
    pub score_file: PathBuf,
    /// Fixed seed; `None` draws one from the clock at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            score_file: PathBuf::from(DEFAULT_SCORE_FILE),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    ///
    /// A missing or malformed file is logged and ignored; the game always
    /// starts.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "Ignoring malformed settings file {}: {err}",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Could not read settings file {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values in place, logging every adjustment
    pub fn clamp(&mut self) {
        let tps = self
            .ticks_per_second
            .clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
        if tps != self.ticks_per_second {
            log::warn!(
                "ticks_per_second {} out of range, clamped to {tps}",
                self.ticks_per_second
            );
            self.ticks_per_second = tps;
        }

        let width = self.game.grid_width.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        if width != self.game.grid_width {
            log::warn!(
                "grid width {} out of range, clamped to {width}",
                self.game.grid_width
            );
            self.game.grid_width = width;
        }

        let height = self.game.grid_height.clamp(MIN_GRID_DIM, MAX_GRID_DIM);
        if height != self.game.grid_height {
            log::warn!(
                "grid height {} out of range, clamped to {height}",
                self.game.grid_height
            );
            self.game.grid_height = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ticks_per_second, 20);
        assert_eq!(settings.score_file, PathBuf::from("score.txt"));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.game.grid_width, 40);
    }

    #[test]
    fn test_clamp_pulls_values_into_range() {
        let mut settings = Settings {
            ticks_per_second: 1000,
            game: GameConfig::new(2, 10_000),
            ..Settings::default()
        };

        settings.clamp();
        assert_eq!(settings.ticks_per_second, 30);
        assert_eq!(settings.game.grid_width, 4);
        assert_eq!(settings.game.grid_height, 256);
    }

    #[test]
    fn test_clamp_leaves_valid_values_alone() {
        let mut settings = Settings {
            ticks_per_second: 5,
            ..Settings::default()
        };
        settings.clamp();
        assert_eq!(settings.ticks_per_second, 5);
        assert_eq!(settings.game.grid_width, 40);
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = Settings {
            seed: Some(99),
            game: GameConfig::new(24, 30),
            ..Settings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(99));
        assert_eq!(back.game.grid_width, 24);
        assert_eq!(back.ticks_per_second, settings.ticks_per_second);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let settings = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(settings.ticks_per_second, DEFAULT_TICKS_PER_SECOND);
    }
}
