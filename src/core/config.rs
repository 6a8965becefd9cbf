//! Session configuration with documented defaults
//!
//! Values can come from a TOML file (see `data/game.toml`) and are then
//! overridden by command-line flags in the binary.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SnakeError};
use crate::rules::{GameMode, MAX_SCORE};

/// Lowest allowed slowdown factor (no extra frame waits)
pub const MIN_SLOWDOWN: u8 = 0;
/// Highest allowed slowdown factor
pub const MAX_SLOWDOWN: u8 = 20;

/// Configuration for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === RULES ===
    /// Which rule set scores and terminates the session
    pub mode: GameMode,

    /// Lives per player in BattleRoyale
    ///
    /// Score in that mode is `max_lives - deaths`, and a player whose deaths
    /// reach this value can no longer spawn.
    pub max_lives: i32,

    /// Score that ends a ScoreAttack session
    pub max_score: i32,

    /// Session length for the timed modes (seconds)
    ///
    /// Survivor and KingOfTheHill end here. BattleRoyale does not end, it
    /// switches into sudden death instead.
    pub max_time_seconds: u64,

    // === PACING ===
    /// Extra frame waits inserted after every tick (0..=20)
    ///
    /// A pacing knob only. At 5 the game advances once every six frames.
    pub slowdown: u8,

    /// Duration of one frame in milliseconds
    pub frame_millis: u64,

    // === RANDOMNESS ===
    /// Seed for food placement; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::FreeForAll,
            max_lives: 3,
            max_score: 50,
            max_time_seconds: 180,
            slowdown: 5,
            frame_millis: 16,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_lives <= 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "max_lives ({}) must be positive",
                self.max_lives
            )));
        }

        if self.max_score <= 0 || self.max_score > MAX_SCORE {
            return Err(SnakeError::InvalidConfig(format!(
                "max_score ({}) must be in 1..={}",
                self.max_score, MAX_SCORE
            )));
        }

        if self.max_time_seconds == 0 {
            return Err(SnakeError::InvalidConfig(
                "max_time_seconds must be positive".into(),
            ));
        }

        if self.slowdown > MAX_SLOWDOWN {
            return Err(SnakeError::InvalidConfig(format!(
                "slowdown ({}) must be <= {}",
                self.slowdown, MAX_SLOWDOWN
            )));
        }

        if self.frame_millis == 0 {
            return Err(SnakeError::InvalidConfig("frame_millis must be positive".into()));
        }

        Ok(())
    }
}
