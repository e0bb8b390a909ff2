use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::players::STARTING_MONEY;
use crate::types::BoardLayout;

pub const REQUIRED_DICE: usize = 2;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_money: u32,
    pub min_players: usize,
    pub max_players: usize,
    pub layout: BoardLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            layout: BoardLayout::Standard,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("player range {min}..={max} is empty")]
    EmptyPlayerRange { min: usize, max: usize },
    #[error("at least one player is required, got minimum {0}")]
    NoPlayers(usize),
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players == 0 {
            return Err(ConfigError::NoPlayers(self.min_players));
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::EmptyPlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }
}
