use std::path::Path;

use crate::ai::RandomAgent;
use crate::error::ConfigError;
use crate::game::{GameMode, GameState, Player};

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Game mode for new rounds.
    pub mode: GameMode,
    /// Which seat the opponent chooser controls in single-player mode.
    pub computer_seat: Player,
    /// Fixed RNG seed for the opponent chooser; omit for OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            mode: GameMode::SinglePlayer,
            computer_seat: Player::Yellow,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Start a round with this configuration.
    pub fn new_game(&self) -> GameState {
        GameState::with_computer_seat(self.mode, self.computer_seat)
    }

    /// Build the opponent chooser: seeded when `seed` is set, otherwise
    /// from OS entropy.
    pub fn opponent(&self) -> RandomAgent {
        match self.seed {
            Some(seed) => RandomAgent::from_seed(seed),
            None => RandomAgent::new(),
        }
    }
}
