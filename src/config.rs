use crate::game::board::validate_tile_count;
use crate::game::catalogue::{Catalogue, DEFAULT_IMAGE_LABELS};
use crate::game::shuffle::ShuffleStrategy;
use crate::{MemoryMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TILE_COUNT: usize = 16;
pub const DEFAULT_HIDE_DELAY_MS: u64 = 1000;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Everything a game engine is built from, apart from its RNG, clock and scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tile_count: usize,
    /// Raw label list; repeated labels are collapsed when the catalogue is built.
    pub catalogue: Vec<String>,
    /// How long a mismatched pair stays face up.
    pub hide_delay_ms: u64,
    /// Period of the elapsed-time refresh.
    pub tick_interval_ms: u64,
    pub shuffle: ShuffleStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            catalogue: DEFAULT_IMAGE_LABELS.iter().map(|s| s.to_string()).collect(),
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            shuffle: ShuffleStrategy::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded game config from {}", path.as_ref().display());
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hide_delay_ms == 0 {
            return Err(MemoryMatchError::Config(
                "hide_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(MemoryMatchError::Config(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        validate_tile_count(self.tile_count, &self.build_catalogue())
    }

    pub fn build_catalogue(&self) -> Catalogue {
        Catalogue::new(self.catalogue.iter().cloned())
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
