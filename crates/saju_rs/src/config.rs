//! Environment configuration.
//!
//! Loaded with the `config` crate from variables prefixed `SAJU`, nested
//! with `__`, after `dotenvy` picks up an optional `.env`:
//!
//! - `SAJU__SOLAR_TERMS_PATH=data/solar_terms.json`
//! - `SAJU__HARMONY_PRIORITY=six_first` (or `triple_first`)
//! - `SAJU__LUCK_PILLAR_COUNT=10`

use std::path::PathBuf;

use saju_base::HarmonyPriority;
use saju_search::{ChartConfig, DEFAULT_LUCK_PILLAR_COUNT, MAX_LUCK_PILLAR_COUNT};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SAJU";

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),
    #[error("required configuration missing: {0}")]
    MissingRequired(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Facade configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SajuConfig {
    /// Solar-term index JSON.
    #[serde(default)]
    pub solar_terms_path: Option<PathBuf>,
    #[serde(default)]
    pub harmony_priority: HarmonyPriority,
    #[serde(default = "default_luck_pillar_count")]
    pub luck_pillar_count: u8,
}

fn default_luck_pillar_count() -> u8 {
    DEFAULT_LUCK_PILLAR_COUNT
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            solar_terms_path: None,
            harmony_priority: HarmonyPriority::default(),
            luck_pillar_count: DEFAULT_LUCK_PILLAR_COUNT,
        }
    }
}

impl SajuConfig {
    /// Load from the environment (and `.env` if present).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_builder(config::Config::builder().add_source(
            config::Environment::with_prefix(ENV_PREFIX).separator("__"),
        ))
    }

    /// Load from a prepared builder; lets callers layer files or overrides.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Reject an empty path and an out-of-range luck count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .solar_terms_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid("solar_terms_path is empty"));
        }
        if self.luck_pillar_count == 0 || self.luck_pillar_count > MAX_LUCK_PILLAR_COUNT {
            return Err(ConfigError::Invalid("luck_pillar_count must be 1..=12"));
        }
        Ok(())
    }

    /// Index path, required for global initialization.
    pub fn require_solar_terms_path(&self) -> Result<&PathBuf, ConfigError> {
        self.solar_terms_path
            .as_ref()
            .ok_or(ConfigError::MissingRequired("SAJU__SOLAR_TERMS_PATH"))
    }

    /// Chart defaults derived from this configuration.
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            harmony_priority: self.harmony_priority,
            luck_pillar_count: self.luck_pillar_count,
            ..ChartConfig::default()
        }
    }
}
