// Mining configuration
//
// Thresholds and execution knobs for one mining run. Values can come from a
// TOML file; missing keys fall back to the defaults below.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::apriori::MineOptions;
use crate::error::{check_min_confidence, check_min_support, MiningError};

/// Errors loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] MiningError),
}

/// Configuration for a mining run
///
/// # Example
/// ```
/// use basket::config::MiningConfig;
///
/// let config = MiningConfig::default();
/// assert_eq!(config.min_support, 0.04);
/// assert_eq!(config.min_confidence, 0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in, in (0, 1)
    ///
    /// Default: 0.04
    pub min_support: f64,

    /// Minimum rule confidence, in (0, 1]
    ///
    /// Default: 0.3
    pub min_confidence: f64,

    /// Count candidates and split itemsets on the rayon pool
    ///
    /// Default: false. Output is identical either way.
    pub parallel: bool,

    /// Wall-clock budget in milliseconds, checked between levels
    ///
    /// Default: none
    pub time_budget_ms: Option<u64>,

    /// Rows shown in the item frequency table
    ///
    /// Default: 20
    pub top_items: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.04,
            min_confidence: 0.3,
            parallel: false,
            time_budget_ms: None,
            top_items: 20,
        }
    }
}

impl MiningConfig {
    /// Fewer, stronger itemsets and rules
    pub fn strict() -> Self {
        Self {
            min_support: 0.10,
            min_confidence: 0.6,
            ..Self::default()
        }
    }

    /// Surface weak patterns too (slower on wide vocabularies)
    pub fn permissive() -> Self {
        Self {
            min_support: 0.01,
            min_confidence: 0.1,
            ..Self::default()
        }
    }

    /// Load from a TOML file and validate
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse TOML text and validate
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check both thresholds
    pub fn validate(&self) -> Result<(), MiningError> {
        check_min_support(self.min_support)?;
        check_min_confidence(self.min_confidence)?;
        Ok(())
    }

    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    pub fn mine_options(&self) -> MineOptions {
        MineOptions {
            parallel: self.parallel,
            time_budget: self.time_budget(),
        }
    }
}
