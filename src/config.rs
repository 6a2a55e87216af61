//! Agent configuration, loadable from JSON.
//!
//! Every tunable of the decision cycle lives here: the match-wide time
//! budget, the remaining-time → depth table and the formation weight.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default time budget for a whole match, in seconds.
pub const DEFAULT_TIME_BUDGET_SECS: f64 = 900.0;

/// Default weight applied to the formation differential.
pub const DEFAULT_DIVERCITE_BONUS: f64 = 5.0;

/// One row of the depth table: strictly more than `threshold_secs` of
/// remaining budget allows searching to `depth`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthTier {
    pub threshold_secs: f64,
    pub depth: u32,
}

impl DepthTier {
    pub const fn new(threshold_secs: f64, depth: u32) -> Self {
        DepthTier {
            threshold_secs,
            depth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub total_time_budget_secs: f64,
    /// Ordered by descending threshold.
    pub depth_tiers: Vec<DepthTier>,
    /// Depth used when no tier matches.
    pub fallback_depth: u32,
    pub divercite_bonus: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            total_time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            depth_tiers: vec![DepthTier::new(600.0, 3), DepthTier::new(300.0, 2)],
            fallback_depth: 1,
            divercite_bonus: DEFAULT_DIVERCITE_BONUS,
        }
    }
}

impl AgentConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// The match budget as a `Duration`.
    ///
    /// Never panics on unvalidated values: non-positive or NaN budgets map
    /// to zero and budgets too large for a `Duration` saturate.
    pub fn total_time_budget(&self) -> Duration {
        let secs = self.total_time_budget_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.total_time_budget_secs.is_finite() || self.total_time_budget_secs <= 0.0 {
            return Err(ConfigError::Validation(
                "total_time_budget_secs must be a positive number".into(),
            ));
        }
        if Duration::try_from_secs_f64(self.total_time_budget_secs).is_err() {
            return Err(ConfigError::Validation(format!(
                "total_time_budget_secs {} is too large",
                self.total_time_budget_secs
            )));
        }
        if self.fallback_depth == 0 {
            return Err(ConfigError::Validation(
                "fallback_depth must be >= 1".into(),
            ));
        }
        if !self.divercite_bonus.is_finite() {
            return Err(ConfigError::Validation(
                "divercite_bonus must be finite".into(),
            ));
        }
        for tier in &self.depth_tiers {
            if tier.depth == 0 {
                return Err(ConfigError::Validation(format!(
                    "depth tier at {}s has depth 0",
                    tier.threshold_secs
                )));
            }
            if !tier.threshold_secs.is_finite() || tier.threshold_secs < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "depth tier threshold {} must be a non-negative number",
                    tier.threshold_secs
                )));
            }
        }
        if self
            .depth_tiers
            .windows(2)
            .any(|w| w[0].threshold_secs <= w[1].threshold_secs)
        {
            return Err(ConfigError::Validation(
                "depth_tiers must be ordered by strictly descending threshold".into(),
            ));
        }
        Ok(())
    }
}
