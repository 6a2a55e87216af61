//! Remaining-time to search-depth mapping.
//!
//! A step function over the remaining match budget: each tier grants its
//! depth when strictly more than its threshold remains, so a boundary value
//! falls to the next (shallower) tier.

use std::time::Duration;

use crate::config::{AgentConfig, DepthTier};

#[derive(Debug, Clone, PartialEq)]
pub struct DepthScheduler {
    tiers: Vec<DepthTier>,
    fallback_depth: u32,
}

impl DepthScheduler {
    /// Builds a scheduler from tiers ordered by descending threshold.
    pub fn new(tiers: Vec<DepthTier>, fallback_depth: u32) -> Self {
        DepthScheduler {
            tiers,
            fallback_depth: fallback_depth.max(1),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.depth_tiers.clone(), config.fallback_depth)
    }

    /// Returns the search depth allowed with `remaining` budget left.
    pub fn select_depth(&self, remaining: Duration) -> u32 {
        let secs = remaining.as_secs_f64();
        self.tiers
            .iter()
            .find(|tier| secs > tier.threshold_secs)
            .map_or(self.fallback_depth, |tier| tier.depth.max(1))
    }
}

impl Default for DepthScheduler {
    fn default() -> Self {
        Self::from_config(&AgentConfig::default())
    }
}
