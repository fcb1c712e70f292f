//! Three-tier event memory (hot, warm, cold) aged by insertion order.
//!
//! Every `add` appends to hot, then checks overflow exactly once per tier:
//! hot's oldest moves to warm, then warm's oldest moves to cold. An event
//! therefore moves at most one tier per `add`. Cold is never evicted.

use std::collections::VecDeque;

use anops_types::StandardEvent;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default hot tier capacity.
pub const DEFAULT_HOT_CAPACITY: usize = 5;
/// Default warm tier capacity.
pub const DEFAULT_WARM_CAPACITY: usize = 20;

/// Tier capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_hot_capacity")]
    pub hot_capacity: usize,
    #[serde(default = "default_warm_capacity")]
    pub warm_capacity: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            hot_capacity: DEFAULT_HOT_CAPACITY,
            warm_capacity: DEFAULT_WARM_CAPACITY,
        }
    }
}

fn default_hot_capacity() -> usize {
    DEFAULT_HOT_CAPACITY
}

fn default_warm_capacity() -> usize {
    DEFAULT_WARM_CAPACITY
}

/// The three memory tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryTier {
    Hot,
    Warm,
    Cold,
}

impl std::fmt::Display for MemoryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hot => write!(f, "hot"),
            Self::Warm => write!(f, "warm"),
            Self::Cold => write!(f, "cold"),
        }
    }
}

/// Tier sizes at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
}

impl MemoryStats {
    pub fn total(&self) -> usize {
        self.hot + self.warm + self.cold
    }
}

/// Bounded hot/warm tiers over an unbounded cold tier.
///
/// Single-owner state: mutate through `&mut self` only.
#[derive(Debug, Clone)]
pub struct TieredMemory {
    hot: VecDeque<StandardEvent>,
    warm: VecDeque<StandardEvent>,
    cold: VecDeque<StandardEvent>,
    config: MemoryConfig,
}

impl TieredMemory {
    /// Memory with the default 5/20 capacities.
    pub fn new() -> Self {
        Self::with_config(MemoryConfig::default())
    }

    /// Memory with custom capacities. Zero capacities are raised to 1.
    pub fn with_config(config: MemoryConfig) -> Self {
        let config = MemoryConfig {
            hot_capacity: config.hot_capacity.max(1),
            warm_capacity: config.warm_capacity.max(1),
        };
        Self {
            hot: VecDeque::with_capacity(config.hot_capacity + 1),
            warm: VecDeque::with_capacity(config.warm_capacity + 1),
            cold: VecDeque::new(),
            config,
        }
    }

    /// Append an event to hot and age the tiers by one step.
    pub fn add(&mut self, event: StandardEvent) {
        self.hot.push_back(event);

        if self.hot.len() > self.config.hot_capacity {
            if let Some(oldest) = self.hot.pop_front() {
                debug!(event_type = %oldest.event_type, "Demoted event hot -> warm");
                self.warm.push_back(oldest);
            }
        }

        if self.warm.len() > self.config.warm_capacity {
            if let Some(oldest) = self.warm.pop_front() {
                debug!(event_type = %oldest.event_type, "Demoted event warm -> cold");
                self.cold.push_back(oldest);
            }
        }
    }

    /// Hot tier, oldest first.
    pub fn hot(&self) -> &VecDeque<StandardEvent> {
        &self.hot
    }

    /// Warm tier, oldest first.
    pub fn warm(&self) -> &VecDeque<StandardEvent> {
        &self.warm
    }

    /// Cold tier, oldest first.
    pub fn cold(&self) -> &VecDeque<StandardEvent> {
        &self.cold
    }

    pub fn tier(&self, tier: MemoryTier) -> &VecDeque<StandardEvent> {
        match tier {
            MemoryTier::Hot => &self.hot,
            MemoryTier::Warm => &self.warm,
            MemoryTier::Cold => &self.cold,
        }
    }

    /// Hot + warm size: the context visible to intent extraction.
    pub fn context_size(&self) -> usize {
        self.hot.len() + self.warm.len()
    }

    /// Total events held across all tiers.
    pub fn len(&self) -> usize {
        self.hot.len() + self.warm.len() + self.cold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recently added event.
    pub fn latest(&self) -> Option<&StandardEvent> {
        self.hot.back()
    }

    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            hot: self.hot.len(),
            warm: self.warm.len(),
            cold: self.cold.len(),
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Drop every event in every tier.
    pub fn clear(&mut self) {
        self.hot.clear();
        self.warm.clear();
        self.cold.clear();
    }
}

impl Default for TieredMemory {
    fn default() -> Self {
        Self::new()
    }
}
