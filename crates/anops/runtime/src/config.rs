//! Session configuration.
//!
//! Layered the same way as the daemon config: built-in defaults, then an
//! optional file (TOML, YAML or JSON), then `ANOPS_`-prefixed environment
//! variables. Nested keys use `__`, e.g. `ANOPS_MEMORY__HOT_CAPACITY=8`.

use anops_front::MemoryConfig;
use anops_metrics::{KpiProfile, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "ANOPS";

/// Main session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Memory tier capacities
    #[serde(default)]
    pub memory: MemoryConfig,

    /// KPI / KOI history size
    #[serde(default)]
    pub history: HistoryConfig,

    /// Simulated link characteristics
    #[serde(default)]
    pub kpi: KpiProfile,

    /// RNG seed for the generators; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reject unrecognized event types instead of falling back
    #[serde(default)]
    pub strict_categories: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            memory: MemoryConfig::default(),
            history: HistoryConfig::default(),
            kpi: KpiProfile::default(),
            seed: None,
            strict_categories: false,
        }
    }
}

/// History configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Snapshots kept per history
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl SessionConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&str>) -> PipelineResult<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// `ANOPS_`-prefixed environment source, `__` between nested keys.
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Like [`load`](Self::load) with an explicit environment source.
    pub fn load_with_env(path: Option<&str>, env: config::Environment) -> PipelineResult<Self> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&SessionConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(env);

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}
