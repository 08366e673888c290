//! Runtime configuration loaded from TOML
//!
//! Every field has a default so a partial (or missing) config file is valid.

use crate::core::error::{Result, TierError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for tier resolution and attribute attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Where the tier definitions live (TOML, or JSON by extension)
    pub tiers_path: PathBuf,

    /// Minimum batch size before attribute attachment runs in parallel
    ///
    /// Below this threshold, thread overhead exceeds the cost of resolving
    /// each user, which is linear in the number of tiers.
    pub parallel_threshold: usize,

    /// Default `tracing` filter directive for the binary
    ///
    /// `RUST_LOG` takes precedence when set.
    pub log_filter: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tiers_path: PathBuf::from("data/tiers.toml"),
            parallel_threshold: 1000,
            log_filter: "tier_progress=info".to_string(),
        }
    }
}

impl ProgressConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ProgressConfig = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(TierError::InvalidConfig(
                "parallel_threshold must be at least 1".into(),
            ));
        }

        if self.tiers_path.as_os_str().is_empty() {
            return Err(TierError::InvalidConfig("tiers_path must not be empty".into()));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<ProgressConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static ProgressConfig {
    CONFIG.get_or_init(ProgressConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ProgressConfig) -> std::result::Result<(), ProgressConfig> {
    CONFIG.set(config)
}
