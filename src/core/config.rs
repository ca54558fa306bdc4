//! Evaluation tuning with documented constants
//!
//! The score bands and the milestone table are fixed game rules and live next
//! to the code that uses them. What is collected here are the knobs that turn
//! a foal's care history into the three evaluation components.

use crate::core::error::{FoalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for milestone evaluation components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    // === BOND MODIFIER ===
    /// Bonding levels at or above which the bond modifier steps up
    ///
    /// Four ascending thresholds map bonding 0-100 onto -2..=+2:
    /// below the first is -2, at or above the last is +2.
    pub bond_thresholds: [u8; 4],

    // === CARE QUALITY ===
    /// Stress levels at or below which care quality steps up
    ///
    /// Four ascending thresholds map stress 0-100 onto +2..=-2:
    /// at or below the first is +2, above the last is -2.
    pub stress_thresholds: [u8; 4],

    // === TASK CONSISTENCY ===
    /// Enrichment activities inside a milestone window needed per point
    ///
    /// At 2, a foal that was enriched six times during a seven-day
    /// window earns the full three points.
    pub activities_per_consistency_point: u32,

    /// Cap on the task consistency component
    pub max_task_consistency: u32,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            bond_thresholds: [20, 40, 60, 80],
            stress_thresholds: [20, 40, 60, 80],
            activities_per_consistency_point: 2,
            max_task_consistency: 3,
        }
    }
}

impl DevelopmentConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !is_ascending(&self.bond_thresholds) {
            return Err(FoalError::InvalidConfig(format!(
                "bond_thresholds must be strictly ascending, got {:?}",
                self.bond_thresholds
            )));
        }

        if !is_ascending(&self.stress_thresholds) {
            return Err(FoalError::InvalidConfig(format!(
                "stress_thresholds must be strictly ascending, got {:?}",
                self.stress_thresholds
            )));
        }

        if self.activities_per_consistency_point == 0 {
            return Err(FoalError::InvalidConfig(
                "activities_per_consistency_point must be positive".into(),
            ));
        }

        // Keeps the best possible score inside the -10..=10 scale
        if self.max_task_consistency > 6 {
            return Err(FoalError::InvalidConfig(format!(
                "max_task_consistency ({}) must be <= 6",
                self.max_task_consistency
            )));
        }

        Ok(())
    }
}

fn is_ascending(values: &[u8]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<DevelopmentConfig> = OnceLock::new();

/// Get the global development config (initializes with defaults if not set)
pub fn config() -> &'static DevelopmentConfig {
    CONFIG.get_or_init(DevelopmentConfig::default)
}

/// Set the global development config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DevelopmentConfig) -> std::result::Result<(), DevelopmentConfig> {
    CONFIG.set(config)
}
