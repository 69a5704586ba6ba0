//! User defaults, stored as `config.json` in the platform config directory.
//!
//! Every key is optional. A missing file means all defaults; a file that exists but
//! can't be parsed is an error rather than being silently ignored.

use anyhow::{Context, Result};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{Scenario, Strategy};

const CONFIG_JSON: &str = "config.json";
const DEFAULT_EXTRA_PAYMENT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monthly amount paid on top of the minimums.
    pub extra_payment: Decimal,
    pub strategy: Strategy,
    pub scenario: Scenario,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_payment: DEFAULT_EXTRA_PAYMENT,
            strategy: Strategy::default(),
            scenario: Scenario::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is None.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        if config.extra_payment < Decimal::ZERO {
            warn!(
                "Negative extra_payment '{}' in {} treated as 0",
                config.extra_payment,
                path.display()
            );
            config.extra_payment = Decimal::ZERO;
        }

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// `<config dir>/config.json`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "budgetplan", "BudgetPlan")
        .map(|dirs| dirs.config_dir().join(CONFIG_JSON))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
