use std::fs;
use std::path::Path;

use nsg_core::{ErrorInfo, NsgError};
use nsg_invariants::{InvariantOptions, DEFAULT_APERY_BOUND_FACTOR};
use serde::{Deserialize, Serialize};

/// Default multiple of the genus bounding the brute-force candidate universe.
pub const DEFAULT_CANDIDATE_BOUND_FACTOR: u64 = 5;

/// YAML-configurable heuristics shared by every search mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Apéry tables span `apery_bound_factor * period²`.
    #[serde(default = "default_apery_bound_factor")]
    pub apery_bound_factor: u64,
    /// Brute-force candidates are drawn from `[start, candidate_bound_factor * genus]`.
    #[serde(default = "default_candidate_bound_factor")]
    pub candidate_bound_factor: u64,
    /// Append `<g+1, ..., 2g+1>` to the brute-force results where applicable.
    #[serde(default = "default_include_extremal")]
    pub include_extremal: bool,
}

fn default_apery_bound_factor() -> u64 {
    DEFAULT_APERY_BOUND_FACTOR
}

fn default_candidate_bound_factor() -> u64 {
    DEFAULT_CANDIDATE_BOUND_FACTOR
}

fn default_include_extremal() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            apery_bound_factor: default_apery_bound_factor(),
            candidate_bound_factor: default_candidate_bound_factor(),
            include_extremal: default_include_extremal(),
        }
    }
}

impl SearchConfig {
    /// Parses a YAML document; missing fields take their defaults.
    pub fn from_yaml_str(raw: &str) -> Result<Self, NsgError> {
        let config: Self = serde_yaml::from_str(raw)
            .map_err(|err| NsgError::Config(ErrorInfo::new("config-parse", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, NsgError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            NsgError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Rejects factors that would make every search trivially empty.
    pub fn validate(&self) -> Result<(), NsgError> {
        if self.apery_bound_factor == 0 {
            return Err(NsgError::Config(
                ErrorInfo::new("invalid-factor", "apery_bound_factor must be positive")
                    .with_hint("the default is 2"),
            ));
        }
        if self.candidate_bound_factor == 0 {
            return Err(NsgError::Config(
                ErrorInfo::new("invalid-factor", "candidate_bound_factor must be positive")
                    .with_hint("the default is 5"),
            ));
        }
        Ok(())
    }

    /// Calculator options derived from this configuration.
    pub fn invariant_options(&self) -> InvariantOptions {
        InvariantOptions {
            apery_bound_factor: self.apery_bound_factor,
        }
    }
}
