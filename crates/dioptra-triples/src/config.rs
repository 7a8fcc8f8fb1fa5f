//! Pipeline configuration, loadable from and savable to TOML.
//!
//! ```toml
//! halving = "strict"
//!
//! [params]
//! z = 3
//! max_n = 64
//! max_solutions_per_n = 8
//! iterations = 3
//!
//! [params.parallel]
//! parallel_threshold = 64
//! ```

use std::path::Path;

use dioptra_solve::SolveParams;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::recurrence::HalvingMode;

/// Everything one pipeline run needs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Halving policy for the triple formulas.
    #[serde(default)]
    pub halving: HalvingMode,
    /// Search and recurrence parameters.
    pub params: SolveParams,
}

impl PipelineConfig {
    /// Creates a configuration with the default halving policy.
    #[must_use]
    pub fn new(params: SolveParams) -> Self {
        Self {
            halving: HalvingMode::default(),
            params,
        }
    }

    /// Sets the halving policy.
    #[must_use]
    pub fn with_halving(mut self, halving: HalvingMode) -> Self {
        self.halving = halving;
        self
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or if
    /// the parameters are out of range.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] on malformed TOML or invalid parameters.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.params.validate()?;
        Ok(config)
    }

    /// Writes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if serialization or the write fails.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
