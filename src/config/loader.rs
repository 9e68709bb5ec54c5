//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionMetadata, TaxConfig, TaxRates};

/// Loads and provides access to tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the jurisdiction metadata and tax rates.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gst_pst/
/// ├── jurisdiction.yaml  # Jurisdiction metadata
/// └── rates.yaml         # Primary rate and container surcharge
/// ```
///
/// # Example
///
/// ```no_run
/// use bill_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gst_pst").unwrap();
/// println!("Jurisdiction: {}", loader.jurisdiction().name);
/// println!("Primary rate: {}", loader.rates().primary);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/gst_pst")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bill_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/gst_pst")?;
    /// # Ok::<(), bill_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<TaxRates>(&rates_path)?;

        Ok(Self {
            config: TaxConfig::new(metadata, rates),
        })
    }

    /// Creates a loader carrying the canonical GST + PST configuration
    /// without reading any files.
    ///
    /// # Example
    ///
    /// ```
    /// use bill_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::with_default_rates();
    /// assert_eq!(loader.rates().primary, Decimal::new(5, 2));
    /// ```
    pub fn with_default_rates() -> Self {
        Self {
            config: TaxConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the tax rates.
    pub fn rates(&self) -> &TaxRates {
        self.config.rates()
    }
}
