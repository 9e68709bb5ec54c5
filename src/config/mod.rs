//! Configuration loading and management for the Bill Settlement Engine.
//!
//! This module provides functionality to load tax configurations from YAML
//! files, covering the jurisdiction metadata and the flat rates applied to
//! bill items. Rates are an explicit configuration value rather than
//! module constants, so jurisdictions with different rates can be
//! supported without code changes.
//!
//! # Example
//!
//! ```no_run
//! use bill_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/gst_pst").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{JurisdictionMetadata, TaxConfig, TaxRates};
