//! Configuration types for tax jurisdictions.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the tax jurisdiction.
///
/// Contains identifying information about the jurisdiction whose tax
/// rates the engine applies, including its name, currency, version, and
/// source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// ISO 4217 currency code for amounts under this jurisdiction.
    pub currency: String,
    /// The version or effective date of the rate schedule.
    pub version: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// Flat tax rates applied to bill items.
///
/// Every item that is not tax-included draws the primary rate; items in
/// the container category additionally draw the container surcharge on
/// top of the primary rate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TaxRates {
    /// The primary flat rate applied to all taxed items (e.g. 0.05 for 5%).
    pub primary: Decimal,
    /// The surcharge applied on top of the primary rate for container
    /// items (e.g. 0.07 for 7%).
    pub container_surcharge: Decimal,
}

impl Default for TaxRates {
    /// Returns the canonical GST + PST rate pair: 5% primary, 7% surcharge.
    fn default() -> Self {
        Self {
            primary: Decimal::new(5, 2),
            container_surcharge: Decimal::new(7, 2),
        }
    }
}

/// The complete tax configuration loaded from YAML files.
///
/// This struct aggregates the jurisdiction metadata and rate pair loaded
/// from a tax configuration directory.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// The flat rates applied to items under this jurisdiction.
    rates: TaxRates,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, rates: TaxRates) -> Self {
        Self { metadata, rates }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the tax rates.
    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }
}

impl Default for TaxConfig {
    /// Returns the canonical GST + PST configuration without touching the
    /// filesystem.
    fn default() -> Self {
        Self {
            metadata: JurisdictionMetadata {
                name: "British Columbia GST + PST".to_string(),
                currency: "CAD".to_string(),
                version: "2025-04-01".to_string(),
                source_url: "https://www2.gov.bc.ca/gov/content/taxes/sales-taxes".to_string(),
            },
            rates: TaxRates::default(),
        }
    }
}
