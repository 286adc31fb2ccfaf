//! Configuration management for primer
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. primer.local.toml (gitignored, local overrides, highest precedence)
//! 2. primer.toml (git-tracked, project config)
//! 3. ~/.config/primer/config.toml (user defaults)
//! 4. Built-in defaults (lowest precedence)
//!
//! Tables are arrays of TOML tables, so a source that defines one replaces
//! the whole list from lower-precedence sources:
//!
//! ```toml
//! [[discounts.coupons]]
//! code = "SAVE10"
//! discount = 0.1
//!
//! [[driving.countries]]
//! code = "US"
//! minimum_age = 16
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, Paths};

/// Oldest minimum driving age accepted by [`PrimerConfig::validate`].
pub const MAX_MINIMUM_AGE: u32 = 100;

/// Main primer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimerConfig {
    pub discounts: DiscountConfig,
    pub driving: DrivingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountConfig {
    pub coupons: Vec<CouponEntry>,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            coupons: vec![
                CouponEntry::new("SAVE10", Decimal::new(1, 1)),
                CouponEntry::new("SAVE20", Decimal::new(2, 1)),
            ],
        }
    }
}

/// Coupon definition from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponEntry {
    pub code: String,
    pub discount: Decimal,
}

impl CouponEntry {
    pub fn new(code: impl Into<String>, discount: Decimal) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrivingConfig {
    pub countries: Vec<CountryEntry>,
}

impl Default for DrivingConfig {
    fn default() -> Self {
        Self {
            countries: vec![CountryEntry::new("US", 16), CountryEntry::new("UK", 17)],
        }
    }
}

/// Country driving-age rule from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub code: String,
    pub minimum_age: u32,
}

impl CountryEntry {
    pub fn new(code: impl Into<String>, minimum_age: u32) -> Self {
        Self {
            code: code.into(),
            minimum_age,
        }
    }
}

impl PrimerConfig {
    /// Load configuration from default locations
    pub fn load() -> anyhow::Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, without layering, and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check table invariants
    ///
    /// Coupon codes must be non-empty and unique with a discount strictly
    /// between 0 and 1. Country codes must be non-empty and unique with a
    /// minimum age in `1..=100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for coupon in &self.discounts.coupons {
            let invalid = |reason: String| ConfigError::InvalidCoupon {
                code: coupon.code.clone(),
                reason,
            };
            if coupon.code.trim().is_empty() {
                return Err(invalid("code must not be empty".to_string()));
            }
            if coupon.discount <= Decimal::ZERO || coupon.discount >= Decimal::ONE {
                return Err(invalid(format!(
                    "discount {} outside (0, 1)",
                    coupon.discount
                )));
            }
            if !seen.insert(coupon.code.as_str()) {
                return Err(ConfigError::DuplicateEntry {
                    table: "coupon",
                    code: coupon.code.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for country in &self.driving.countries {
            let invalid = |reason: String| ConfigError::InvalidCountry {
                code: country.code.clone(),
                reason,
            };
            if country.code.trim().is_empty() {
                return Err(invalid("code must not be empty".to_string()));
            }
            if country.minimum_age == 0 || country.minimum_age > MAX_MINIMUM_AGE {
                return Err(invalid(format!(
                    "minimum age {} outside 1..={MAX_MINIMUM_AGE}",
                    country.minimum_age
                )));
            }
            if !seen.insert(country.code.as_str()) {
                return Err(ConfigError::DuplicateEntry {
                    table: "country",
                    code: country.code.clone(),
                });
            }
        }

        Ok(())
    }
}
