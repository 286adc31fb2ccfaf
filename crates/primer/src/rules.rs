//! Validation tables assembled from configuration.

use std::path::Path;

use anyhow::Context;
use primer_config::PrimerConfig;
use primer_validate::{
    Coupon, CouponCatalog, DrivingAgeTable, Result, calculate_discount, can_drive,
};

use crate::RulesError;
use rust_decimal::Decimal;
use tracing::info;

/// The coupon catalog and driving-age table used by table-driven checks.
///
/// Build one with [`Rules::standard`] for the built-in tables or with
/// [`Rules::from_config`] / [`Rules::load_from_dir`] to honor `primer.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    coupons: CouponCatalog,
    driving: DrivingAgeTable,
}

impl Rules {
    /// Creates rules from explicit tables.
    pub fn new(coupons: CouponCatalog, driving: DrivingAgeTable) -> Self {
        Self { coupons, driving }
    }

    /// Built-in tables: `SAVE10`/`SAVE20` and `US` 16 / `UK` 17.
    pub fn standard() -> Self {
        Self::new(CouponCatalog::standard(), DrivingAgeTable::standard())
    }

    /// Converts configuration entries into validated tables.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Config`] when `config` fails
    /// [`PrimerConfig::validate`] (blank or duplicate codes, discounts outside
    /// `(0, 1)`, minimum ages outside `1..=100`), and
    /// [`RulesError::Validation`] if a coupon entry is still rejected by
    /// [`Coupon::new`].
    pub fn from_config(config: &PrimerConfig) -> std::result::Result<Self, RulesError> {
        config.validate()?;

        let coupons = config
            .discounts
            .coupons
            .iter()
            .map(|entry| Coupon::new(entry.code.clone(), entry.discount))
            .collect::<Result<CouponCatalog>>()?;

        let driving = config
            .driving
            .countries
            .iter()
            .fold(DrivingAgeTable::new(), |table, entry| {
                table.with_country(entry.code.clone(), entry.minimum_age)
            });

        info!(
            coupons = coupons.len(),
            countries = config.driving.countries.len(),
            "rules built from config"
        );

        Ok(Self::new(coupons, driving))
    }

    /// Loads layered configuration rooted at `project_dir` and builds rules.
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = PrimerConfig::load_from_dir(project_dir)?;
        Self::from_config(&config).context("Failed to build rules from configuration")
    }

    pub fn coupons(&self) -> &CouponCatalog {
        &self.coupons
    }

    pub fn driving_ages(&self) -> &DrivingAgeTable {
        &self.driving
    }

    /// [`calculate_discount`] against this rule set's catalog.
    pub fn calculate_discount(&self, price: Decimal, code: &str) -> Result<Decimal> {
        calculate_discount(&self.coupons, price, code)
    }

    /// [`can_drive`] against this rule set's driving-age table.
    pub fn can_drive(&self, age: u32, country_code: &str) -> Result<bool> {
        can_drive(&self.driving, age, country_code)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
