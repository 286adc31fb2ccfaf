//! Minimum driving age per country.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Result, ValidationError};

/// Maps country codes to the minimum legal driving age.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrivingAgeTable {
    minimum_ages: BTreeMap<String, u32>,
}

impl DrivingAgeTable {
    /// Creates an empty table. Every lookup fails until countries are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: `US` at 16, `UK` at 17.
    pub fn standard() -> Self {
        Self::new().with_country("US", 16).with_country("UK", 17)
    }

    /// Adds or replaces a country's minimum age.
    pub fn with_country(mut self, code: impl Into<String>, minimum_age: u32) -> Self {
        self.minimum_ages.insert(code.into(), minimum_age);
        self
    }

    /// Minimum driving age for `code`, if the country is known.
    pub fn minimum_age(&self, code: &str) -> Option<u32> {
        self.minimum_ages.get(code).copied()
    }

    /// Known country codes, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.minimum_ages.keys().map(String::as_str)
    }
}

/// Returns whether someone of `age` may drive in `country_code`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCountryCode`] for a code missing from
/// `table`.
pub fn can_drive(table: &DrivingAgeTable, age: u32, country_code: &str) -> Result<bool> {
    let minimum = table.minimum_age(country_code).ok_or_else(|| {
        warn!(country = %country_code, "unknown country code");
        ValidationError::InvalidCountryCode(country_code.to_string())
    })?;

    Ok(age >= minimum)
}
