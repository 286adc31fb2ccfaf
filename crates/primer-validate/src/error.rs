//! Validation error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the validators in this crate.
///
/// The display text of each variant starts with `Invalid ...` so that a
/// rendered message still identifies the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Price was zero or negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    /// Discount code was blank.
    #[error("Invalid discount code")]
    InvalidDiscountCode,

    /// One or more user-input fields failed validation.
    #[error("{}", join_fields(.fields))]
    InvalidUserInput { fields: Vec<FieldError> },

    /// Country code is not present in the driving-age table.
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Coupon definition rejected at construction.
    #[error("Invalid coupon {code:?}: {reason}")]
    InvalidCoupon { code: String, reason: String },
}

/// A single rejected user-input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid username")]
    Username,

    #[error("Invalid age")]
    Age,
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
