//! # primer-validate: input validation for `primer`
//!
//! Pure validation and pricing rules:
//! - Discounts ([`Coupon`], [`CouponCatalog`], [`calculate_discount`])
//! - User input ([`validate_user_input`], [`is_valid_username`],
//!   [`is_strong_password`], [`is_price_in_range`])
//! - Driving eligibility ([`DrivingAgeTable`], [`can_drive`])
//! - Product creation ([`create_product`])
//!
//! Lookup tables are ordinary values passed into the functions that need
//! them. `standard()` constructors provide the built-in tables; the `primer`
//! crate builds them from configuration instead.
//!
//! Every fallible check returns `Result`. The error's display text begins
//! with `Invalid ...` and names the rejected input.
//!
//! # Example
//!
//! ```
//! use primer_validate::{calculate_discount, can_drive, CouponCatalog, DrivingAgeTable};
//! use rust_decimal::Decimal;
//!
//! let catalog = CouponCatalog::standard();
//! let price = calculate_discount(&catalog, Decimal::from(10), "SAVE10").unwrap();
//! assert_eq!(price, Decimal::from(9));
//!
//! let table = DrivingAgeTable::standard();
//! assert_eq!(can_drive(&table, 16, "US"), Ok(true));
//! assert!(can_drive(&table, 16, "XX").is_err());
//! ```

mod coupon;
mod driving;
mod error;
mod input;
mod product;

pub use coupon::{Coupon, CouponCatalog, calculate_discount};
pub use driving::{DrivingAgeTable, can_drive};
pub use error::{FieldError, Result, ValidationError};
pub use input::{
    PASSWORD_MIN_LEN, USER_INPUT_AGE, USER_INPUT_USERNAME_LEN, USERNAME_LEN,
    VALIDATION_SUCCESSFUL, is_price_in_range, is_strong_password, is_valid_username,
    validate_user_input,
};
pub use product::{
    PRODUCT_PUBLISHED, Product, ProductError, ProductErrorCode, ProductInput, create_product,
};
