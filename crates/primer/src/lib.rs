//! # Primer
//!
//! Small, independent helpers with thorough test suites.
//!
//! - **Stack**: [`Stack`] - LIFO container with explicit empty errors
//! - **Validation**: discounts, user input, passwords, driving age, products
//! - **Arithmetic**: [`max`], [`fizz_buzz`], [`average`], [`product`], [`factorial`]
//! - **Rules**: [`Rules`] - coupon and driving-age tables, from config or built-in
//! - **Fetch**: [`fetch_data`] - async stub resolving after a fixed delay
//!
//! # Quick Start
//!
//! ```
//! use primer::{Rules, Stack, is_strong_password};
//! use rust_decimal::Decimal;
//!
//! let rules = Rules::standard();
//! assert_eq!(
//!     rules.calculate_discount(Decimal::from(10), "SAVE10").unwrap(),
//!     Decimal::from(9)
//! );
//! assert_eq!(rules.can_drive(15, "US"), Ok(false));
//!
//! let mut stack = Stack::new();
//! stack.push("a");
//! assert_eq!(stack.pop(), Ok("a"));
//! assert!(stack.pop().is_err());
//!
//! assert!(is_strong_password("AkashGolui@123"));
//! ```

mod error;
mod fetch;
mod rules;

pub use error::RulesError;
pub use fetch::{FETCH_DELAY, fetch_data};
pub use rules::Rules;

// Re-export the stack
pub use primer_stack::{Stack, StackError};

// Re-export arithmetic helpers
pub use primer_arith::{average, factorial, fizz_buzz, max, product};

// Re-export validators
pub use primer_validate::{
    Coupon, CouponCatalog, DrivingAgeTable, FieldError, Product, ProductError, ProductErrorCode,
    ProductInput, ValidationError, calculate_discount, can_drive, create_product,
    is_price_in_range, is_strong_password, is_valid_username, validate_user_input,
};

// Re-export configuration
pub use primer_config::{ConfigError, ConfigLoader, PrimerConfig};
