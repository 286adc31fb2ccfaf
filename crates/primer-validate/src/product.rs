//! Product creation from loosely-typed input.

use std::fmt::{self, Display};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

/// Message attached to a successfully created product.
pub const PRODUCT_PUBLISHED: &str = "Product was successfully published";

/// Raw product fields as submitted. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

/// A product that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Decimal,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn message(&self) -> &'static str {
        PRODUCT_PUBLISHED
    }
}

/// Machine-readable reason a product was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductErrorCode {
    InvalidName,
    InvalidPrice,
}

impl ProductErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidPrice => "invalid_price",
        }
    }
}

impl Display for ProductErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection carrying both a code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ProductError {
    pub code: ProductErrorCode,
    pub message: String,
}

impl ProductError {
    fn new(code: ProductErrorCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
        }
    }
}

/// Validates `input` and builds a [`Product`].
///
/// The name is checked before the price, so input missing both reports
/// [`ProductErrorCode::InvalidName`].
///
/// # Errors
///
/// - `invalid_name` / "Name is missing" for an absent or blank name
/// - `invalid_price` / "Price is missing" for an absent or non-positive price
pub fn create_product(input: ProductInput) -> Result<Product, ProductError> {
    let name = match input.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => {
            warn!("product rejected: missing name");
            return Err(ProductError::new(
                ProductErrorCode::InvalidName,
                "Name is missing",
            ));
        }
    };

    let price = match input.price {
        Some(price) if price > Decimal::ZERO => price,
        _ => {
            warn!(name = %name, "product rejected: missing price");
            return Err(ProductError::new(
                ProductErrorCode::InvalidPrice,
                "Price is missing",
            ));
        }
    };

    info!(name = %name, %price, "product created");
    Ok(Product { name, price })
}
