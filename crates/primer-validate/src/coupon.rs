//! Coupon catalog and discount computation.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{Result, ValidationError};

/// A discount code paired with the fraction of the price it removes.
///
/// Invariants: `code` is non-empty and `0 < discount < 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coupon {
    code: String,
    discount: Decimal,
}

impl Coupon {
    /// Creates a coupon, rejecting blank codes and discounts outside `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoupon`] naming the broken invariant.
    pub fn new(code: impl Into<String>, discount: Decimal) -> Result<Self> {
        let code = code.into();

        if code.trim().is_empty() {
            return Err(ValidationError::InvalidCoupon {
                code,
                reason: "code must not be empty".to_string(),
            });
        }

        if discount <= Decimal::ZERO || discount >= Decimal::ONE {
            return Err(ValidationError::InvalidCoupon {
                code,
                reason: format!("discount {discount} must lie strictly between 0 and 1"),
            });
        }

        Ok(Self { code, discount })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Applies this coupon to `price`.
    pub fn apply(&self, price: Decimal) -> Decimal {
        price * (Decimal::ONE - self.discount)
    }
}

/// Ordered set of coupons, looked up by exact code.
///
/// Adding a coupon whose code already exists replaces the earlier entry in
/// place.
///
/// # Example
///
/// ```
/// use primer_validate::{Coupon, CouponCatalog};
/// use rust_decimal::Decimal;
///
/// let catalog = CouponCatalog::new()
///     .with_coupon(Coupon::new("HALF", Decimal::new(5, 1)).unwrap());
///
/// assert_eq!(catalog.get("HALF").unwrap().discount(), Decimal::new(5, 1));
/// assert!(catalog.get("half").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog: `SAVE10` (10% off) and `SAVE20` (20% off).
    pub fn standard() -> Self {
        Self {
            coupons: vec![
                Coupon {
                    code: "SAVE10".to_string(),
                    discount: Decimal::new(1, 1),
                },
                Coupon {
                    code: "SAVE20".to_string(),
                    discount: Decimal::new(2, 1),
                },
            ],
        }
    }

    /// Adds a coupon. Builder method; an existing code is replaced.
    pub fn with_coupon(mut self, coupon: Coupon) -> Self {
        self.insert(coupon);
        self
    }

    /// Adds a coupon, replacing any existing coupon with the same code.
    pub fn insert(&mut self, coupon: Coupon) {
        match self.coupons.iter_mut().find(|c| c.code == coupon.code) {
            Some(existing) => *existing = coupon,
            None => self.coupons.push(coupon),
        }
    }

    /// Looks up a coupon by exact, case-sensitive code.
    pub fn get(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|c| c.code == code)
    }

    /// All coupons in insertion order.
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl FromIterator<Coupon> for CouponCatalog {
    fn from_iter<I: IntoIterator<Item = Coupon>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for coupon in iter {
            catalog.insert(coupon);
        }
        catalog
    }
}

/// Returns `price` reduced by the coupon matching `code`.
///
/// An unknown code is not an error: the price comes back unchanged.
///
/// # Errors
///
/// - [`ValidationError::InvalidPrice`] if `price <= 0`
/// - [`ValidationError::InvalidDiscountCode`] if `code` is blank
pub fn calculate_discount(catalog: &CouponCatalog, price: Decimal, code: &str) -> Result<Decimal> {
    if price <= Decimal::ZERO {
        warn!(%price, "rejected non-positive price");
        return Err(ValidationError::InvalidPrice(price));
    }

    if code.trim().is_empty() {
        warn!("rejected blank discount code");
        return Err(ValidationError::InvalidDiscountCode);
    }

    match catalog.get(code) {
        Some(coupon) => {
            let discounted = coupon.apply(price);
            debug!(code, %price, %discounted, "coupon applied");
            Ok(discounted)
        }
        None => {
            debug!(code, "unknown coupon code, price unchanged");
            Ok(price)
        }
    }
}
