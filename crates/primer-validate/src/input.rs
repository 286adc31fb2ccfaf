//! User input predicates.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{FieldError, Result, ValidationError};

/// Accepted username length (in characters) for [`validate_user_input`].
pub const USER_INPUT_USERNAME_LEN: RangeInclusive<usize> = 4..=255;

/// Accepted age for [`validate_user_input`].
pub const USER_INPUT_AGE: RangeInclusive<u32> = 18..=100;

/// Accepted length (in characters) for [`is_valid_username`].
pub const USERNAME_LEN: RangeInclusive<usize> = 5..=15;

/// Minimum password length for [`is_strong_password`].
pub const PASSWORD_MIN_LEN: usize = 8;

/// Message returned when [`validate_user_input`] accepts its input.
pub const VALIDATION_SUCCESSFUL: &str = "Validation successful";

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}").expect("uppercase pattern compiles"));
static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Ll}").expect("lowercase pattern compiles"));
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern compiles"));

/// Validates a username/age pair.
///
/// Every failing field is reported, username before age.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUserInput`] listing the rejected fields.
pub fn validate_user_input(username: &str, age: u32) -> Result<&'static str> {
    let mut fields = Vec::new();

    if !USER_INPUT_USERNAME_LEN.contains(&username.chars().count()) {
        fields.push(FieldError::Username);
    }
    if !USER_INPUT_AGE.contains(&age) {
        fields.push(FieldError::Age);
    }

    if fields.is_empty() {
        Ok(VALIDATION_SUCCESSFUL)
    } else {
        debug!(?fields, "user input rejected");
        Err(ValidationError::InvalidUserInput { fields })
    }
}

/// Inclusive range check: `min <= price <= max`.
pub fn is_price_in_range<T: PartialOrd>(price: T, min: T, max: T) -> bool {
    price >= min && price <= max
}

/// Returns `true` if `name` is between 5 and 15 characters long.
pub fn is_valid_username(name: &str) -> bool {
    USERNAME_LEN.contains(&name.chars().count())
}

/// A strong password has at least 8 characters including an uppercase
/// letter, a lowercase letter and a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
        && UPPERCASE.is_match(password)
        && LOWERCASE.is_match(password)
        && DIGIT.is_match(password)
}
