//! # primer-arith: arithmetic helpers
//!
//! Total functions over small numeric inputs. Inputs with no meaningful
//! answer (empty slices, negative factorials, overflow) return `None`
//! rather than a sentinel value.

/// Returns the larger of `a` and `b`, or `a` when they compare equal.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Classic FizzBuzz for a single number.
///
/// ```
/// assert_eq!(primer_arith::fizz_buzz(15), "FizzBuzz");
/// assert_eq!(primer_arith::fizz_buzz(8), "8");
/// ```
pub fn fizz_buzz(n: i64) -> String {
    let mut out = String::new();
    if n % 3 == 0 {
        out.push_str("Fizz");
    }
    if n % 5 == 0 {
        out.push_str("Buzz");
    }
    if out.is_empty() { n.to_string() } else { out }
}

/// Arithmetic mean of `values`, or `None` for an empty slice.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Product of `values`.
///
/// Returns `None` for an empty slice or when the product overflows `i64`.
pub fn product(values: &[i64]) -> Option<i64> {
    let (first, rest) = values.split_first()?;
    rest.iter().try_fold(*first, |acc, v| acc.checked_mul(*v))
}

/// `n!` for non-negative `n`.
///
/// Returns `None` for negative input and once the result no longer fits in
/// a `u64` (from `21!` on).
pub fn factorial(n: i64) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    (2..=n).try_fold(1u64, u64::checked_mul)
}
