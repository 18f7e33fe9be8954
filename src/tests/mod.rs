//! # Tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const PROBLEM_LITERAL_STRING`
//! * `fn problem()`
//! * `fn standard_form()`
//! * `fn optimal_tableau()`
use num_bigint::BigInt;
use num_rational::BigRational;

pub mod problem_4;

/// Tableau rows from small integers.
pub fn rows(values: &[&[i64]]) -> Vec<Vec<BigInt>> {
    values.iter()
        .map(|row| row.iter().copied().map(BigInt::from).collect())
        .collect()
}

/// Exact value `numerator / denominator`.
pub fn rational(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}

/// Exact values from small integers.
pub fn integers(values: &[i64]) -> Vec<BigRational> {
    values.iter().map(|&value| rational(value, 1)).collect()
}
