//! # Utilities
//!
//! Helper functions for algorithms.
use num_bigint::BigInt;
use num_traits::Signed;

/// Whether no value is strictly positive, ignoring the last one.
///
/// Used as the optimality test on an objective row, of which the last value is the right-hand side.
///
/// # Arguments
///
/// * `values` - Row to test. Zero counts as non-positive.
pub fn is_all_negative_but_last(values: &[BigInt]) -> bool {
    match values.split_last() {
        Some((_, init)) => init.iter().all(|value| !value.is_positive()),
        None => true,
    }
}

#[cfg(test)]
mod test {
    use num_bigint::BigInt;

    use crate::algorithm::utilities::is_all_negative_but_last;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    #[test]
    fn all_negative_but_last() {
        assert!(!is_all_negative_but_last(&ints(&[6, 4, 21, 3, 5])));
        assert!(!is_all_negative_but_last(&ints(&[6, -4, 21, 3, 5])));
        assert!(!is_all_negative_but_last(&ints(&[6, -4, -21, -3, 5])));
        assert!(is_all_negative_but_last(&ints(&[-6, -4, -21, 0, -3, 5])));
        assert!(is_all_negative_but_last(&ints(&[-6, -4, -21, 0, -3, -5])));
    }

    #[test]
    fn degenerate() {
        assert!(is_all_negative_but_last(&[]));
        assert!(is_all_negative_but_last(&ints(&[7])));
    }
}
