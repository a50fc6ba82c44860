// src/test_utils.rs

//! This module contains utilities for testing.

use crate::Number;

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f64 = 1e-9;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f64, value: f64) -> bool {
    (target - value).magnitude() < TEST_TOLERANCE
}

/// Checks if two floating point numbers are not close enough to be
/// considered equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` exceeds
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_not_close(target: f64, value: f64) -> bool {
    TEST_TOLERANCE <= (target - value).magnitude()
}

/// Checks if two coefficient lists have the same length and each pair of
/// coefficients is close enough to be considered equal.
///
/// # Arguments
/// * `target` - The expected coefficients, highest power first.
/// * `value` - The coefficients to compare against the target.
///
/// # Returns
/// `true` if the lengths match and every coefficient is close as per
/// `value_close`, otherwise `false`.
pub fn coefficients_close(target: &[f64], value: &[f64]) -> bool {
    target.len() == value.len()
        && target
            .iter()
            .zip(value.iter())
            .all(|(&t, &v)| value_close(t, v))
}
