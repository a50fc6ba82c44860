// src/system.rs

//! A module specifying the shared interface for rational transfer function blocks.
//! It includes the numeric bound used by every block, a configuration structure
//! for coefficient arithmetic, and a trait exposing numerator and denominator
//! access so blocks can be combined without knowing their concrete type.

use crate::error::{Result, TransferFunctionError};
use crate::poly;
use crate::transfer_function::TransferFunction;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Neg;
use num_traits::{Float, Num};

/// Custom trait to encapsulate base number requirements.
pub trait Number: Num + Copy + PartialOrd + Neg<Output = Self> + Debug {
    /// Absolute value for generic signed values.
    fn magnitude(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }

    /// Checks whether the value is within `tolerance` of zero.
    fn is_negligible(self, tolerance: Self) -> bool {
        self.magnitude() <= tolerance
    }
}

impl<T: Num + Copy + PartialOrd + Neg<Output = T> + Debug> Number for T {}

/// Configuration for coefficient arithmetic on transfer functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArithmeticConfig<T: Number> {
    /// Coefficients whose magnitude does not exceed this value are treated as
    /// zero while cancelling common factors.
    pub tolerance: T,
    /// Cancel common numerator and denominator factors where an operation
    /// offers reduction.
    pub reduce: bool,
    /// Scale reduced results so the leading denominator coefficient is one.
    pub normalize: bool,
}

impl<T: Number> ArithmeticConfig<T> {
    /// Creates a new configuration with exact zero tests, reduction and
    /// normalization enabled.
    ///
    /// Example Usage
    /// ```
    /// use control_blocks::{ArithmeticConfig, TransferFunction};
    ///
    /// let mut config = ArithmeticConfig::<f64>::new();
    ///
    /// // Treat tiny remainders as zero when cancelling common factors.
    /// config.tolerance = 1e-9;
    ///
    /// // (2s + 2) / (2s^2 + 4s + 2) shares the factor (s + 1).
    /// let tf = TransferFunction::new(vec![2.0, 2.0], vec![2.0, 4.0, 2.0]).unwrap();
    /// let reduced = tf.reduce(&config);
    ///
    /// assert_eq!(reduced.num(), &[1.0]);
    /// assert_eq!(reduced.den(), &[1.0, 1.0]);
    /// ```
    pub fn new() -> Self {
        Self {
            tolerance: T::zero(),
            reduce: true,
            normalize: true,
        }
    }
}

impl<T: Number + Float> ArithmeticConfig<T> {
    /// Creates a configuration whose tolerance is the square root of machine epsilon.
    pub fn with_float_tolerance() -> Self {
        Self {
            tolerance: T::epsilon().sqrt(),
            ..Self::new()
        }
    }
}

/// A trait for blocks that can be described by a rational transfer function.
pub trait Rational<T: Number> {
    /// Numerator coefficients in descending power order.
    fn numerator(&self) -> &[T];

    /// Denominator coefficients in descending power order.
    fn denominator(&self) -> &[T];

    /// Copies the block into a standalone transfer function, rejecting empty
    /// coefficient lists and a zero denominator.
    fn to_transfer_function(&self) -> Result<TransferFunction<T>> {
        TransferFunction::new(
            Vec::from(self.numerator()),
            Vec::from(self.denominator()),
        )
    }
}

/// Checks that a block describes a well formed transfer function.
pub(crate) fn validate<T, R>(block: &R) -> Result<()>
where
    T: Number,
    R: Rational<T> + ?Sized,
{
    if block.numerator().is_empty() {
        return Err(TransferFunctionError::EmptyNumerator);
    }
    if block.denominator().is_empty() {
        return Err(TransferFunctionError::EmptyDenominator);
    }
    if poly::is_zero(block.denominator()) {
        return Err(TransferFunctionError::ZeroDenominator);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    /// Test magnitude for negative, zero and positive values.
    #[test]
    fn test_number_magnitude() {
        assert!(value_close(2.5, (-2.5_f64).magnitude()));
        assert!(value_close(0.0, 0.0_f64.magnitude()));
        assert!(value_close(3.0, 3.0_f64.magnitude()));
    }

    /// Test the tolerance check is inclusive of the boundary.
    #[test]
    fn test_number_is_negligible() {
        assert!(1e-10_f64.is_negligible(1e-9));
        assert!((-1e-9_f64).is_negligible(1e-9));
        assert!(!1e-3_f64.is_negligible(1e-9));
        assert!(!1e-12_f64.is_negligible(0.0));
    }

    /// Test the default configuration values.
    #[test]
    fn test_arithmetic_config_defaults() {
        let config = ArithmeticConfig::<f64>::new();
        assert!(
            value_close(0.0, config.tolerance),
            "Tolerance should default to zero."
        );
        assert!(config.reduce, "Reduction should default to enabled.");
        assert!(config.normalize, "Normalization should default to enabled.");

        let float_config = ArithmeticConfig::<f64>::with_float_tolerance();
        assert!(
            value_close(Float::sqrt(f64::EPSILON), float_config.tolerance),
            "Float tolerance should be the square root of epsilon."
        );
        assert!(float_config.reduce && float_config.normalize);
    }

    /// Test that the provided conversion copies both coefficient lists.
    #[test]
    fn test_rational_to_transfer_function() {
        struct Lag;
        impl Rational<f64> for Lag {
            fn numerator(&self) -> &[f64] {
                &[3.0]
            }
            fn denominator(&self) -> &[f64] {
                &[1.0, 3.0]
            }
        }

        let tf = Lag.to_transfer_function().unwrap();
        assert!(coefficients_close(&[3.0], tf.num()));
        assert!(coefficients_close(&[1.0, 3.0], tf.den()));
        assert_eq!(Ok(()), validate(&Lag));
    }

    /// Test that a block with a zero or empty denominator is rejected.
    #[test]
    fn test_rational_rejects_malformed_block() {
        struct Broken(&'static [f64], &'static [f64]);
        impl Rational<f64> for Broken {
            fn numerator(&self) -> &[f64] {
                self.0
            }
            fn denominator(&self) -> &[f64] {
                self.1
            }
        }

        let zero_den = Broken(&[1.0], &[0.0, 0.0]);
        assert_eq!(
            Err(TransferFunctionError::ZeroDenominator),
            zero_den.to_transfer_function()
        );
        assert_eq!(Err(TransferFunctionError::ZeroDenominator), validate(&zero_den));

        let empty_den = Broken(&[1.0], &[]);
        assert_eq!(
            Err(TransferFunctionError::EmptyDenominator),
            empty_den.to_transfer_function()
        );
        assert_eq!(Err(TransferFunctionError::EmptyDenominator), validate(&empty_den));

        let empty_num = Broken(&[], &[1.0]);
        assert_eq!(Err(TransferFunctionError::EmptyNumerator), validate(&empty_num));
    }
}
