// src/transfer_function.rs

//! # Transfer Function Module
//!
//! This module provides the rational transfer function value type used by the
//! PID composer and the feedback transforms.
//!
//! A transfer function is a numerator/denominator pair of polynomial
//! coefficient vectors in descending power order:
//!
//! ```text
//! G(s) = (b[0] s^m + ... + b[m]) / (a[0] s^n + ... + a[n])
//! ```
//!
//! Values are immutable. Construction trims leading zero coefficients and
//! rejects an empty or zero denominator, so every `TransferFunction` is well
//! formed. Arithmetic never cancels common factors on its own; call
//! [`TransferFunction::reduce`] for that.

pub mod ops;

use crate::error::{Result, TransferFunctionError};
use crate::{poly, ArithmeticConfig, Number, Rational};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Rational transfer function of the Laplace variable `s`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction<T> {
    num: Vec<T>,
    den: Vec<T>,
}

impl<T: Number> TransferFunction<T> {
    /// Creates a transfer function from numerator and denominator coefficients
    /// in descending power order.
    ///
    /// Leading zeros are trimmed. Fails if either list is empty or the
    /// denominator is the zero polynomial.
    pub fn new(num: impl Into<Vec<T>>, den: impl Into<Vec<T>>) -> Result<Self> {
        let num = num.into();
        let den = den.into();
        if num.is_empty() {
            return Err(TransferFunctionError::EmptyNumerator);
        }
        if den.is_empty() {
            return Err(TransferFunctionError::EmptyDenominator);
        }
        if poly::is_zero(&den) {
            return Err(TransferFunctionError::ZeroDenominator);
        }
        Ok(Self::from_parts(num, den))
    }

    /// Builds a value whose denominator is already known to be non-zero.
    pub(crate) fn from_parts(num: Vec<T>, den: Vec<T>) -> Self {
        Self {
            num: poly::trim(&num),
            den: poly::trim(&den),
        }
    }

    /// Static gain `k/1`.
    pub fn gain(k: T) -> Self {
        Self {
            num: vec![k],
            den: vec![T::one()],
        }
    }

    /// The Laplace variable `s/1`, a pure differentiator.
    pub fn s() -> Self {
        Self {
            num: vec![T::one(), T::zero()],
            den: vec![T::one()],
        }
    }

    /// Pure integrator `1/s`.
    pub fn integrator() -> Self {
        Self {
            num: vec![T::one()],
            den: vec![T::one(), T::zero()],
        }
    }

    /// Numerator coefficients in descending power order.
    pub fn num(&self) -> &[T] {
        &self.num
    }

    /// Denominator coefficients in descending power order.
    pub fn den(&self) -> &[T] {
        &self.den
    }

    /// Consumes the transfer function, returning `(numerator, denominator)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.num, self.den)
    }

    /// Degree of the numerator polynomial.
    pub fn num_degree(&self) -> usize {
        poly::degree(&self.num)
    }

    /// Degree of the denominator polynomial.
    pub fn den_degree(&self) -> usize {
        poly::degree(&self.den)
    }

    /// System order, the degree of the denominator.
    pub fn order(&self) -> usize {
        self.den_degree()
    }

    /// A transfer function is proper when the numerator degree does not
    /// exceed the denominator degree.
    pub fn is_proper(&self) -> bool {
        self.num_degree() <= self.den_degree()
    }

    /// Checks whether this is the zero transfer function.
    pub fn is_zero(&self) -> bool {
        poly::is_zero(&self.num)
    }

    /// Divides `self` by `rhs`, i.e. `(n1 * d2) / (d1 * n2)`.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(TransferFunctionError::DivisionByZero);
        }
        let num = poly::mul(&self.num, &rhs.den);
        let den = poly::mul(&self.den, &rhs.num);
        log::trace!("divide: num {:?}, den {:?}", num, den);
        Self::new(num, den)
    }

    /// Reciprocal `den/num`.
    pub fn inv(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(TransferFunctionError::DivisionByZero);
        }
        Self::new(self.den.clone(), self.num.clone())
    }

    /// Cancels common numerator and denominator factors.
    ///
    /// The greatest common divisor is found with Euclid's algorithm, treating
    /// remainder coefficients within `config.tolerance` of zero as zero. When
    /// `config.normalize` is set the denominator is scaled to be monic. A zero
    /// numerator reduces to `0/1`.
    ///
    /// Nothing is cancelled unless the divisor leaves both remainders within
    /// the tolerance, and normalization is skipped unless the leading
    /// denominator coefficient divides every coefficient. With truncating
    /// number types such as integers the value is then returned unchanged
    /// rather than altered.
    pub fn reduce(&self, config: &ArithmeticConfig<T>) -> Self {
        let num = poly::trim_with_tolerance(&self.num, config.tolerance);
        if poly::is_zero(&num) {
            return Self::gain(T::zero());
        }

        let divisor = poly::gcd(&num, &self.den, config.tolerance);
        let (Some((mut num, num_rem)), Some((mut den, den_rem))) = (
            poly::div_rem(&num, &divisor),
            poly::div_rem(&self.den, &divisor),
        ) else {
            return self.clone();
        };
        let exact = |rem: &[T]| rem.iter().all(|c| c.is_negligible(config.tolerance));
        if !exact(&num_rem) || !exact(&den_rem) {
            log::debug!(
                "reduce: {:?} does not divide num {:?} and den {:?}, left unchanged",
                divisor,
                self.num,
                self.den
            );
            return self.clone();
        }

        if config.normalize {
            let lead = den[0];
            let divides = |c: &T| (*c / lead * lead - *c).is_negligible(config.tolerance);
            if num.iter().all(divides) && den.iter().all(divides) {
                num = num.iter().map(|&c| c / lead).collect();
                den = den.iter().map(|&c| c / lead).collect();
            }
        }

        log::debug!(
            "reduce: cancelled {:?}, num {:?}, den {:?}",
            divisor,
            num,
            den
        );
        Self::from_parts(num, den)
    }

    /// Evaluates `G(s)` at a real point.
    pub fn eval(&self, s: T) -> Result<T> {
        let den = poly::eval(&self.den, s);
        if den.is_zero() {
            return Err(TransferFunctionError::Pole);
        }
        Ok(poly::eval(&self.num, s) / den)
    }

    /// Steady-state gain `G(0)`. Fails for systems with a pole at the origin.
    pub fn dc_gain(&self) -> Result<T> {
        self.eval(T::zero())
    }
}

impl<T: Number> Rational<T> for TransferFunction<T> {
    fn numerator(&self) -> &[T] {
        &self.num
    }

    fn denominator(&self) -> &[T] {
        &self.den
    }

    fn to_transfer_function(&self) -> Result<TransferFunction<T>> {
        Ok(self.clone())
    }
}

fn write_polynomial<T>(f: &mut fmt::Formatter<'_>, p: &[T]) -> fmt::Result
where
    T: Number + fmt::Display,
{
    let top = p.len().saturating_sub(1);
    let mut first = true;
    for (i, &c) in p.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let power = top - i;
        let negative = c < T::zero();
        let value = c.magnitude();
        if first {
            if negative {
                f.write_str("-")?;
            }
        } else if negative {
            f.write_str(" - ")?;
        } else {
            f.write_str(" + ")?;
        }
        let unit = value.is_one() && 0 < power;
        if !unit {
            write!(f, "{}", value)?;
            if 0 < power {
                f.write_str(" ")?;
            }
        }
        match power {
            0 => {}
            1 => f.write_str("s")?,
            _ => write!(f, "s^{}", power)?,
        }
        first = false;
    }
    if first {
        f.write_str("0")?;
    }
    Ok(())
}

impl<T: Number + fmt::Display> fmt::Display for TransferFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_polynomial(f, &self.num)?;
        f.write_str(") / (")?;
        write_polynomial(f, &self.den)?;
        f.write_str(")")
    }
}
