// src/transfer_function/ops.rs

//! Arithmetic operators for transfer functions.
//!
//! Addition is the parallel connection, multiplication the series connection.
//! Sums and differences cross-multiply the denominators and never cancel
//! common factors, so `k_p/1 + k_i/s` has denominator `s` exactly as written.

use super::TransferFunction;
use crate::{poly, Number};
use core::ops::{Add, Mul, Neg, Sub};

impl<T: Number> Add<&TransferFunction<T>> for &TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn add(self, rhs: &TransferFunction<T>) -> TransferFunction<T> {
        let left = poly::mul(&self.num, &rhs.den);
        let right = poly::mul(&rhs.num, &self.den);
        let num = poly::add(&left, &right);
        let den = poly::mul(&self.den, &rhs.den);
        TransferFunction::from_parts(num, den)
    }
}

impl<T: Number> Sub<&TransferFunction<T>> for &TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn sub(self, rhs: &TransferFunction<T>) -> TransferFunction<T> {
        let left = poly::mul(&self.num, &rhs.den);
        let right = poly::mul(&rhs.num, &self.den);
        let num = poly::sub(&left, &right);
        let den = poly::mul(&self.den, &rhs.den);
        TransferFunction::from_parts(num, den)
    }
}

impl<T: Number> Mul<&TransferFunction<T>> for &TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn mul(self, rhs: &TransferFunction<T>) -> TransferFunction<T> {
        let num = poly::mul(&self.num, &rhs.num);
        let den = poly::mul(&self.den, &rhs.den);
        TransferFunction::from_parts(num, den)
    }
}

impl<T: Number> Neg for &TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn neg(self) -> TransferFunction<T> {
        TransferFunction::from_parts(poly::neg(&self.num), self.den.clone())
    }
}

impl<T: Number> Add for TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn add(self, rhs: TransferFunction<T>) -> TransferFunction<T> {
        &self + &rhs
    }
}

impl<T: Number> Sub for TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn sub(self, rhs: TransferFunction<T>) -> TransferFunction<T> {
        &self - &rhs
    }
}

impl<T: Number> Mul for TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn mul(self, rhs: TransferFunction<T>) -> TransferFunction<T> {
        &self * &rhs
    }
}

impl<T: Number> Neg for TransferFunction<T> {
    type Output = TransferFunction<T>;

    fn neg(self) -> TransferFunction<T> {
        -&self
    }
}
