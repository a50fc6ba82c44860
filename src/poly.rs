// src/poly.rs

//! # Polynomial Module
//!
//! Coefficient arithmetic on polynomials stored as slices in descending power
//! order, so `[a, b, c]` is `a*s^2 + b*s + c`. The zero polynomial is `[0]`.
//! Functions that return a polynomial never return an empty vector.

use crate::Number;
use alloc::vec;
use alloc::vec::Vec;

/// Removes leading exact-zero coefficients, keeping at least one coefficient.
pub fn trim<T: Number>(p: &[T]) -> Vec<T> {
    trim_with_tolerance(p, T::zero())
}

/// Removes leading coefficients whose magnitude does not exceed `tolerance`,
/// keeping at least one coefficient. A polynomial that is entirely negligible
/// becomes `[0]`.
pub fn trim_with_tolerance<T: Number>(p: &[T], tolerance: T) -> Vec<T> {
    match p.iter().position(|c| !c.is_negligible(tolerance)) {
        Some(first) => p[first..].to_vec(),
        None => vec![T::zero()],
    }
}

/// Checks whether every coefficient is exactly zero. An empty slice counts as zero.
pub fn is_zero<T: Number>(p: &[T]) -> bool {
    p.iter().all(|c| c.is_zero())
}

/// Degree of the polynomial after ignoring leading zeros. The zero polynomial
/// has degree zero.
pub fn degree<T: Number>(p: &[T]) -> usize {
    match p.iter().position(|c| !c.is_zero()) {
        Some(first) => p.len() - first - 1,
        None => 0,
    }
}

/// Pads `p` with leading zeros up to `len` coefficients.
pub fn pad_front<T: Number>(p: &[T], len: usize) -> Vec<T> {
    let mut padded = vec![T::zero(); len.saturating_sub(p.len())];
    padded.extend_from_slice(p);
    padded
}

/// Pointwise sum, padding the shorter operand with leading zeros. Leading
/// zeros of the result are kept.
pub fn add<T: Number>(a: &[T], b: &[T]) -> Vec<T> {
    let len = a.len().max(b.len()).max(1);
    let a = pad_front(a, len);
    let b = pad_front(b, len);
    a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect()
}

/// Pointwise difference `a - b`, padding the shorter operand with leading zeros.
pub fn sub<T: Number>(a: &[T], b: &[T]) -> Vec<T> {
    add(a, &neg(b))
}

/// Negates every coefficient.
pub fn neg<T: Number>(p: &[T]) -> Vec<T> {
    p.iter().map(|&c| -c).collect()
}

/// Multiplies every coefficient by `k`.
pub fn scale<T: Number>(p: &[T], k: T) -> Vec<T> {
    p.iter().map(|&c| c * k).collect()
}

/// Polynomial product (coefficient convolution).
pub fn mul<T: Number>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return vec![T::zero()];
    }
    let mut product = vec![T::zero(); a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            product[i + j] = product[i + j] + x * y;
        }
    }
    product
}

/// Evaluates the polynomial at `x` with Horner's scheme.
pub fn eval<T: Number>(p: &[T], x: T) -> T {
    p.iter().fold(T::zero(), |acc, &c| acc * x + c)
}

/// Long division returning `(quotient, remainder)` with `a = q*b + r` and
/// `degree(r) < degree(b)`.
///
/// Returns `None` when the divisor is the zero polynomial.
pub fn div_rem<T: Number>(a: &[T], b: &[T]) -> Option<(Vec<T>, Vec<T>)> {
    let a = trim(a);
    let b = trim(b);
    if is_zero(&b) {
        return None;
    }
    if a.len() < b.len() {
        return Some((vec![T::zero()], a));
    }

    let lead = b[0];
    let steps = a.len() - b.len() + 1;
    let mut remainder = a;
    let mut quotient = Vec::with_capacity(steps);
    for i in 0..steps {
        let coefficient = remainder[i] / lead;
        quotient.push(coefficient);
        for (j, &d) in b.iter().enumerate() {
            remainder[i + j] = remainder[i + j] - coefficient * d;
        }
    }

    let remainder = if b.len() == 1 {
        vec![T::zero()]
    } else {
        trim(&remainder[steps..])
    };
    Some((quotient, remainder))
}

/// Scales the polynomial so its leading coefficient is one. The zero
/// polynomial is returned unchanged.
pub fn monic<T: Number>(p: &[T]) -> Vec<T> {
    let p = trim(p);
    let lead = p[0];
    if lead.is_zero() {
        return p;
    }
    p.iter().map(|&c| c / lead).collect()
}

/// Monic greatest common divisor by Euclid's algorithm. Remainder
/// coefficients within `tolerance` of zero are treated as zero.
///
/// For truncating number types the result need not divide either input;
/// callers check the division remainders.
///
/// Returns `[1]` when the polynomials share no factor and the zero polynomial
/// only when both inputs are zero.
pub fn gcd<T: Number>(a: &[T], b: &[T], tolerance: T) -> Vec<T> {
    let mut a = trim_with_tolerance(a, tolerance);
    let mut b = trim_with_tolerance(b, tolerance);
    if a.len() < b.len() {
        core::mem::swap(&mut a, &mut b);
    }

    while !(b.len() == 1 && b[0].is_negligible(tolerance)) {
        let divisor = monic(&b);
        let Some((_, remainder)) = div_rem(&a, &divisor) else {
            break;
        };
        log::trace!("gcd step: divisor {:?}, remainder {:?}", divisor, remainder);
        a = divisor;
        b = trim_with_tolerance(&remainder, tolerance);
    }

    monic(&a)
}
