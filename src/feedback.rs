// src/feedback.rs

//! # Feedback Module
//!
//! Closed-loop transforms for open-loop transfer functions.
//!
//! - [`closed_loop`] works on raw coefficients: the numerator is kept and the
//!   denominator becomes `num + den`. It never cancels common factors, so a
//!   non-reduced open loop yields a non-reduced closed loop.
//! - [`unity_feedback`] evaluates `L / (1 + L)` with transfer function
//!   arithmetic and then reduces according to an [`ArithmeticConfig`].
//! - [`feedback`] closes a loop around a plant with an arbitrary feedback path
//!   and sign.
//!
//! All three reject an operand with an empty coefficient list or a zero
//! denominator, and report a loop whose closed-loop denominator vanishes as
//! [`TransferFunctionError::DegenerateFeedback`].

use crate::error::{Result, TransferFunctionError};
use crate::system::validate;
use crate::{poly, ArithmeticConfig, Number, Rational, TransferFunction};

/// Sign of the signal fed back into the summing junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackSign {
    /// The output is subtracted from the reference.
    #[default]
    Negative,
    /// The output is added to the reference.
    Positive,
}

/// Unity negative feedback closed loop `num / (num + den)` of an open-loop
/// block, computed on its coefficients as given.
pub fn closed_loop<T, R>(open_loop: &R) -> Result<TransferFunction<T>>
where
    T: Number,
    R: Rational<T> + ?Sized,
{
    validate(open_loop)?;
    let num = open_loop.numerator();
    let den = poly::add(num, open_loop.denominator());
    if poly::is_zero(&den) {
        log::debug!("closed_loop: num {:?} cancels den, loop is degenerate", num);
        return Err(TransferFunctionError::DegenerateFeedback);
    }

    let closed = TransferFunction::from_parts(num.to_vec(), den);
    log::debug!("closed_loop: num {:?}, den {:?}", closed.num(), closed.den());
    Ok(closed)
}

/// Unity negative feedback closed loop `L / (1 + L)` computed with transfer
/// function division. When `config.reduce` is set, common factors are
/// cancelled from the result, which then matches [`closed_loop`] on the
/// reduced open loop.
pub fn unity_feedback<T, R>(
    open_loop: &R,
    config: &ArithmeticConfig<T>,
) -> Result<TransferFunction<T>>
where
    T: Number,
    R: Rational<T> + ?Sized,
{
    validate(open_loop)?;
    let open_loop = open_loop.to_transfer_function()?;
    let return_difference = &TransferFunction::gain(T::one()) + &open_loop;
    if return_difference.is_zero() {
        log::debug!("unity_feedback: 1 + L is zero, loop is degenerate");
        return Err(TransferFunctionError::DegenerateFeedback);
    }

    let closed = open_loop.checked_div(&return_difference)?;
    let closed = if config.reduce {
        closed.reduce(config)
    } else {
        closed
    };
    log::debug!("unity_feedback: num {:?}, den {:?}", closed.num(), closed.den());
    Ok(closed)
}

/// Closes a loop around `plant` with `controller` in the feedback path:
///
/// ```text
/// G / (1 + G H)   for negative feedback
/// G / (1 - G H)   for positive feedback
/// ```
///
/// computed as `n_g d_h / (d_g d_h -/+ n_g n_h)` without reduction.
pub fn feedback<T, P, H>(
    plant: &P,
    controller: &H,
    sign: FeedbackSign,
) -> Result<TransferFunction<T>>
where
    T: Number,
    P: Rational<T> + ?Sized,
    H: Rational<T> + ?Sized,
{
    validate(plant)?;
    validate(controller)?;
    let (ng, dg) = (plant.numerator(), plant.denominator());
    let (nh, dh) = (controller.numerator(), controller.denominator());

    let num = poly::mul(ng, dh);
    let direct = poly::mul(dg, dh);
    let looped = poly::mul(ng, nh);
    let den = match sign {
        FeedbackSign::Negative => poly::add(&direct, &looped),
        FeedbackSign::Positive => poly::sub(&direct, &looped),
    };
    if poly::is_zero(&den) {
        log::debug!("feedback: {:?} loop is degenerate", sign);
        return Err(TransferFunctionError::DegenerateFeedback);
    }

    let closed = TransferFunction::from_parts(num, den);
    log::debug!(
        "feedback: {:?} loop, num {:?}, den {:?}",
        sign,
        closed.num(),
        closed.den()
    );
    Ok(closed)
}
