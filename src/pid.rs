// src/pid.rs

//! # PID Transfer Function Module
//!
//! This module composes PID (Proportional-Integral-Derivative) controller
//! blocks into transfer functions:
//!
//! ```text
//! C(s) = k_p + k_i/s + k_d*s = (k_d s^2 + k_p s + k_i) / s
//! ```
//!
//! [`build_pid`] returns the bare transfer function. [`Pid`] keeps the gains
//! alongside the composed transfer function and implements [`Rational`], so it
//! can be handed to the feedback transforms like any other block.

use crate::error::Result;
use crate::{Number, Rational, TransferFunction};
use alloc::vec;

/// Builds the transfer function of a PID controller with gains `kp`, `ki`
/// and `kd`.
///
/// The proportional term `kp/1`, integral term `ki/s` and derivative term
/// `(kd*s)/1` are summed with transfer function addition. Zero gains are
/// valid and drop the corresponding term; the denominator stays `s`.
pub fn build_pid<T: Number>(kp: T, ki: T, kd: T) -> TransferFunction<T> {
    let p = TransferFunction::gain(kp);
    let i = TransferFunction::from_parts(vec![ki], vec![T::one(), T::zero()]);
    let d = TransferFunction::from_parts(vec![kd, T::zero()], vec![T::one()]);
    let pid = p + i + d;

    log::debug!(
        "build_pid: kp {:?}, ki {:?}, kd {:?} -> num {:?}, den {:?}",
        kp,
        ki,
        kd,
        pid.num(),
        pid.den()
    );
    pid
}

/// Configuration for PID gains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidGains<T: Number> {
    /// Proportional gain.
    pub kp: T,
    /// Integral gain.
    pub ki: T,
    /// Derivative gain.
    pub kd: T,
}

impl<T: Number> PidGains<T> {
    /// Creates a new configuration for a pure unity proportional controller.
    /// These should be replaced with values tuned for the plant.
    ///
    /// Example Usage
    /// ```
    /// use control_blocks::{Pid, PidGains};
    ///
    /// let mut gains = PidGains::<f64>::new();
    ///
    /// // Set the PID gains.
    /// gains.kp = 2.0;
    /// gains.ki = 1.0;
    /// gains.kd = 0.5;
    ///
    /// let pid = Pid::with_gains(gains);
    /// assert_eq!(pid.transfer_function().num(), &[0.5, 2.0, 1.0]);
    /// ```
    pub fn new() -> Self {
        Self {
            kp: T::one(),
            ki: T::zero(),
            kd: T::zero(),
        }
    }
}

/// A PID controller block: its gains and the composed transfer function.
#[derive(Debug, Clone, PartialEq)]
pub struct Pid<T: Number> {
    gains: PidGains<T>,
    tf: TransferFunction<T>,
}

impl<T: Number> Pid<T> {
    /// Creates a PID block from individual gains.
    pub fn new(kp: T, ki: T, kd: T) -> Self {
        Self::with_gains(PidGains { kp, ki, kd })
    }

    /// Creates a PID block using the provided gain configuration.
    pub fn with_gains(gains: PidGains<T>) -> Self {
        Pid {
            gains,
            tf: build_pid(gains.kp, gains.ki, gains.kd),
        }
    }

    /// Proportional gain.
    pub fn kp(&self) -> T {
        self.gains.kp
    }

    /// Integral gain.
    pub fn ki(&self) -> T {
        self.gains.ki
    }

    /// Derivative gain.
    pub fn kd(&self) -> T {
        self.gains.kd
    }

    /// The gain configuration the block was built from.
    pub fn gains(&self) -> PidGains<T> {
        self.gains
    }

    /// The composed transfer function.
    pub fn transfer_function(&self) -> &TransferFunction<T> {
        &self.tf
    }

    /// Consumes the block, returning the composed transfer function.
    pub fn into_transfer_function(self) -> TransferFunction<T> {
        self.tf
    }
}

impl<T: Number> Rational<T> for Pid<T> {
    fn numerator(&self) -> &[T] {
        self.tf.num()
    }

    fn denominator(&self) -> &[T] {
        self.tf.den()
    }

    fn to_transfer_function(&self) -> Result<TransferFunction<T>> {
        Ok(self.tf.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::ArithmeticConfig;

    /// Test the closed form numerator [kd, kp, ki] over s.
    #[test]
    fn test_build_pid_closed_form() {
        let pid = build_pid(2.0, 1.0, 0.5);
        assert!(
            coefficients_close(&[0.5, 2.0, 1.0], pid.num()),
            "Numerator should be [kd, kp, ki]."
        );
        assert!(
            coefficients_close(&[1.0, 0.0], pid.den()),
            "Denominator should be s."
        );
    }

    /// Test that all zero gains give the zero transfer function over s.
    #[test]
    fn test_build_pid_zero_gains() {
        let pid = build_pid(0.0, 0.0, 0.0);
        assert!(pid.is_zero(), "PID with zero gains should be zero.");
        assert!(coefficients_close(&[0.0], pid.num()));
        assert!(coefficients_close(&[1.0, 0.0], pid.den()));

        let reduced = pid.reduce(&ArithmeticConfig::new());
        assert!(coefficients_close(&[0.0], reduced.num()));
        assert!(coefficients_close(&[1.0], reduced.den()));
    }

    /// Test that a zero derivative gain drops the s^2 term.
    #[test]
    fn test_build_pid_pi_controller() {
        let pi = build_pid(3.0, 2.0, 0.0);
        assert!(coefficients_close(&[3.0, 2.0], pi.num()));
        assert!(coefficients_close(&[1.0, 0.0], pi.den()));
        assert!(pi.is_proper(), "A PI controller is proper.");
    }

    /// Test negative gains pass through unchanged.
    #[test]
    fn test_build_pid_negative_gains() {
        let pid = build_pid(-1.0, 4.0, -0.25);
        assert!(coefficients_close(&[-0.25, -1.0, 4.0], pid.num()));
        assert!(coefficients_close(&[1.0, 0.0], pid.den()));
        assert!(!pid.is_proper(), "A PID with derivative action is improper.");
    }

    /// Test the composed transfer function against direct evaluation of
    /// kp + ki/s + kd*s at a few points.
    #[test]
    fn test_build_pid_evaluation() {
        let (kp, ki, kd) = (1.5, 0.3, 0.05);
        let pid = build_pid(kp, ki, kd);
        for s in [0.5, 1.0, 2.0, -3.0] {
            let expected = kp + ki / s + kd * s;
            assert!(value_close(expected, pid.eval(s).unwrap()));
        }
    }

    /// Test the default gain configuration.
    #[test]
    fn test_pid_gains_defaults() {
        let gains = PidGains::<f64>::new();
        assert!(value_close(1.0, gains.kp));
        assert!(value_close(0.0, gains.ki));
        assert!(value_close(0.0, gains.kd));

        let pid = Pid::with_gains(gains);
        assert!(coefficients_close(&[1.0, 0.0], pid.numerator()));
        assert!(coefficients_close(&[1.0, 0.0], pid.denominator()));
    }

    /// Test the accessors and the rational capability of the PID block.
    #[test]
    fn test_pid_block() {
        let pid = Pid::new(2.0, 1.0, 0.5);
        assert!(value_close(2.0, pid.kp()));
        assert!(value_close(1.0, pid.ki()));
        assert!(value_close(0.5, pid.kd()));
        assert_eq!(PidGains { kp: 2.0, ki: 1.0, kd: 0.5 }, pid.gains());

        assert!(coefficients_close(&[0.5, 2.0, 1.0], pid.numerator()));
        assert!(coefficients_close(&[1.0, 0.0], pid.denominator()));
        assert_eq!(pid.transfer_function(), &pid.to_transfer_function().unwrap());
        assert_eq!(build_pid(2.0, 1.0, 0.5), pid.into_transfer_function());
    }
}
