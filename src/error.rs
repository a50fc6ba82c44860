// src/error.rs

//! Errors raised by transfer function construction and arithmetic.

use thiserror::Error;

/// Result type for transfer function operations.
pub type Result<T> = core::result::Result<T, TransferFunctionError>;

/// Failures of transfer function construction, division, evaluation and feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferFunctionError {
    /// The numerator coefficient list is empty.
    #[error("numerator has no coefficients")]
    EmptyNumerator,
    /// The denominator coefficient list is empty.
    #[error("denominator has no coefficients")]
    EmptyDenominator,
    /// The denominator is the zero polynomial.
    #[error("denominator is the zero polynomial")]
    ZeroDenominator,
    /// The divisor is the zero transfer function.
    #[error("division by the zero transfer function")]
    DivisionByZero,
    /// The closed-loop denominator vanished, so `1 + L(s)` is identically zero.
    #[error("degenerate feedback loop: closed-loop denominator is the zero polynomial")]
    DegenerateFeedback,
    /// The evaluation point is a root of the denominator.
    #[error("transfer function has a pole at the evaluation point")]
    Pole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    /// Test that every variant renders a readable message.
    #[test]
    fn test_error_messages() {
        assert_eq!(
            "denominator is the zero polynomial",
            TransferFunctionError::ZeroDenominator.to_string()
        );
        assert_eq!(
            "division by the zero transfer function",
            TransferFunctionError::DivisionByZero.to_string()
        );
        assert!(
            TransferFunctionError::DegenerateFeedback
                .to_string()
                .starts_with("degenerate feedback loop"),
            "Degenerate feedback message should name the failure."
        );
    }
}
