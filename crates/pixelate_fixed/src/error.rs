//! # Fixed-Point Error Types
//!
//! All errors that can occur in fixed-point math.

use thiserror::Error;

use crate::fixed::Fixed;

/// Errors that can occur in fixed-point calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedError {
    /// The input lies outside the domain of the operation.
    #[error("{operation} is undefined for {input}")]
    Domain {
        /// Name of the operation (`asin`, `sqrt`, ...).
        operation: &'static str,
        /// The offending input.
        input: Fixed,
    },

    /// The result does not fit in 16.16 bits.
    #[error("arithmetic overflow in fixed-point calculation")]
    Overflow,

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A floating-point input was NaN.
    #[error("value is not a number")]
    NotANumber,
}

/// Result type for fixed-point operations.
pub type FixedResult<T> = Result<T, FixedError>;
