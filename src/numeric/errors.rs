// ============================================================================
// Calculator Errors
// Error types for operation precondition failures and value conversions
// ============================================================================

use crate::domain::Operation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precondition an `InvalidArgument` error violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArgumentViolation {
    /// Exponent below zero (power)
    NegativeExponent,
    /// Input below zero (square_root, factorial)
    NegativeInput,
    /// Input not tagged as an integer (factorial, is_even, is_odd)
    NonInteger,
}

/// Errors returned by calculator operations.
///
/// Every variant is a caller-correctable contract violation; nothing is
/// retried or partially computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorError {
    /// Divisor was exactly zero (divide, modulo)
    DivisionByZero { operation: Operation },
    /// An input failed the operation's precondition
    InvalidArgument {
        operation: Operation,
        violation: ArgumentViolation,
    },
    /// Integer result does not fit in i64
    Overflow { operation: Operation },
}

impl CalculatorError {
    /// The operation that rejected its input.
    pub fn operation(&self) -> Operation {
        match self {
            CalculatorError::DivisionByZero { operation }
            | CalculatorError::InvalidArgument { operation, .. }
            | CalculatorError::Overflow { operation } => *operation,
        }
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, CalculatorError::DivisionByZero { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalculatorError::InvalidArgument { .. })
    }

    pub(crate) fn invalid(operation: Operation, violation: ArgumentViolation) -> Self {
        CalculatorError::InvalidArgument {
            operation,
            violation,
        }
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::DivisionByZero {
                operation: Operation::Modulo,
            } => write!(f, "cannot perform modulo with zero"),
            CalculatorError::DivisionByZero { .. } => write!(f, "cannot divide by zero"),
            CalculatorError::InvalidArgument {
                operation,
                violation,
            } => match (operation, violation) {
                (_, ArgumentViolation::NegativeExponent) => {
                    write!(f, "negative exponents not supported")
                },
                (Operation::SquareRoot, ArgumentViolation::NegativeInput) => {
                    write!(f, "cannot calculate square root of negative number")
                },
                (op, ArgumentViolation::NegativeInput) => {
                    write!(f, "{} is not defined for negative numbers", op)
                },
                (op, ArgumentViolation::NonInteger) => {
                    write!(f, "{} is only defined for integers", op)
                },
            },
            CalculatorError::Overflow { operation } => {
                write!(f, "integer overflow in {}", operation)
            },
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;

/// Errors converting to or from a [`Number`](super::Number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// String is not a numeric literal
    InvalidLiteral,
    /// Value has no representation in the target type
    NotRepresentable,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidLiteral => write!(f, "invalid input: not a numeric literal"),
            ConversionError::NotRepresentable => {
                write!(f, "value is not representable in the target type")
            },
        }
    }
}

impl std::error::Error for ConversionError {}
