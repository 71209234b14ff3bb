// ============================================================================
// Numeric Module
// Operand representation and error types for calculator operations
// ============================================================================
//
// This module provides:
// - Number: integer-or-float operand that keeps its declared kind
// - CalculatorError: precondition failures raised by operations
// - ConversionError: parsing and decimal-boundary failures
//
// Design principles:
// - Integer arithmetic is checked (overflow is an error, never a wrap)
// - Mixed integer/float arithmetic promotes to f64
// - Integer-only operations test the tag, not whether the value is whole

mod errors;
mod number;

pub use errors::{ArgumentViolation, CalcResult, CalculatorError, ConversionError};
pub use number::Number;
