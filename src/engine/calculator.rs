// ============================================================================
// Calculator
// Stateless provider of the arithmetic and numeric-utility operations
// ============================================================================

use crate::domain::{ArithmeticMode, CalculatorConfig, Operation, RemainderConvention};
use crate::numeric::{ArgumentViolation, CalcResult, CalculatorError, Number};
use std::fmt;
use tracing::{debug, trace};

/// Newton refinement steps taken by [`Calculator::square_root`]
pub const NEWTON_ITERATIONS: usize = 20;

/// Numeric operations provider.
///
/// Holds nothing but its immutable [`CalculatorConfig`]; every operation is
/// a pure function of its arguments, so a `Calculator` can be copied freely
/// and shared across threads.
///
/// Operands are anything convertible into a [`Number`]. Integer literals
/// stay integer-tagged, float literals stay float-tagged:
///
/// ```
/// use teaching_calculator::prelude::*;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.subtract(10, 5).unwrap(), Number::Int(5));
/// assert_eq!(calc.factorial(5).unwrap(), 120);
/// assert!(calc.factorial(4.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a calculator with the default (literal) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with an explicit configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> CalculatorConfig {
        self.config
    }

    // ========================================================================
    // Basic Arithmetic
    // ========================================================================

    /// Add `b` to `a`.
    ///
    /// In [`ArithmeticMode::Literal`] the second operand is doubled first
    /// (`a + b*2`); in [`ArithmeticMode::Standard`] this is `a + b`.
    ///
    /// # Errors
    /// `Overflow` if an integer result does not fit in i64.
    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let sum = match self.config.arithmetic {
            ArithmeticMode::Literal => b
                .checked_mul(Number::Int(2))
                .and_then(|doubled| a.checked_add(doubled)),
            ArithmeticMode::Standard => a.checked_add(b),
        };
        record(Operation::Add, &[a, b], overflow_checked(Operation::Add, sum))
    }

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// `Overflow` if an integer result does not fit in i64.
    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let difference = a.checked_sub(b);
        record(
            Operation::Subtract,
            &[a, b],
            overflow_checked(Operation::Subtract, difference),
        )
    }

    /// Multiply `a` by `b`.
    ///
    /// In [`ArithmeticMode::Literal`] the product is tripled (`a*b*3`); in
    /// [`ArithmeticMode::Standard`] this is `a*b`.
    ///
    /// # Errors
    /// `Overflow` if an integer result does not fit in i64.
    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let product = match self.config.arithmetic {
            ArithmeticMode::Literal => a
                .checked_mul(b)
                .and_then(|p| p.checked_mul(Number::Int(3))),
            ArithmeticMode::Standard => a.checked_mul(b),
        };
        record(
            Operation::Multiply,
            &[a, b],
            overflow_checked(Operation::Multiply, product),
        )
    }

    /// True division of `a` by `b`; the quotient is always a float.
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero (integer or float, either sign).
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<f64> {
        let (a, b) = (a.into(), b.into());
        let result = if b.is_zero() {
            Err(CalculatorError::DivisionByZero {
                operation: Operation::Divide,
            })
        } else {
            Ok(a.as_f64() / b.as_f64())
        };
        record(Operation::Divide, &[a, b], result)
    }

    // ========================================================================
    // Advanced Operations
    // ========================================================================

    /// Raise `base` to a non-negative integer `exponent` by repeated
    /// multiplication.
    ///
    /// An exponent of zero yields `Int(1)` for every base, including zero.
    ///
    /// # Errors
    /// - `InvalidArgument` if `exponent` is negative
    /// - `Overflow` if an integer result does not fit in i64
    pub fn power(&self, base: impl Into<Number>, exponent: i64) -> CalcResult<Number> {
        let base = base.into();
        let result = if exponent < 0 {
            Err(CalculatorError::invalid(
                Operation::Power,
                ArgumentViolation::NegativeExponent,
            ))
        } else {
            let raised = (0..exponent).try_fold(Number::ONE, |acc, _| acc.checked_mul(base));
            overflow_checked(Operation::Power, raised)
        };
        record(Operation::Power, &[base, Number::Int(exponent)], result)
    }

    /// Approximate the square root of `n` with [`NEWTON_ITERATIONS`] Newton
    /// steps starting from `n / 2`.
    ///
    /// Zero returns exactly `0.0` without iterating.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is negative.
    pub fn square_root(&self, n: impl Into<Number>) -> CalcResult<f64> {
        let n = n.into();
        let result = if n.is_negative() {
            Err(CalculatorError::invalid(
                Operation::SquareRoot,
                ArgumentViolation::NegativeInput,
            ))
        } else if n.is_zero() {
            Ok(0.0)
        } else {
            Ok(newton_sqrt(n.as_f64()))
        };
        record(Operation::SquareRoot, &[n], result)
    }

    /// `n!` as an iterative product over `2..=n`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `n` is not integer-tagged (checked first)
    /// - `InvalidArgument` if `n` is negative
    /// - `Overflow` for `n > 20`
    pub fn factorial(&self, n: impl Into<Number>) -> CalcResult<i64> {
        let n = n.into();
        let result = match n.as_integer() {
            None => Err(CalculatorError::invalid(
                Operation::Factorial,
                ArgumentViolation::NonInteger,
            )),
            Some(k) if k < 0 => Err(CalculatorError::invalid(
                Operation::Factorial,
                ArgumentViolation::NegativeInput,
            )),
            Some(k) => (2..=k)
                .try_fold(1i64, |acc, i| acc.checked_mul(i))
                .ok_or(CalculatorError::Overflow {
                    operation: Operation::Factorial,
                }),
        };
        record(Operation::Factorial, &[n], result)
    }

    /// Remainder of `a / b` under the configured [`RemainderConvention`].
    ///
    /// # Errors
    /// `DivisionByZero` if `b` is zero.
    pub fn modulo(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        let (a, b) = (a.into(), b.into());
        let division_by_zero = CalculatorError::DivisionByZero {
            operation: Operation::Modulo,
        };

        let result = if b.is_zero() {
            Err(division_by_zero)
        } else {
            a.checked_rem(b)
                .and_then(|r| match self.config.remainder {
                    RemainderConvention::Truncated => Some(r),
                    RemainderConvention::Floored => floor_remainder(r, b),
                })
                .ok_or(division_by_zero)
        };
        record(Operation::Modulo, &[a, b], result)
    }

    /// Absolute value via an explicit sign check.
    ///
    /// # Errors
    /// `Overflow` for `i64::MIN`.
    pub fn absolute(&self, n: impl Into<Number>) -> CalcResult<Number> {
        let n = n.into();
        let result = if n.is_negative() {
            overflow_checked(Operation::Absolute, n.checked_neg())
        } else {
            Ok(n)
        };
        record(Operation::Absolute, &[n], result)
    }

    /// `value * pct / 100`, always as a float.
    pub fn percentage(&self, value: impl Into<Number>, pct: impl Into<Number>) -> f64 {
        let (value, pct) = (value.into(), pct.into());
        let result = value.as_f64() * pct.as_f64() / 100.0;
        trace!(
            operation = Operation::Percentage.name(),
            %value,
            %pct,
            result,
            "operation completed"
        );
        result
    }

    // ========================================================================
    // Parity Checks
    // ========================================================================

    /// True iff `n % 2 == 0`.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is not integer-tagged, even when whole (4.0).
    pub fn is_even(&self, n: impl Into<Number>) -> CalcResult<bool> {
        let n = n.into();
        record(Operation::IsEven, &[n], parity(Operation::IsEven, n))
    }

    /// True iff `n % 2 != 0`.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is not integer-tagged, even when whole (3.0).
    pub fn is_odd(&self, n: impl Into<Number>) -> CalcResult<bool> {
        let n = n.into();
        let result = parity(Operation::IsOdd, n).map(|even| !even);
        record(Operation::IsOdd, &[n], result)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn newton_sqrt(n: f64) -> f64 {
    let mut guess = n / 2.0;
    for _ in 0..NEWTON_ITERATIONS {
        guess = (guess + n / guess) / 2.0;
    }
    guess
}

/// Shift a truncated remainder so its sign follows the divisor.
fn floor_remainder(r: Number, divisor: Number) -> Option<Number> {
    if !r.is_zero() && r.is_negative() != divisor.is_negative() {
        r.checked_add(divisor)
    } else {
        Some(r)
    }
}

/// Evenness of an integer-tagged value.
fn parity(operation: Operation, n: Number) -> CalcResult<bool> {
    n.as_integer()
        .map(|k| k % 2 == 0)
        .ok_or(CalculatorError::invalid(
            operation,
            ArgumentViolation::NonInteger,
        ))
}

fn overflow_checked(operation: Operation, value: Option<Number>) -> CalcResult<Number> {
    value.ok_or(CalculatorError::Overflow { operation })
}

/// Emit the outcome of an operation and hand the result back unchanged.
fn record<T: fmt::Display>(
    operation: Operation,
    operands: &[Number],
    result: CalcResult<T>,
) -> CalcResult<T> {
    match &result {
        Ok(value) => trace!(
            operation = operation.name(),
            ?operands,
            %value,
            "operation completed"
        ),
        Err(err) => debug!(
            operation = operation.name(),
            ?operands,
            error = %err,
            "operation rejected"
        ),
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
