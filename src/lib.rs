// ============================================================================
// Teaching Calculator Library
// Basic arithmetic and numeric utilities with strict input validation
// ============================================================================

//! # Teaching Calculator
//!
//! A small, stateless calculator for learning function design and testing.
//!
//! ## Features
//!
//! - **Basic arithmetic**: add, subtract, multiply, divide
//! - **Numeric utilities**: power, square root (fixed 20-step Newton),
//!   factorial, modulo, absolute value, percentage, parity checks
//! - **Tagged operands**: [`numeric::Number`] keeps integer and float kinds
//!   apart, so integer-only operations reject `4.0`
//! - **Typed errors**: every precondition failure is a [`CalculatorError`]
//!   naming the operation and the violated rule
//!
//! ## Arithmetic contract
//!
//! The default configuration reproduces the historical behaviour of `add`
//! (`a + b*2`) and `multiply` (`a*b*3`). Select
//! [`CalculatorConfig::standard`] for ordinary arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use teaching_calculator::prelude::*;
//!
//! let calc = Calculator::with_config(CalculatorConfig::standard());
//!
//! assert_eq!(calc.add(2, 3).unwrap(), Number::Int(5));
//! assert_eq!(calc.power(2, 3).unwrap(), Number::Int(8));
//! assert_eq!(calc.percentage(200, 50), 100.0);
//! assert!((calc.square_root(2).unwrap() - 1.41421).abs() < 1e-4);
//!
//! let err = calc.divide(10, 0).unwrap_err();
//! assert!(err.is_division_by_zero());
//!
//! // Integer-only operations check the declared kind
//! assert!(calc.is_even(4).unwrap());
//! assert!(calc.is_even(4.0).is_err());
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

pub use engine::{add, divide, multiply, subtract};
pub use numeric::{CalcResult, CalculatorError};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ArithmeticMode, CalculatorConfig, Operation, RemainderConvention};
    pub use crate::engine::Calculator;
    pub use crate::numeric::{ArgumentViolation, CalcResult, CalculatorError, Number};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_literal_scenarios_standard_contract() {
        let calc = Calculator::with_config(CalculatorConfig::standard());

        assert_eq!(calc.subtract(10, 5).unwrap(), Number::Int(5));
        assert_eq!(calc.multiply(-3, 4).unwrap(), Number::Int(-12));
        assert_eq!(calc.power(2, 3).unwrap(), Number::Int(8));
        assert_eq!(calc.factorial(5).unwrap(), 120);
        assert_eq!(calc.modulo(10, 3).unwrap(), Number::Int(1));
        assert_eq!(calc.percentage(200, 50), 100.0);

        assert!(calc.divide(10, 0).unwrap_err().is_division_by_zero());
        assert!(calc.factorial(-5).unwrap_err().is_invalid_argument());
        assert!(calc.factorial(3.5).unwrap_err().is_invalid_argument());
        assert!(calc.is_even(3.5).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_literal_scenarios_literal_contract() {
        let calc = Calculator::new();

        assert_eq!(calc.add(2, 3).unwrap(), Number::Int(8));
        assert_eq!(calc.multiply(3, 4).unwrap(), Number::Int(36));

        // Operations without scaling behave the same in both modes
        assert_eq!(calc.subtract(10, 5).unwrap(), Number::Int(5));
        assert_eq!(calc.power(2, 3).unwrap(), Number::Int(8));
        assert_eq!(calc.factorial(5).unwrap(), 120);
        assert_eq!(calc.modulo(10, 3).unwrap(), Number::Int(1));
    }

    #[test]
    fn test_root_functions_forward_to_calculator() {
        assert_eq!(crate::add(2, 3).unwrap(), Number::Int(8));
        assert_eq!(crate::subtract(2, 3).unwrap(), Number::Int(-1));
        assert_eq!(crate::multiply(2, 3).unwrap(), Number::Int(18));
        assert_eq!(crate::divide(3, 2).unwrap(), 1.5);
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn boxed() -> Result<f64, Box<dyn std::error::Error>> {
            Ok(Calculator::new().divide(1, 0)?)
        }

        let err = boxed().unwrap_err();
        assert_eq!(err.to_string(), "cannot divide by zero");
    }

    #[test]
    fn test_parsed_operands_keep_their_kind() {
        let calc = Calculator::new();
        let whole: Number = "4".parse().unwrap();
        let fractional: Number = "4.0".parse().unwrap();

        assert_eq!(calc.factorial(whole).unwrap(), 24);
        assert!(calc.factorial(fractional).is_err());
    }
}
