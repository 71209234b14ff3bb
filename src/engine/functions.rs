// ============================================================================
// Convenience Functions
// Free-standing entry points that delegate to a default Calculator
// ============================================================================

use super::Calculator;
use crate::numeric::{CalcResult, Number};

/// [`Calculator::add`] on a default calculator.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    Calculator::new().add(a, b)
}

/// [`Calculator::subtract`] on a default calculator.
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    Calculator::new().subtract(a, b)
}

/// [`Calculator::multiply`] on a default calculator.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    Calculator::new().multiply(a, b)
}

/// [`Calculator::divide`] on a default calculator.
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<f64> {
    Calculator::new().divide(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions_match_default_calculator() {
        let calc = Calculator::new();
        assert_eq!(add(2, 3), calc.add(2, 3));
        assert_eq!(subtract(10, 5), calc.subtract(10, 5));
        assert_eq!(multiply(3, 4), calc.multiply(3, 4));
        assert_eq!(divide(10, 4), calc.divide(10, 4));
    }

    #[test]
    fn test_functions_use_literal_contract() {
        assert_eq!(add(2, 3).unwrap(), Number::Int(8));
        assert_eq!(multiply(3, 4).unwrap(), Number::Int(36));
        assert!(divide(1, 0).unwrap_err().is_division_by_zero());
    }
}
