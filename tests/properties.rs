//! Property-based tests for calculator operations
//!
//! These tests check that the documented arithmetic identities hold across
//! a wide range of inputs, in both arithmetic modes where it matters.

use proptest::prelude::*;
use teaching_calculator::prelude::*;

fn standard() -> Calculator {
    Calculator::with_config(CalculatorConfig::standard())
}

/// Any operand, integer- or float-tagged, in a range free of overflow
fn operand_strategy() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(Number::Int),
        (-1_000_000.0f64..1_000_000.0).prop_map(Number::Float),
    ]
}

/// Non-zero divisor of either kind
fn divisor_strategy() -> impl Strategy<Value = Number> {
    operand_strategy().prop_filter("divisor must be non-zero", |n| !n.is_zero())
}

proptest! {
    #[test]
    fn divide_then_multiply_recovers_dividend(a in operand_strategy(), b in divisor_strategy()) {
        let quotient = standard().divide(a, b).unwrap();
        let tolerance = 1e-9 * a.as_f64().abs().max(1.0);
        prop_assert!((quotient * b.as_f64() - a.as_f64()).abs() <= tolerance);
    }

    #[test]
    fn factorial_recurrence(n in 1i64..=20) {
        let calc = Calculator::new();
        let current = calc.factorial(n).unwrap();
        let previous = calc.factorial(n - 1).unwrap();
        prop_assert_eq!(current, n * previous);
    }

    #[test]
    fn square_root_squares_back(n in 0.0f64..10_000.0) {
        let root = Calculator::new().square_root(n).unwrap();
        prop_assert!((root * root - n).abs() < 1e-4);
    }

    #[test]
    fn integer_square_root_squares_back(n in 0i64..10_000) {
        let root = Calculator::new().square_root(n).unwrap();
        prop_assert!((root * root - n as f64).abs() < 1e-4);
    }

    #[test]
    fn negative_square_root_is_rejected(n in -1_000_000.0f64..-1e-9) {
        let err = Calculator::new().square_root(n).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }

    #[test]
    fn parity_is_exclusive(n in any::<i64>()) {
        let calc = Calculator::new();
        prop_assert_ne!(calc.is_even(n).unwrap(), calc.is_odd(n).unwrap());
    }

    #[test]
    fn parity_rejects_every_float(x in any::<f64>()) {
        let calc = Calculator::new();
        prop_assert!(calc.is_even(x).unwrap_err().is_invalid_argument());
        prop_assert!(calc.is_odd(x).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn absolute_is_non_negative_and_symmetric(n in operand_strategy()) {
        let calc = Calculator::new();
        let abs = calc.absolute(n).unwrap();
        let negated = n.checked_neg().unwrap();
        prop_assert!(abs >= Number::ZERO);
        prop_assert_eq!(abs, calc.absolute(negated).unwrap());
    }

    #[test]
    fn power_zero_is_one(base in operand_strategy()) {
        let one = Calculator::new().power(base, 0).unwrap();
        prop_assert!(one.is_integer());
        prop_assert_eq!(one, Number::ONE);
    }

    #[test]
    fn power_matches_repeated_multiplication(base in -50i64..50, exponent in 0i64..8) {
        let calc = Calculator::new();
        let expected = (0..exponent).fold(1i64, |acc, _| acc * base);
        prop_assert_eq!(calc.power(base, exponent).unwrap(), Number::Int(expected));
    }

    #[test]
    fn literal_and_standard_contracts(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let literal = Calculator::new();
        let standard = standard();

        prop_assert_eq!(literal.add(a, b).unwrap(), Number::Int(a + b * 2));
        prop_assert_eq!(standard.add(a, b).unwrap(), Number::Int(a + b));
        prop_assert_eq!(literal.multiply(a, b).unwrap(), Number::Int(a * b * 3));
        prop_assert_eq!(standard.multiply(a, b).unwrap(), Number::Int(a * b));
    }

    #[test]
    fn truncated_remainder_sign_follows_dividend(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let r = Calculator::new().modulo(a, b).unwrap().as_integer().unwrap();
        prop_assert!(r == 0 || (r < 0) == (a < 0));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn floored_remainder_sign_follows_divisor(a in -1_000_000i64..1_000_000, b in (-1_000i64..1_000).prop_filter("non-zero", |b| *b != 0)) {
        let calc = Calculator::with_config(
            CalculatorConfig::new().with_remainder(RemainderConvention::Floored),
        );
        let r = calc.modulo(a, b).unwrap().as_integer().unwrap();
        prop_assert!(r == 0 || (r < 0) == (b < 0));
        let floor_quotient = (a as f64 / b as f64).floor() as i64;
        prop_assert_eq!(r, a - b * floor_quotient);
    }
}
