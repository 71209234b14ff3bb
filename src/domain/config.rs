// ============================================================================
// Calculator Configuration
// Arithmetic contract and remainder convention for a Calculator
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Arithmetic Mode
// ============================================================================

/// Which contract `add` and `multiply` follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticMode {
    /// Historical observable behaviour:
    /// - add(a, b) = a + b*2
    /// - multiply(a, b) = a*b*3
    #[default]
    Literal,

    /// Ordinary arithmetic:
    /// - add(a, b) = a + b
    /// - multiply(a, b) = a*b
    Standard,
}

// ============================================================================
// Remainder Convention
// ============================================================================

/// Sign convention for `modulo` when the operands differ in sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemainderConvention {
    /// Sign follows the dividend (Rust's `%`): -7 mod 3 = -1
    #[default]
    Truncated,

    /// Sign follows the divisor: -7 mod 3 = 2
    Floored,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Immutable settings carried by a [`Calculator`](crate::engine::Calculator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Contract for add and multiply
    pub arithmetic: ArithmeticMode,

    /// Sign convention for modulo
    pub remainder: RemainderConvention,
}

impl CalculatorConfig {
    /// Create a configuration with the default (literal, truncated) settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the add/multiply contract
    pub fn with_arithmetic(mut self, arithmetic: ArithmeticMode) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    /// Builder method: Set the modulo sign convention
    pub fn with_remainder(mut self, remainder: RemainderConvention) -> Self {
        self.remainder = remainder;
        self
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Reproduces the historical add/multiply scaling
    pub fn literal() -> Self {
        Self::new().with_arithmetic(ArithmeticMode::Literal)
    }

    /// Ordinary add/multiply
    pub fn standard() -> Self {
        Self::new().with_arithmetic(ArithmeticMode::Standard)
    }
}
