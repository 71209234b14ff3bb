// ============================================================================
// Tagged Number
// Integer or floating-point operand that keeps its declared kind
// ============================================================================

use super::errors::ConversionError;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calculator operand: an integer or a float.
///
/// The variant is the value's declared kind. Integer-only operations check
/// the tag, not the magnitude, so `Number::Float(4.0)` is rejected where
/// `Number::Int(4)` is accepted.
///
/// Comparison is numeric across kinds (`Int(4) == Float(4.0)`); use
/// [`Number::is_integer`] when the kind matters.
///
/// # Example
/// ```
/// use teaching_calculator::numeric::Number;
///
/// let n: Number = "4".parse().unwrap();
/// let x: Number = "4.0".parse().unwrap();
/// assert!(n.is_integer());
/// assert!(!x.is_integer());
/// assert_eq!(n, x);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Integer zero
    pub const ZERO: Self = Number::Int(0);

    /// Integer one
    pub const ONE: Self = Number::Int(1);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// True when the value is tagged as an integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// The integer payload, if tagged as an integer.
    #[inline]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    /// The value as f64 (lossy for integers beyond 2^53).
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// True for `Int(0)`, `Float(0.0)` and `Float(-0.0)`.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }

    /// True when strictly below zero (`-0.0` and NaN are not negative).
    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(n) => n < 0,
            Number::Float(x) => x < 0.0,
        }
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================
    //
    // Int with Int stays Int and yields None on i64 overflow. A Float on
    // either side promotes to f64, which never yields None.

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_add(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() + b.as_f64())),
        }
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_sub(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() - b.as_f64())),
        }
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a.checked_mul(b).map(Number::Int),
            (a, b) => Some(Number::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// Truncated remainder: the sign follows the dividend.
    ///
    /// Returns `None` only for an integer zero divisor. `i64::MIN % -1` is 0.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Number::Int(_), Number::Int(0)) => None,
            (Number::Int(a), Number::Int(b)) => Some(Number::Int(a.wrapping_rem(b))),
            (a, b) => Some(Number::Float(a.as_f64() % b.as_f64())),
        }
    }

    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        match self {
            Number::Int(n) => n.checked_neg().map(Number::Int),
            Number::Float(x) => Some(Number::Float(-x)),
        }
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// A decimal written without a fractional part (scale 0) becomes an
    /// integer; `Decimal::new(40, 1)` ("4.0") stays a float.
    ///
    /// # Errors
    /// `NotRepresentable` if a scale-0 value does not fit in i64.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Result<Self, ConversionError> {
        use rust_decimal::prelude::ToPrimitive;

        if d.scale() == 0 {
            d.to_i64()
                .map(Number::Int)
                .ok_or(ConversionError::NotRepresentable)
        } else {
            d.to_f64()
                .map(Number::Float)
                .ok_or(ConversionError::NotRepresentable)
        }
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `NotRepresentable` for NaN, infinities and magnitudes beyond the
    /// decimal range.
    pub fn to_decimal(self) -> Result<rust_decimal::Decimal, ConversionError> {
        use rust_decimal::prelude::FromPrimitive;

        match self {
            Number::Int(n) => Ok(rust_decimal::Decimal::from(n)),
            Number::Float(x) => {
                rust_decimal::Decimal::from_f64(x).ok_or(ConversionError::NotRepresentable)
            },
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(value: $t) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    #[inline]
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "Int({})", n),
            Number::Float(x) => write!(f, "Float({:?})", x),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // Debug keeps the fractional part on whole floats ("5.0")
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Number {
    type Err = ConversionError;

    /// Parse a numeric literal, keeping its kind.
    ///
    /// # Examples
    /// - "42" -> Int(42)
    /// - "-7" -> Int(-7)
    /// - "4.0" -> Float(4.0)
    /// - "1e3" -> Float(1000.0)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConversionError::InvalidLiteral);
        }

        let lower = s.to_ascii_lowercase();
        let is_float = lower.contains('.')
            || lower.contains('e')
            || lower.contains("inf")
            || lower.contains("nan");

        if is_float {
            s.parse::<f64>()
                .map(Number::Float)
                .map_err(|_| ConversionError::InvalidLiteral)
        } else {
            s.parse::<i64>()
                .map(Number::Int)
                .map_err(|_| ConversionError::InvalidLiteral)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
