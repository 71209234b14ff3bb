// ============================================================================
// Operation Catalog
// Identifies each calculator operation in errors and log events
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every operation the calculator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Factorial,
    Modulo,
    Absolute,
    Percentage,
    IsEven,
    IsOdd,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 12] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Factorial,
        Operation::Modulo,
        Operation::Absolute,
        Operation::Percentage,
        Operation::IsEven,
        Operation::IsOdd,
    ];

    /// Snake-case operation name, as used in messages and log fields.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
            Operation::Factorial => "factorial",
            Operation::Modulo => "modulo",
            Operation::Absolute => "absolute",
            Operation::Percentage => "percentage",
            Operation::IsEven => "is_even",
            Operation::IsOdd => "is_odd",
        }
    }

    /// Whether the operation only accepts integer-tagged input.
    pub const fn requires_integer(self) -> bool {
        matches!(
            self,
            Operation::Factorial | Operation::IsEven | Operation::IsOdd
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
