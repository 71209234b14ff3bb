// ============================================================================
// Domain Models Module
// Operation catalog and calculator configuration
// ============================================================================

pub mod config;
pub mod operation;

pub use config::{ArithmeticMode, CalculatorConfig, RemainderConvention};
pub use operation::Operation;
