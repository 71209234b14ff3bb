// ============================================================================
// Engine Module
// Contains the calculator operations and their free-function shortcuts
// ============================================================================

mod calculator;
mod functions;

pub use calculator::{Calculator, NEWTON_ITERATIONS};
pub use functions::{add, divide, multiply, subtract};
