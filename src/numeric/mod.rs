// ============================================================================
// Numeric Module
// Exact decimal arithmetic on numeric string literals
// ============================================================================
//
// This module provides:
// - DecimalValue: arbitrary-precision decimal parsed from strings
// - PreciseError: error taxonomy shared by the whole crate
// - precise: string-in / string-out helpers for raw exchange fields
//
// Design principles:
// - No floating-point operations
// - Add, subtract and multiply are exact
// - Division is the single lossy operation and truncates at a stated scale

mod decimal;
mod digits;
mod errors;

pub mod precise;

pub use decimal::{DecimalValue, DEFAULT_DIVISION_SCALE, MAX_DIVISION_SCALE, MAX_EXPONENT};
pub use errors::{PreciseError, PreciseResult, QuantityKind};
