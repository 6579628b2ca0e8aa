// ============================================================================
// Precision Module
// Precision conventions, rounding policies and the normalizer built on them
// ============================================================================

pub mod mode;
pub mod normalizer;

pub use mode::{
    precision_from_string, PrecisionMode, PrecisionSpec, RoundingMode, MAX_PRECISION_DIGITS,
};
pub use normalizer::{decimal_to_precision, decimal_to_precision_str};
