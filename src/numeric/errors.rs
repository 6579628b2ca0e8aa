// ============================================================================
// Precise Errors
// Error types for decimal parsing, arithmetic and precision normalization
// ============================================================================

use std::fmt;

/// The quantity a precision rule was being applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Amount,
    Price,
    Cost,
    Currency,
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityKind::Amount => write!(f, "amount"),
            QuantityKind::Price => write!(f, "price"),
            QuantityKind::Cost => write!(f, "cost"),
            QuantityKind::Currency => write!(f, "currency amount"),
        }
    }
}

/// Errors that can occur while parsing, computing or normalizing decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreciseError {
    /// Input string is not a decimal literal
    InvalidNumericLiteral(String),
    /// Attempted division (or remainder) by zero
    DivisionByZero,
    /// A non-zero quantity was normalized to zero
    PrecisionUnderflow { kind: QuantityKind, value: String },
    /// Precision spec could not be constructed
    UnsupportedPrecisionMode(String),
    /// Value or requested scale does not fit the target representation
    Overflow,
}

impl fmt::Display for PreciseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreciseError::InvalidNumericLiteral(literal) => {
                write!(f, "invalid numeric literal: {:?}", literal)
            },
            PreciseError::DivisionByZero => write!(f, "division by zero"),
            PreciseError::PrecisionUnderflow { kind, value } => write!(
                f,
                "precision underflow: {} {} rounds to zero at market precision",
                kind, value
            ),
            PreciseError::UnsupportedPrecisionMode(reason) => {
                write!(f, "unsupported precision mode: {}", reason)
            },
            PreciseError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
        }
    }
}

impl std::error::Error for PreciseError {}

/// Result type alias for decimal operations
pub type PreciseResult<T> = Result<T, PreciseError>;
