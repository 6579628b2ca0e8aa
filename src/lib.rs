// ============================================================================
// Precise Decimal Library
// Exact decimal arithmetic and exchange precision rules for trading adapters
// ============================================================================

//! # Precise Decimal
//!
//! Turns exchange-supplied numeric strings into exact decimals and rounds them
//! to a market's declared precision without ever passing through binary
//! floating point.
//!
//! ## Features
//!
//! - **Exact arithmetic** on decimal literals (add, subtract, multiply exact;
//!   division truncated at a stated scale)
//! - **Three precision conventions**: decimal places, significant digits,
//!   tick size
//! - **Two rounding policies**: round half away from zero, truncate
//! - **Underflow guard**: a non-zero order size never silently becomes zero
//!
//! ## Example
//!
//! ```rust
//! use precise_decimal::prelude::*;
//!
//! // Precision rules resolved once when the market loads
//! let market = MarketPrecision::tick_size_style("0.001", "0.5").unwrap();
//!
//! let price: DecimalValue = "38567.3".parse().unwrap();
//! let amount: DecimalValue = "0.0129".parse().unwrap();
//!
//! let price = price_to_precision(&price, &market).unwrap();
//! let amount = amount_to_precision(&amount, &market).unwrap();
//! assert_eq!(price.to_string(), "38567.5");
//! assert_eq!(amount.to_string(), "0.012");
//!
//! // Cost is exact: no 0.30000000000000004 artifacts
//! let cost = &price * &amount;
//! assert_eq!(cost.to_string(), "462.8100");
//!
//! // Quantities that would round to zero are rejected
//! let dust: DecimalValue = "0.0000001".parse().unwrap();
//! assert!(matches!(
//!     amount_to_precision(&dust, &market),
//!     Err(PreciseError::PrecisionUnderflow { .. })
//! ));
//! ```

pub mod market;
pub mod numeric;
pub mod precision;

// Re-exports for convenience
pub mod prelude {
    pub use crate::market::{
        amount_to_precision, cost_to_precision, currency_to_precision, fee_to_precision,
        price_to_precision, MarketPrecision,
    };
    pub use crate::numeric::{DecimalValue, PreciseError, PreciseResult, QuantityKind};
    pub use crate::precision::{
        decimal_to_precision, decimal_to_precision_str, precision_from_string, PrecisionMode,
        PrecisionSpec, RoundingMode,
    };
}
