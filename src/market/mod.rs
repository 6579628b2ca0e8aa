// ============================================================================
// Market Module
// Per-market precision configuration and the resolver that applies it
// ============================================================================

pub mod config;
pub mod resolver;

pub use config::MarketPrecision;
pub use resolver::{
    amount_to_precision, cost_to_precision, currency_to_precision, fee_to_precision,
    price_to_precision,
};
