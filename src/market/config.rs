// ============================================================================
// Market Precision Configuration
// Per-market amount and price precision, resolved once at market load
// ============================================================================

use crate::numeric::PreciseResult;
use crate::precision::{PrecisionMode, PrecisionSpec, RoundingMode};

#[cfg(feature = "serde")]
use crate::numeric::PreciseError;
#[cfg(feature = "serde")]
use crate::precision::mode::RawPrecisionSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision rules for one market.
///
/// Built by the market-loading layer from the exchange's disclosure and then
/// only read. A metadata refresh builds a new value instead of editing this
/// one; the `with_*` methods consume and return.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarketPrecision {
    /// Rule for order sizes (base currency amounts)
    amount: PrecisionSpec,

    /// Rule for prices (quote currency per unit)
    price: PrecisionSpec,
}

impl MarketPrecision {
    /// Create a configuration from the two specs
    pub fn new(amount: PrecisionSpec, price: PrecisionSpec) -> Self {
        Self { amount, price }
    }

    /// Builder method: replace the amount rule
    pub fn with_amount(mut self, amount: PrecisionSpec) -> Self {
        self.amount = amount;
        self
    }

    /// Builder method: replace the price rule
    pub fn with_price(mut self, price: PrecisionSpec) -> Self {
        self.price = price;
        self
    }

    /// Builder method: pad both rules' output to full width
    pub fn with_padding(self, pad: bool) -> Self {
        let amount = self.amount.with_padding(pad);
        let price = self.price.with_padding(pad);
        Self { amount, price }
    }

    #[inline]
    pub fn amount(&self) -> &PrecisionSpec {
        &self.amount
    }

    #[inline]
    pub fn price(&self) -> &PrecisionSpec {
        &self.price
    }

    /// Parse a JSON market precision document.
    ///
    /// ```json
    /// {"amount": {"mode": {"DecimalPlaces": 4}, "rounding": "Truncate"},
    ///  "price":  {"mode": {"TickSize": "0.5"}, "rounding": "Round", "pad": true}}
    /// ```
    ///
    /// # Errors
    /// `InvalidNumericLiteral` for a malformed tick, `UnsupportedPrecisionMode`
    /// for a mode that fails validation or a document of the wrong shape.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> PreciseResult<Self> {
        let raw: RawMarketPrecision = serde_json::from_str(json).map_err(|err| {
            PreciseError::UnsupportedPrecisionMode(format!(
                "malformed market precision config: {}",
                err
            ))
        })?;

        let amount = PrecisionSpec::try_from(raw.amount);
        let price = PrecisionSpec::try_from(raw.price);
        match (amount, price) {
            (Ok(amount), Ok(price)) => Ok(Self::new(amount, price)),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("Rejected market precision config: {}", err);
                Err(err)
            },
        }
    }
}

/// Document shape read by [`MarketPrecision::from_json`], before validation.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMarketPrecision {
    amount: RawPrecisionSpec,
    price: RawPrecisionSpec,
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

// Presets truncate amounts and round prices: an order never asks for more
// size than requested, while prices snap to the nearest valid level.
impl MarketPrecision {
    /// Decimal-places exchange (most spot venues)
    /// - Amount: `amount_places` fractional digits, truncated
    /// - Price: `price_places` fractional digits, rounded
    pub fn decimal_places_style(amount_places: u32, price_places: u32) -> PreciseResult<Self> {
        Ok(Self::new(
            PrecisionSpec::new(
                PrecisionMode::DecimalPlaces(amount_places),
                RoundingMode::Truncate,
                false,
            )?,
            PrecisionSpec::new(
                PrecisionMode::DecimalPlaces(price_places),
                RoundingMode::Round,
                false,
            )?,
        ))
    }

    /// Significant-digits exchange
    /// - Amount: `amount_digits` significant digits, truncated
    /// - Price: `price_digits` significant digits, rounded
    pub fn significant_digits_style(amount_digits: u32, price_digits: u32) -> PreciseResult<Self> {
        Ok(Self::new(
            PrecisionSpec::new(
                PrecisionMode::SignificantDigits(amount_digits),
                RoundingMode::Truncate,
                false,
            )?,
            PrecisionSpec::new(
                PrecisionMode::SignificantDigits(price_digits),
                RoundingMode::Round,
                false,
            )?,
        ))
    }

    /// Tick-size exchange (futures venues, step/tick filters)
    /// - Amount: multiples of `amount_step`, truncated
    /// - Price: multiples of `price_tick`, rounded
    pub fn tick_size_style(amount_step: &str, price_tick: &str) -> PreciseResult<Self> {
        Ok(Self::new(
            PrecisionSpec::new(
                PrecisionMode::tick_size_from_str(amount_step)?,
                RoundingMode::Truncate,
                false,
            )?,
            PrecisionSpec::new(
                PrecisionMode::tick_size_from_str(price_tick)?,
                RoundingMode::Round,
                false,
            )?,
        ))
    }
}
