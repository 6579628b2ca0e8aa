// ============================================================================
// Market Precision Resolver
// Binds the normalizer to a market's precision rules
// ============================================================================

use super::config::MarketPrecision;
use crate::numeric::{DecimalValue, PreciseError, PreciseResult, QuantityKind};
use crate::precision::{decimal_to_precision, PrecisionSpec, RoundingMode};

/// Normalize, refusing to turn a non-zero quantity into zero.
fn normalize_guarded(
    kind: QuantityKind,
    value: &DecimalValue,
    spec: &PrecisionSpec,
) -> PreciseResult<DecimalValue> {
    let normalized = decimal_to_precision(value, spec)?;
    if normalized.is_zero() && !value.is_zero() {
        tracing::debug!(
            "Rejecting {} {}: rounds to zero under {:?}",
            kind,
            value,
            spec.mode()
        );
        return Err(PreciseError::PrecisionUnderflow {
            kind,
            value: value.to_string(),
        });
    }
    Ok(normalized)
}

/// Order size at the market's amount precision.
///
/// # Errors
/// `PrecisionUnderflow` if a non-zero amount would be sent as zero.
pub fn amount_to_precision(
    value: &DecimalValue,
    market: &MarketPrecision,
) -> PreciseResult<DecimalValue> {
    normalize_guarded(QuantityKind::Amount, value, market.amount())
}

/// Order price at the market's price precision.
///
/// # Errors
/// `PrecisionUnderflow` if a non-zero price would be sent as zero.
pub fn price_to_precision(
    value: &DecimalValue,
    market: &MarketPrecision,
) -> PreciseResult<DecimalValue> {
    normalize_guarded(QuantityKind::Price, value, market.price())
}

/// Quote-currency cost at the price precision, always truncated so a cost
/// never exceeds what price × amount allows.
///
/// # Errors
/// `PrecisionUnderflow` if a non-zero cost would be sent as zero.
pub fn cost_to_precision(
    value: &DecimalValue,
    market: &MarketPrecision,
) -> PreciseResult<DecimalValue> {
    let spec = market.price().clone().with_rounding(RoundingMode::Truncate);
    normalize_guarded(QuantityKind::Cost, value, &spec)
}

/// Fee at the price precision, always rounded.
///
/// Unguarded: a fee below the smallest increment legitimately becomes zero.
pub fn fee_to_precision(
    value: &DecimalValue,
    market: &MarketPrecision,
) -> PreciseResult<DecimalValue> {
    let spec = market.price().clone().with_rounding(RoundingMode::Round);
    decimal_to_precision(value, &spec)
}

/// Balance, withdrawal or transfer amount at a currency's precision.
///
/// # Errors
/// `PrecisionUnderflow` if a non-zero amount would be sent as zero.
pub fn currency_to_precision(
    value: &DecimalValue,
    currency: &PrecisionSpec,
) -> PreciseResult<DecimalValue> {
    normalize_guarded(QuantityKind::Currency, value, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::PrecisionMode;

    fn dec(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    fn spot() -> MarketPrecision {
        MarketPrecision::decimal_places_style(4, 2).unwrap()
    }

    #[test]
    fn test_amount_truncates() {
        let market = spot();
        assert_eq!(
            amount_to_precision(&dec("1.23456789"), &market).unwrap().to_string(),
            "1.2345"
        );
        assert_eq!(
            amount_to_precision(&dec("2.00000"), &market).unwrap().to_string(),
            "2"
        );
    }

    #[test]
    fn test_amount_underflow() {
        let market = spot();
        let err = amount_to_precision(&dec("0.00000001"), &market).unwrap_err();
        assert_eq!(
            err,
            PreciseError::PrecisionUnderflow {
                kind: QuantityKind::Amount,
                value: "0.00000001".to_string(),
            }
        );
    }

    #[test]
    fn test_amount_underflow_with_rounding() {
        let market = spot().with_amount(PrecisionSpec::decimal_places(4).unwrap());
        assert!(matches!(
            amount_to_precision(&dec("0.00000001"), &market),
            Err(PreciseError::PrecisionUnderflow { .. })
        ));
        assert_eq!(
            amount_to_precision(&dec("0.00005"), &market).unwrap().to_string(),
            "0.0001"
        );
    }

    #[test]
    fn test_zero_input_is_not_underflow() {
        let market = spot();
        assert!(amount_to_precision(&dec("0"), &market).unwrap().is_zero());
        assert!(price_to_precision(&dec("0.000"), &market).unwrap().is_zero());
    }

    #[test]
    fn test_price_rounds() {
        let market = spot();
        assert_eq!(
            price_to_precision(&dec("38567.125"), &market).unwrap().to_string(),
            "38567.13"
        );
        assert!(matches!(
            price_to_precision(&dec("0.001"), &market),
            Err(PreciseError::PrecisionUnderflow {
                kind: QuantityKind::Price,
                ..
            })
        ));
    }

    #[test]
    fn test_price_tick_size_market() {
        let market = MarketPrecision::tick_size_style("0.001", "0.5")
            .unwrap()
            .with_padding(true);
        assert_eq!(
            price_to_precision(&dec("38567.3"), &market).unwrap().to_string(),
            "38567.5"
        );
        assert_eq!(
            price_to_precision(&dec("38567.2"), &market).unwrap().to_string(),
            "38567.0"
        );
        assert_eq!(
            amount_to_precision(&dec("0.0129"), &market).unwrap().to_string(),
            "0.012"
        );
    }

    #[test]
    fn test_cost_truncates_fee_rounds() {
        let market = spot();
        assert_eq!(
            cost_to_precision(&dec("77.139"), &market).unwrap().to_string(),
            "77.13"
        );
        assert_eq!(
            fee_to_precision(&dec("0.077135"), &market).unwrap().to_string(),
            "0.08"
        );
        assert!(fee_to_precision(&dec("0.001"), &market).unwrap().is_zero());
        assert!(matches!(
            cost_to_precision(&dec("0.009"), &market),
            Err(PreciseError::PrecisionUnderflow {
                kind: QuantityKind::Cost,
                ..
            })
        ));
    }

    #[test]
    fn test_currency_to_precision() {
        let btc = PrecisionSpec::new(PrecisionMode::DecimalPlaces(8), RoundingMode::Round, true)
            .unwrap();
        assert_eq!(
            currency_to_precision(&dec("0.123456789"), &btc).unwrap().to_string(),
            "0.12345679"
        );
        assert_eq!(
            currency_to_precision(&dec("1"), &btc).unwrap().to_string(),
            "1.00000000"
        );
        assert!(matches!(
            currency_to_precision(&dec("0.000000001"), &btc),
            Err(PreciseError::PrecisionUnderflow {
                kind: QuantityKind::Currency,
                ..
            })
        ));
    }

    #[test]
    fn test_market_is_not_modified() {
        let market = spot();
        let before = market.clone();
        let _ = cost_to_precision(&dec("1.239"), &market).unwrap();
        let _ = fee_to_precision(&dec("1.239"), &market).unwrap();
        assert_eq!(market, before);
    }
}
