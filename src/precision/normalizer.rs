// ============================================================================
// Precision Normalizer
// Reduces an exact decimal to the canonical form a PrecisionSpec demands
// ============================================================================

use super::mode::{PrecisionMode, PrecisionSpec, RoundingMode};
use crate::numeric::{DecimalValue, PreciseResult};

/// Round or truncate `value` as `spec` prescribes.
///
/// Pure and idempotent: applying the same spec to the output returns it
/// unchanged. With `pad` the result carries exactly the digits the spec asks
/// for (`"1.50"`, `"38567.0"`); without it trailing fractional zeros are
/// stripped.
///
/// In tick size mode the padded width is the scale of the step with its
/// trailing zeros removed: a step of `"0.010"` pads to two places (`"1.23"`),
/// the same as `"0.01"`.
///
/// # Example
/// ```
/// use precise_decimal::numeric::DecimalValue;
/// use precise_decimal::precision::{decimal_to_precision, PrecisionSpec};
///
/// let spec = PrecisionSpec::significant_digits(5).unwrap();
/// let value: DecimalValue = "123.456789".parse().unwrap();
/// assert_eq!(decimal_to_precision(&value, &spec).unwrap().to_string(), "123.46");
/// ```
///
/// # Errors
/// Only surfaces arithmetic errors, which a validated spec cannot trigger.
pub fn decimal_to_precision(
    value: &DecimalValue,
    spec: &PrecisionSpec,
) -> PreciseResult<DecimalValue> {
    let round = spec.rounding() == RoundingMode::Round;

    let result = match spec.mode() {
        PrecisionMode::DecimalPlaces(places) => {
            let rounded = value.quantize(i64::from(*places), round);
            if spec.pad() {
                rounded.with_scale(*places)
            } else {
                rounded.normalize()
            }
        },
        PrecisionMode::SignificantDigits(digits) => {
            to_significant_digits(value, *digits, round, spec.pad())
        },
        PrecisionMode::TickSize(step) => to_tick_size(value, step, round, spec.pad())?,
    };

    tracing::trace!("Normalized {} to {} under {:?}", value, result, spec.mode());
    Ok(result)
}

/// String entry point: parse, normalize, render.
pub fn decimal_to_precision_str(literal: &str, spec: &PrecisionSpec) -> PreciseResult<String> {
    let value: DecimalValue = literal.parse()?;
    decimal_to_precision(&value, spec).map(|v| v.to_string())
}

fn to_significant_digits(value: &DecimalValue, digits: u32, round: bool, pad: bool) -> DecimalValue {
    let digits = i64::from(digits);

    if value.is_zero() {
        let zero = DecimalValue::zero();
        return if pad {
            zero.with_scale((digits - 1) as u32)
        } else {
            zero
        };
    }

    let target = digits - 1 - value.magnitude_order();
    let rounded = value.quantize(target, round);

    if !pad {
        return rounded.normalize();
    }

    // A carry (9.99 → 10.0) moves the leading digit one place left.
    let target = digits - 1 - rounded.magnitude_order();
    if target > 0 {
        rounded.with_scale(target as u32)
    } else {
        rounded.with_scale(0)
    }
}

fn to_tick_size(
    value: &DecimalValue,
    step: &DecimalValue,
    round: bool,
    pad: bool,
) -> PreciseResult<DecimalValue> {
    let step = step.normalize();

    // Truncated integer quotient; the remainder decides rounding.
    let mut quotient = value.div_with_scale(&step, 0)?;
    if round {
        let remainder = value.checked_rem(&step)?.abs();
        if &remainder + &remainder >= step {
            let one = DecimalValue::one();
            quotient = if value.is_negative() {
                quotient - one
            } else {
                quotient + one
            };
        }
    }

    let result = &quotient * &step;
    Ok(if pad { result } else { result.normalize() })
}
