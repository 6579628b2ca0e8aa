// ============================================================================
// Precise String Math
// String-in / string-out helpers for combining raw exchange fields
// ============================================================================
//
// Adapters receive prices, sizes and fees as JSON strings and frequently need
// one operation on them (cost = price × amount, net = gross - fee). These
// helpers parse, compute exactly and hand back a trimmed canonical string.

use super::decimal::DecimalValue;
use super::errors::PreciseResult;

fn parse_pair(a: &str, b: &str) -> PreciseResult<(DecimalValue, DecimalValue)> {
    Ok((a.parse()?, b.parse()?))
}

fn render(value: DecimalValue) -> String {
    value.normalize().to_string()
}

pub fn string_add(a: &str, b: &str) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    Ok(render(a + b))
}

pub fn string_sub(a: &str, b: &str) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    Ok(render(a - b))
}

pub fn string_mul(a: &str, b: &str) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    Ok(render(a * b))
}

/// Division truncated to `scale` fractional digits.
pub fn string_div(a: &str, b: &str, scale: u32) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    a.div_with_scale(&b, scale).map(render)
}

pub fn string_mod(a: &str, b: &str) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    a.checked_rem(&b).map(render)
}

pub fn string_neg(a: &str) -> PreciseResult<String> {
    let a: DecimalValue = a.parse()?;
    Ok(render(-a))
}

pub fn string_abs(a: &str) -> PreciseResult<String> {
    let a: DecimalValue = a.parse()?;
    Ok(render(a.abs()))
}

pub fn string_min(a: &str, b: &str) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    Ok(render(a.min(b)))
}

pub fn string_max(a: &str, b: &str) -> PreciseResult<String> {
    let (a, b) = parse_pair(a, b)?;
    Ok(render(a.max(b)))
}

pub fn string_eq(a: &str, b: &str) -> PreciseResult<bool> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a == b)
}

pub fn string_gt(a: &str, b: &str) -> PreciseResult<bool> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a > b)
}

pub fn string_ge(a: &str, b: &str) -> PreciseResult<bool> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a >= b)
}

pub fn string_lt(a: &str, b: &str) -> PreciseResult<bool> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a < b)
}

pub fn string_le(a: &str, b: &str) -> PreciseResult<bool> {
    let (a, b) = parse_pair(a, b)?;
    Ok(a <= b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::PreciseError;

    #[test]
    fn test_cost_from_exchange_strings() {
        assert_eq!(string_mul("38567.5", "0.002").unwrap(), "77.135");
        assert_eq!(string_mul("0.1", "3").unwrap(), "0.3");
    }

    #[test]
    fn test_net_withdrawal_amount() {
        assert_eq!(string_sub("1.00000000", "0.0005").unwrap(), "0.9995");
        assert_eq!(string_add("0.1", "0.2").unwrap(), "0.3");
    }

    #[test]
    fn test_fee_direction() {
        assert_eq!(string_neg("0.00012").unwrap(), "-0.00012");
        assert_eq!(string_neg("-0.00012").unwrap(), "0.00012");
        assert_eq!(string_abs("-5.5").unwrap(), "5.5");
    }

    #[test]
    fn test_div_and_mod() {
        assert_eq!(string_div("1", "3", 8).unwrap(), "0.33333333");
        assert_eq!(string_div("10", "4", 18).unwrap(), "2.5");
        assert_eq!(string_mod("7.5", "2").unwrap(), "1.5");
        assert_eq!(string_div("1", "0", 8), Err(PreciseError::DivisionByZero));
        assert_eq!(string_div("1", "0.5", u32::MAX), Err(PreciseError::Overflow));
    }

    #[test]
    fn test_comparisons() {
        assert!(string_eq("0", "-0").unwrap());
        assert!(string_eq("1.50", "1.5").unwrap());
        assert!(string_gt("0.30000000000000004", "0.3").unwrap());
        assert!(string_ge("2", "2.0").unwrap());
        assert!(string_lt("-1", "0").unwrap());
        assert!(string_le("-1", "-1").unwrap());
        assert_eq!(string_min("3", "2.5").unwrap(), "2.5");
        assert_eq!(string_max("3", "2.5").unwrap(), "3");
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(
            string_add("1", "abc"),
            Err(PreciseError::InvalidNumericLiteral("abc".to_string()))
        );
    }
}
