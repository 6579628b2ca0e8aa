// ============================================================================
// Decimal Value
// Exact arbitrary-precision decimal parsed from numeric string literals
// ============================================================================

use super::digits::{self, Digits};
use super::errors::{PreciseError, PreciseResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Fractional digits kept by [`DecimalValue::checked_div`].
pub const DEFAULT_DIVISION_SCALE: u32 = 18;

/// Largest exponent magnitude accepted in `1.5e-8` style literals.
pub const MAX_EXPONENT: u32 = 1024;

/// Largest fractional scale [`DecimalValue::div_with_scale`] will compute.
pub const MAX_DIVISION_SCALE: u32 = 1024;

/// Exact decimal number: `(-1)^sign × digits × 10^-scale`.
///
/// `digits` is the unscaled coefficient with no leading zeros. Trailing
/// fractional zeros are kept, so `"1.50"` and `"1.5"` render differently but
/// compare equal. Zero is never negative.
///
/// Addition, subtraction and multiplication are exact and available through
/// the standard operators. Division is the only lossy operation and is an
/// explicit method with a documented truncation scale.
///
/// # Example
/// ```
/// use precise_decimal::numeric::DecimalValue;
///
/// let price: DecimalValue = "0.1".parse().unwrap();
/// let amount: DecimalValue = "3".parse().unwrap();
/// assert_eq!((&price * &amount).to_string(), "0.3");
/// ```
#[derive(Clone)]
pub struct DecimalValue {
    negative: bool,
    digits: Digits,
    scale: u32,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    pub(crate) fn from_parts(negative: bool, mut digits: Digits, scale: u32) -> Self {
        digits::trim_leading(&mut digits);
        let negative = negative && !digits::is_zero(&digits);
        Self {
            negative,
            digits,
            scale,
        }
    }

    /// Zero with no fractional digits.
    pub fn zero() -> Self {
        Self::from_parts(false, digits::zero(), 0)
    }

    /// One with no fractional digits.
    pub fn one() -> Self {
        Self::from(1u64)
    }

    /// Accept a finite `f64` through its shortest round-trip decimal form.
    ///
    /// `0.1` becomes exactly `"0.1"`, not the binary expansion of the nearest
    /// double.
    ///
    /// # Errors
    /// Returns `InvalidNumericLiteral` for NaN and infinities.
    pub fn from_f64(value: f64) -> PreciseResult<Self> {
        if !value.is_finite() {
            return Err(PreciseError::InvalidNumericLiteral(value.to_string()));
        }
        // Display for f64 never uses exponent notation.
        format!("{}", value).parse()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digits after the decimal point.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Unscaled coefficient digits, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Power of ten of the leading non-zero digit (`123.4` → 2, `0.05` → -2).
    pub(crate) fn magnitude_order(&self) -> i64 {
        self.digits.len() as i64 - 1 - i64::from(self.scale)
    }

    // ========================================================================
    // Scale Manipulation
    // ========================================================================

    /// Strip insignificant trailing fractional zeros (`"1.500"` → `"1.5"`).
    pub fn normalize(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let trailing = self
            .digits
            .iter()
            .rev()
            .take_while(|&&d| d == 0)
            .count()
            .min(self.scale as usize);
        let keep = self.digits.len() - trailing;
        Self::from_parts(
            self.negative,
            Digits::from_slice(&self.digits[..keep]),
            self.scale - trailing as u32,
        )
    }

    /// Re-render with exactly `scale` fractional digits.
    ///
    /// Only pads with zeros or drops trailing zeros; callers must have rounded
    /// away any significant digit beyond `scale` first.
    pub(crate) fn with_scale(&self, scale: u32) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Self::from_parts(
                self.negative,
                digits::shift_left(&self.digits, (scale - self.scale) as usize),
                scale,
            ),
            Ordering::Less => {
                if self.is_zero() {
                    return Self::from_parts(false, digits::zero(), scale);
                }
                let drop = (self.scale - scale) as usize;
                debug_assert!(self.digits[self.digits.len() - drop..]
                    .iter()
                    .all(|&d| d == 0));
                let keep = self.digits.len() - drop;
                Self::from_parts(self.negative, Digits::from_slice(&self.digits[..keep]), scale)
            },
        }
    }

    /// Cut the value at `target_scale` fractional digits, negative targets
    /// meaning positions left of the decimal point.
    ///
    /// With `round_half_away` the first discarded digit decides: five or more
    /// bumps the last kept digit away from zero. Without it the discarded
    /// digits are dropped (truncation toward zero). Values that already fit are
    /// returned unchanged.
    pub(crate) fn quantize(&self, target_scale: i64, round_half_away: bool) -> Self {
        let scale = i64::from(self.scale);
        if target_scale >= scale {
            return self.clone();
        }

        let drop = (scale - target_scale) as usize;
        let len = self.digits.len();
        let (mut kept, first_dropped) = match drop.cmp(&len) {
            Ordering::Less => (
                Digits::from_slice(&self.digits[..len - drop]),
                self.digits[len - drop],
            ),
            Ordering::Equal => (digits::zero(), self.digits[0]),
            Ordering::Greater => (digits::zero(), 0),
        };

        if round_half_away && first_dropped >= 5 {
            kept = digits::add(&kept, &[1]);
        }

        if target_scale < 0 {
            let zeros = target_scale.unsigned_abs() as usize;
            Self::from_parts(self.negative, digits::shift_left(&kept, zeros), 0)
        } else {
            Self::from_parts(self.negative, kept, target_scale as u32)
        }
    }

    /// Coefficients of both operands rescaled to their common (larger) scale.
    fn align(&self, other: &Self) -> (Digits, Digits, u32) {
        let scale = self.scale.max(other.scale);
        let a = digits::shift_left(&self.digits, (scale - self.scale) as usize);
        let b = digits::shift_left(&other.digits, (scale - other.scale) as usize);
        (a, b, scale)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Signed addition of `rhs` with its sign overridden by `rhs_negative`.
    fn combine(&self, rhs: &Self, rhs_negative: bool) -> Self {
        let (a, b, scale) = self.align(rhs);

        if self.negative == rhs_negative {
            return Self::from_parts(self.negative, digits::add(&a, &b), scale);
        }

        match digits::cmp(&a, &b) {
            Ordering::Equal => Self::from_parts(false, digits::zero(), scale),
            Ordering::Greater => Self::from_parts(self.negative, digits::sub(&a, &b), scale),
            Ordering::Less => Self::from_parts(rhs_negative, digits::sub(&b, &a), scale),
        }
    }

    fn product(&self, rhs: &Self) -> Self {
        Self::from_parts(
            self.negative != rhs.negative,
            digits::mul(&self.digits, &rhs.digits),
            self.scale + rhs.scale,
        )
    }

    /// Division truncated to [`DEFAULT_DIVISION_SCALE`] fractional digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> PreciseResult<Self> {
        self.div_with_scale(rhs, DEFAULT_DIVISION_SCALE)
    }

    /// Long division stopping after `scale` fractional digits.
    ///
    /// The quotient is truncated toward zero, never rounded, and trailing zeros
    /// of the truncated quotient are stripped (`6 / 2` is `"3"`).
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, `Overflow` if `scale`
    /// exceeds [`MAX_DIVISION_SCALE`].
    pub fn div_with_scale(&self, rhs: &Self, scale: u32) -> PreciseResult<Self> {
        if rhs.is_zero() {
            return Err(PreciseError::DivisionByZero);
        }
        if scale > MAX_DIVISION_SCALE {
            return Err(PreciseError::Overflow);
        }

        // a/b = (A × 10^sb) / (B × 10^sa); scaled by 10^scale to keep digits.
        let shift = rhs.scale.checked_add(scale).ok_or(PreciseError::Overflow)?;
        let numerator = digits::shift_left(&self.digits, shift as usize);
        let denominator = digits::shift_left(&rhs.digits, self.scale as usize);
        let (quotient, _) = digits::div_rem(&numerator, &denominator);

        Ok(Self::from_parts(self.negative != rhs.negative, quotient, scale).normalize())
    }

    /// Remainder of truncating division; the sign follows `self`.
    ///
    /// Exact: both operands are aligned to a common scale first.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> PreciseResult<Self> {
        if rhs.is_zero() {
            return Err(PreciseError::DivisionByZero);
        }
        let (a, b, scale) = self.align(rhs);
        let (_, remainder) = digits::div_rem(&a, &b);
        Ok(Self::from_parts(self.negative, remainder, scale))
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            digits: self.digits.clone(),
            scale: self.scale,
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    fn sign_rank(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalValue {}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = (self.sign_rank(), other.sign_rank());
        if left != right || left == 0 {
            return left.cmp(&right);
        }

        let (a, b, _) = self.align(other);
        let magnitude = digits::cmp(&a, &b);
        if self.negative {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl Hash for DecimalValue {
    // Must agree with Eq, so hash the trailing-zero-free form.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.negative.hash(state);
        normalized.digits.as_slice().hash(state);
        normalized.scale.hash(state);
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &DecimalValue {
    type Output = DecimalValue;

    fn neg(self) -> Self::Output {
        DecimalValue::from_parts(!self.negative, self.digits.clone(), self.scale)
    }
}

macro_rules! exact_binop {
    ($trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl $trait<&DecimalValue> for &DecimalValue {
            type Output = DecimalValue;

            fn $method(self, rhs: &DecimalValue) -> Self::Output {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl $trait for DecimalValue {
            type Output = DecimalValue;

            fn $method(self, rhs: DecimalValue) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&DecimalValue> for DecimalValue {
            type Output = DecimalValue;

            fn $method(self, rhs: &DecimalValue) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    };
}

exact_binop!(Add, add, |a, b| a.combine(b, b.negative));
exact_binop!(Sub, sub, |a, b| a.combine(b, !b.negative));
exact_binop!(Mul, mul, |a, b| a.product(b));

// ============================================================================
// Conversions
// ============================================================================

impl From<u64> for DecimalValue {
    fn from(value: u64) -> Self {
        Self::from_parts(false, digits::from_u128(u128::from(value)), 0)
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::from_parts(
            value < 0,
            digits::from_u128(u128::from(value.unsigned_abs())),
            0,
        )
    }
}

impl From<rust_decimal::Decimal> for DecimalValue {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl DecimalValue {
    /// Convert from rust_decimal::Decimal, keeping its scale.
    pub fn from_decimal(value: rust_decimal::Decimal) -> Self {
        let mantissa = value.mantissa();
        Self::from_parts(
            mantissa < 0,
            digits::from_u128(mantissa.unsigned_abs()),
            value.scale(),
        )
    }

    /// Convert to rust_decimal::Decimal for code that computes with it.
    ///
    /// # Errors
    /// Returns `Overflow` if the coefficient needs more than 96 bits or more
    /// than 28 fractional digits remain after trailing zeros are stripped.
    pub fn to_decimal(&self) -> PreciseResult<rust_decimal::Decimal> {
        let value = if self.scale > 28 {
            self.normalize()
        } else {
            self.clone()
        };
        let magnitude = digits::to_u128(&value.digits).ok_or(PreciseError::Overflow)?;
        let magnitude = i128::try_from(magnitude).map_err(|_| PreciseError::Overflow)?;
        let mantissa = if value.negative { -magnitude } else { magnitude };
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, value.scale)
            .map_err(|_| PreciseError::Overflow)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.digits.iter().map(|&d| (b'0' + d) as char).collect();
        let scale = self.scale as usize;

        if self.negative {
            f.write_str("-")?;
        }

        if scale == 0 {
            f.write_str(&text)
        } else if text.len() > scale {
            let (int_part, frac_part) = text.split_at(text.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{:0>width$}", text, width = scale)
        }
    }
}

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue({}, scale={})", self, self.scale)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for DecimalValue {
    type Err = PreciseError;

    /// Parse `[sign] digits ['.' digits] [(e|E) [sign] digits]`.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.0010" -> -0.0010
    /// - "1.5e-3" -> 0.0015
    /// - "2E+2" -> 200
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PreciseError::InvalidNumericLiteral(s.to_string());

        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) if all_digits(frac_part) => (int_part, frac_part),
            Some(_) => return Err(invalid()),
            None => (mantissa, ""),
        };
        if !all_digits(int_part) {
            return Err(invalid());
        }

        let exponent = match exponent {
            None => 0i64,
            Some(exp) => {
                let (exp_negative, exp_digits) = match exp.as_bytes().first() {
                    Some(b'-') => (true, &exp[1..]),
                    Some(b'+') => (false, &exp[1..]),
                    _ => (false, exp),
                };
                if !all_digits(exp_digits) {
                    return Err(invalid());
                }
                let significant = exp_digits.trim_start_matches('0');
                if significant.len() > 5 {
                    return Err(invalid());
                }
                let magnitude: u32 = if significant.is_empty() {
                    0
                } else {
                    significant.parse().map_err(|_| invalid())?
                };
                if magnitude > MAX_EXPONENT {
                    return Err(invalid());
                }
                if exp_negative {
                    -i64::from(magnitude)
                } else {
                    i64::from(magnitude)
                }
            },
        };

        let coefficient: Digits = int_part
            .bytes()
            .chain(frac_part.bytes())
            .map(|b| b - b'0')
            .collect();

        let scale = frac_part.len() as i64 - exponent;
        if scale < 0 {
            let zeros = scale.unsigned_abs() as usize;
            Ok(Self::from_parts(
                negative,
                digits::shift_left(&coefficient, zeros),
                0,
            ))
        } else {
            let scale = u32::try_from(scale).map_err(|_| invalid())?;
            Ok(Self::from_parts(negative, coefficient, scale))
        }
    }
}

impl TryFrom<&str> for DecimalValue {
    type Error = PreciseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Serde (as canonical strings)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
