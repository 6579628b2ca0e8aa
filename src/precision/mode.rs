// ============================================================================
// Precision & Rounding Model
// Validated, immutable descriptions of how a quantity must be rounded
// ============================================================================

use crate::numeric::{DecimalValue, PreciseError, PreciseResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound on `DecimalPlaces`/`SignificantDigits` counts.
pub const MAX_PRECISION_DIGITS: u32 = 64;

// ============================================================================
// Rounding Mode
// ============================================================================

/// How digits beyond the target precision are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Nearest, ties away from zero (`1.005` → `1.01`, `-1.005` → `-1.01`)
    Round,
    /// Toward zero (`1.999` → `1.99`)
    Truncate,
}

// ============================================================================
// Precision Mode
// ============================================================================

/// The three conventions exchanges use to disclose precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionMode {
    /// Fixed count of digits after the decimal point
    /// Use case: most spot exchanges ("price precision 2")
    DecimalPlaces(u32),

    /// Fixed count of meaningful digits regardless of magnitude
    /// Use case: exchanges quoting "5 significant figures"
    SignificantDigits(u32),

    /// Valid values are exact multiples of the step
    /// Use case: futures venues with a minimum price increment
    TickSize(DecimalValue),
}

impl PrecisionMode {
    /// Tick size mode from a step literal such as `"0.5"` or `"1e-8"`.
    ///
    /// # Errors
    /// `InvalidNumericLiteral` for a malformed step, `UnsupportedPrecisionMode`
    /// for a step that is not strictly positive.
    pub fn tick_size_from_str(step: &str) -> PreciseResult<Self> {
        let mode = Self::TickSize(step.parse()?);
        mode.validate()?;
        Ok(mode)
    }

    /// Validate the mode parameters
    pub fn validate(&self) -> PreciseResult<()> {
        match self {
            Self::DecimalPlaces(places) => {
                if *places > MAX_PRECISION_DIGITS {
                    return Err(PreciseError::UnsupportedPrecisionMode(format!(
                        "decimal places {} exceeds {}",
                        places, MAX_PRECISION_DIGITS
                    )));
                }
            },
            Self::SignificantDigits(digits) => {
                if *digits == 0 {
                    return Err(PreciseError::UnsupportedPrecisionMode(
                        "significant digits must be at least 1".to_string(),
                    ));
                }
                if *digits > MAX_PRECISION_DIGITS {
                    return Err(PreciseError::UnsupportedPrecisionMode(format!(
                        "significant digits {} exceeds {}",
                        digits, MAX_PRECISION_DIGITS
                    )));
                }
            },
            Self::TickSize(step) => {
                if !step.is_positive() {
                    return Err(PreciseError::UnsupportedPrecisionMode(format!(
                        "tick size must be positive, got {}",
                        step
                    )));
                }
            },
        }
        Ok(())
    }
}

/// Fractional digits a precision literal carries once trailing zeros are
/// ignored: `"0.001"` → 3, `"1e-8"` → 8, `"10"` → 0.
///
/// Market loaders use this to turn a tick-style disclosure into a
/// `DecimalPlaces` count.
pub fn precision_from_string(literal: &str) -> PreciseResult<u32> {
    let value: DecimalValue = literal.parse()?;
    Ok(value.normalize().scale())
}

// ============================================================================
// Precision Spec
// ============================================================================

/// A validated precision rule for one quantity.
///
/// Fields are private so every instance has passed [`PrecisionMode::validate`];
/// the `with_*` methods return modified copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPrecisionSpec"))]
pub struct PrecisionSpec {
    mode: PrecisionMode,
    rounding: RoundingMode,
    pad: bool,
}

impl PrecisionSpec {
    /// Create a spec from its parts.
    ///
    /// # Errors
    /// Returns `UnsupportedPrecisionMode` if `mode` fails validation.
    pub fn new(mode: PrecisionMode, rounding: RoundingMode, pad: bool) -> PreciseResult<Self> {
        mode.validate()?;
        Ok(Self {
            mode,
            rounding,
            pad,
        })
    }

    /// Rounding to `places` fractional digits, trailing zeros trimmed.
    pub fn decimal_places(places: u32) -> PreciseResult<Self> {
        Self::new(PrecisionMode::DecimalPlaces(places), RoundingMode::Round, false)
    }

    /// Rounding to `digits` significant digits, trailing zeros trimmed.
    pub fn significant_digits(digits: u32) -> PreciseResult<Self> {
        Self::new(
            PrecisionMode::SignificantDigits(digits),
            RoundingMode::Round,
            false,
        )
    }

    /// Rounding to the nearest multiple of `step`, trailing zeros trimmed.
    pub fn tick_size(step: DecimalValue) -> PreciseResult<Self> {
        Self::new(PrecisionMode::TickSize(step), RoundingMode::Round, false)
    }

    /// Copy with a different rounding policy
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Copy with a different padding policy
    pub fn with_padding(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    #[inline]
    pub fn mode(&self) -> &PrecisionMode {
        &self.mode
    }

    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    #[inline]
    pub fn pad(&self) -> bool {
        self.pad
    }
}

/// Unvalidated wire form of [`PrecisionMode`]; the tick stays a literal so a
/// malformed step surfaces as `InvalidNumericLiteral`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub(crate) enum RawPrecisionMode {
    DecimalPlaces(u32),
    SignificantDigits(u32),
    TickSize(String),
}

/// Unvalidated wire form; deserialization goes through `PrecisionSpec::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub(crate) struct RawPrecisionSpec {
    mode: RawPrecisionMode,
    rounding: RoundingMode,
    #[serde(default)]
    pad: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPrecisionSpec> for PrecisionSpec {
    type Error = PreciseError;

    fn try_from(raw: RawPrecisionSpec) -> Result<Self, Self::Error> {
        let mode = match raw.mode {
            RawPrecisionMode::DecimalPlaces(places) => PrecisionMode::DecimalPlaces(places),
            RawPrecisionMode::SignificantDigits(digits) => {
                PrecisionMode::SignificantDigits(digits)
            },
            RawPrecisionMode::TickSize(step) => PrecisionMode::TickSize(step.parse()?),
        };
        Self::new(mode, raw.rounding, raw.pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_valid_modes() {
        assert!(PrecisionMode::DecimalPlaces(0).validate().is_ok());
        assert!(PrecisionMode::DecimalPlaces(8).validate().is_ok());
        assert!(PrecisionMode::SignificantDigits(5).validate().is_ok());
        assert!(PrecisionMode::TickSize(dec("0.5")).validate().is_ok());
    }

    #[test]
    fn test_invalid_modes() {
        for mode in [
            PrecisionMode::SignificantDigits(0),
            PrecisionMode::DecimalPlaces(MAX_PRECISION_DIGITS + 1),
            PrecisionMode::SignificantDigits(MAX_PRECISION_DIGITS + 1),
            PrecisionMode::TickSize(dec("0")),
            PrecisionMode::TickSize(dec("-0.01")),
        ] {
            assert!(
                matches!(
                    mode.validate(),
                    Err(PreciseError::UnsupportedPrecisionMode(_))
                ),
                "{mode:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_tick_size_from_str() {
        assert_eq!(
            PrecisionMode::tick_size_from_str("0.5").unwrap(),
            PrecisionMode::TickSize(dec("0.5"))
        );
        assert!(matches!(
            PrecisionMode::tick_size_from_str("half"),
            Err(PreciseError::InvalidNumericLiteral(_))
        ));
        assert!(matches!(
            PrecisionMode::tick_size_from_str("0.000"),
            Err(PreciseError::UnsupportedPrecisionMode(_))
        ));
    }

    #[test]
    fn test_spec_construction() {
        let spec = PrecisionSpec::decimal_places(2)
            .unwrap()
            .with_rounding(RoundingMode::Truncate)
            .with_padding(true);
        assert_eq!(spec.mode(), &PrecisionMode::DecimalPlaces(2));
        assert_eq!(spec.rounding(), RoundingMode::Truncate);
        assert!(spec.pad());

        assert!(PrecisionSpec::significant_digits(0).is_err());
        assert!(PrecisionSpec::tick_size(dec("-1")).is_err());
    }

    #[test]
    fn test_precision_from_string() {
        assert_eq!(precision_from_string("0.001").unwrap(), 3);
        assert_eq!(precision_from_string("0.00100").unwrap(), 3);
        assert_eq!(precision_from_string("1e-8").unwrap(), 8);
        assert_eq!(precision_from_string("10").unwrap(), 0);
        assert_eq!(precision_from_string("0.5").unwrap(), 1);
        assert!(precision_from_string("").is_err());
    }

    #[test]
    fn test_specs_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrecisionSpec>();
        assert_send_sync::<PrecisionMode>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_spec_serde_validates() {
        let spec: PrecisionSpec = serde_json::from_str(
            r#"{"mode":{"TickSize":"0.5"},"rounding":"Round","pad":true}"#,
        )
        .unwrap();
        assert_eq!(spec.mode(), &PrecisionMode::TickSize(dec("0.5")));
        assert!(spec.pad());

        let rejected: Result<PrecisionSpec, _> =
            serde_json::from_str(r#"{"mode":{"TickSize":"0"},"rounding":"Round"}"#);
        assert!(rejected.is_err());

        let json = serde_json::to_string(&spec).unwrap();
        let back: PrecisionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
