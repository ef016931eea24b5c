//! Pure conversion module for human-readable decimals to fixed-point integers.
//!
//! All math uses `U256` so the full `uint256` range the contract accepts is
//! representable. No async, no network calls.

use std::fmt;

use alloy_primitives::U256;

/// Decimal places used by the exchange contract for every amount, price and quantity.
pub const FIXED_POINT_DECIMALS: u8 = 18;

/// Largest supported number of decimal places (`10^77` still fits in `U256`).
const MAX_DECIMALS: u8 = 77;

/// Errors that can occur during fixed-point scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingError {
    Empty,
    InvalidDecimal { input: String, reason: String },
    TooManyDecimals { input: String, decimals: u8 },
    Overflow { context: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::Empty => write!(f, "Empty decimal input"),
            ScalingError::InvalidDecimal { input, reason } => {
                write!(f, "Invalid decimal '{}': {}", input, reason)
            }
            ScalingError::TooManyDecimals { input, decimals } => {
                write!(f, "'{}' has more than {} fractional digits", input, decimals)
            }
            ScalingError::Overflow { context } => write!(f, "Overflow: {}", context),
        }
    }
}

impl std::error::Error for ScalingError {}

fn pow10(decimals: u8) -> Result<U256, ScalingError> {
    if decimals > MAX_DECIMALS {
        return Err(ScalingError::Overflow {
            context: format!("10^{} overflow", decimals),
        });
    }
    Ok(U256::from(10u64).pow(U256::from(decimals)))
}

fn parse_digits(digits: &str, input: &str) -> Result<U256, ScalingError> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| ScalingError::Overflow {
        context: format!("'{}' does not fit in uint256", input),
    })
}

/// Convert a human-readable decimal string into a fixed-point integer.
///
/// # Conversion math
///
/// ```text
/// raw = whole * 10^decimals + fraction * 10^(decimals - fraction_digits)
/// ```
///
/// Accepts `"5"`, `"2.5"`, `".5"` and `"5."`. Trailing fractional zeros beyond
/// `decimals` are ignored; any other excess precision is rejected rather than
/// truncated. Signs, exponents and separators are rejected.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, ScalingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScalingError::Empty);
    }

    // 1. Split and validate characters
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(ScalingError::InvalidDecimal {
            input: input.to_string(),
            reason: "no digits".to_string(),
        });
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(ScalingError::InvalidDecimal {
            input: input.to_string(),
            reason: "expected an unsigned decimal number".to_string(),
        });
    }

    // 2. Drop insignificant trailing zeros, then check precision
    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(ScalingError::TooManyDecimals {
            input: input.to_string(),
            decimals,
        });
    }

    // 3. Scale
    let whole_raw = parse_digits(whole, input)?
        .checked_mul(pow10(decimals)?)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("{} * 10^{}", whole, decimals),
        })?;
    let fraction_raw = parse_digits(fraction, input)?
        .checked_mul(pow10(decimals - fraction.len() as u8)?)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("0.{} * 10^{}", fraction, decimals),
        })?;

    whole_raw
        .checked_add(fraction_raw)
        .ok_or_else(|| ScalingError::Overflow {
            context: format!("'{}' does not fit in uint256", input),
        })
}

/// Lenient form of [`parse_units`]: empty or unparsable input becomes zero.
///
/// This is the conversion every panel operation uses; a bad form field is
/// sent as `0` rather than rejected.
pub fn to_fixed_or_zero(input: &str, decimals: u8) -> U256 {
    match parse_units(input, decimals) {
        Ok(value) => value,
        Err(ScalingError::Empty) => U256::ZERO,
        Err(e) => {
            tracing::warn!(input, error = %e, "Coercing unparsable amount to zero");
            U256::ZERO
        }
    }
}

/// Format a fixed-point integer as a human-readable decimal string.
///
/// Trailing fractional zeros are trimmed but at least one fractional digit is
/// kept, so `5 * 10^18` at 18 decimals formats as `"5.0"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let Ok(scale) = pow10(decimals) else {
        return value.to_string();
    };
    if decimals == 0 {
        return format!("{}.0", value);
    }

    let whole = value / scale;
    let fraction = value % scale;
    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        format!("{}.0", whole)
    } else {
        format!("{}.{}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e18(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18))
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(parse_units("5", 18).unwrap(), e18(5));
    }

    #[test]
    fn test_fractional_price() {
        // 2.5 * 10^18 = 2_500_000_000_000_000_000
        assert_eq!(
            parse_units("2.5", 18).unwrap(),
            U256::from(2_500_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_leading_and_trailing_dot() {
        assert_eq!(
            parse_units(".5", 18).unwrap(),
            U256::from(500_000_000_000_000_000u128)
        );
        assert_eq!(parse_units("5.", 18).unwrap(), e18(5));
    }

    #[test]
    fn test_smallest_unit() {
        assert_eq!(
            parse_units("0.000000000000000001", 18).unwrap(),
            U256::from(1u64)
        );
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_units("  10 ", 18).unwrap(), e18(10));
    }

    #[test]
    fn test_excess_zero_precision_accepted() {
        assert_eq!(
            parse_units("1.50000000000000000000000", 18).unwrap(),
            parse_units("1.5", 18).unwrap()
        );
    }

    #[test]
    fn test_excess_precision_rejected() {
        let result = parse_units("0.0000000000000000001", 18);
        assert!(matches!(result, Err(ScalingError::TooManyDecimals { .. })));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        for input in ["abc", "-5", "+5", "1e18", "1.2.3", "1,000", ".", "0x10"] {
            let result = parse_units(input, 18);
            assert!(
                matches!(result, Err(ScalingError::InvalidDecimal { .. })),
                "{input:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(parse_units("", 18), Err(ScalingError::Empty));
        assert_eq!(parse_units("   ", 18), Err(ScalingError::Empty));
    }

    #[test]
    fn test_overflow_rejected() {
        // 10^60 * 10^18 exceeds 2^256
        let huge = format!("1{}", "0".repeat(60));
        assert!(matches!(
            parse_units(&huge, 18),
            Err(ScalingError::Overflow { .. })
        ));
    }

    #[test]
    fn test_lenient_conversion_yields_zero() {
        for input in ["", " ", "abc", "-1", "1e3", "..", "0.0000000000000000001"] {
            assert_eq!(to_fixed_or_zero(input, 18), U256::ZERO, "input {input:?}");
        }
        assert_eq!(to_fixed_or_zero("5", 18), e18(5));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(e18(5), 18), "5.0");
        assert_eq!(format_units(U256::from(2_500_000_000_000_000_000u128), 18), "2.5");
        assert_eq!(format_units(U256::from(1u64), 18), "0.000000000000000001");
        assert_eq!(format_units(U256::ZERO, 18), "0.0");
        assert_eq!(format_units(U256::from(42u64), 0), "42.0");
    }

    #[test]
    fn test_round_trip_preserves_value() {
        for input in ["0", "1", "2.5", "10", "0.1", "123456789.000000000000000001", "0.333"] {
            let raw = parse_units(input, 18).unwrap();
            let back = format_units(raw, 18);
            assert_eq!(parse_units(&back, 18).unwrap(), raw, "{input} -> {back}");
        }
    }

    #[test]
    fn test_round_trip_from_raw() {
        for raw in [0u128, 1, 999, 10u128.pow(18), 25 * 10u128.pow(17), u128::MAX] {
            let raw = U256::from(raw);
            assert_eq!(parse_units(&format_units(raw, 18), 18).unwrap(), raw);
        }
        assert_eq!(parse_units(&format_units(U256::MAX, 18), 18).unwrap(), U256::MAX);
    }
}
