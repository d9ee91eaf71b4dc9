//! Human-readable currency amount parsing.
//!
//! Payment amounts travel through the SDK as decimal strings in token units
//! (`"1.50"` USDC). Conversion to the token's integer base units happens once,
//! during hydration, through [`MoneyAmount::round_to`] and
//! [`MoneyAmount::to_base_units`]. [`parse_units`] is the strict form.

use alloy_primitives::U256;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Error returned when a decimal amount cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// The amount string is empty or whitespace.
    #[error("amount is empty")]
    Empty,
    /// The amount string is not a plain decimal number.
    #[error("malformed amount {0:?}")]
    Malformed(String),
    /// The amount is below zero.
    #[error("amount {0} is negative")]
    Negative(String),
    /// The amount has more fractional digits than the token supports.
    #[error("amount {amount} has more than {decimals} fractional digits")]
    TooPrecise {
        /// The offending amount.
        amount: String,
        /// Token decimals.
        decimals: u8,
    },
    /// The scaled amount does not fit in 256 bits.
    #[error("amount {0} overflows base units")]
    Overflow(String),
}

/// A non-negative, human-readable token amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct MoneyAmount(Decimal);

impl MoneyAmount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Returns the inner decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Number of fractional digits after normalization.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.0.normalize().scale()
    }

    /// Rounds to at most `decimals` fractional digits, half away from zero.
    ///
    /// The result always converts with [`Self::to_base_units`] without
    /// [`AmountError::TooPrecise`].
    #[must_use]
    pub fn round_to(&self, decimals: u8) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(u32::from(decimals), RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Scales this amount to integer base units.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::TooPrecise`] if the amount has more fractional
    /// digits than `decimals`, or [`AmountError::Overflow`] if the result
    /// exceeds 256 bits.
    pub fn to_base_units(&self, decimals: u8) -> Result<U256, AmountError> {
        let normalized = self.0.normalize();
        let scale = normalized.scale();
        let decimals_u32 = u32::from(decimals);
        if scale > decimals_u32 {
            return Err(AmountError::TooPrecise {
                amount: normalized.to_string(),
                decimals,
            });
        }
        let mantissa = u128::try_from(normalized.mantissa())
            .map_err(|_| AmountError::Negative(normalized.to_string()))?;
        let factor = U256::from(10u8)
            .checked_pow(U256::from(decimals_u32 - scale))
            .ok_or_else(|| AmountError::Overflow(normalized.to_string()))?;
        U256::from(mantissa)
            .checked_mul(factor)
            .ok_or_else(|| AmountError::Overflow(normalized.to_string()))
    }
}

impl FromStr for MoneyAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        let value = Decimal::from_str_exact(s).map_err(|_| AmountError::Malformed(s.into()))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(s.into()));
        }
        Ok(Self(value.abs()))
    }
}

impl fmt::Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<MoneyAmount> for Decimal {
    fn from(value: MoneyAmount) -> Self {
        value.0
    }
}

/// Parses a decimal token amount into integer base units.
///
/// `"1.5"` with 6 decimals yields `1500000`.
///
/// # Errors
///
/// Fails on empty, malformed or negative input, on more fractional digits
/// than `decimals`, and on 256-bit overflow.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    amount.parse::<MoneyAmount>()?.to_base_units(decimals)
}

/// Formats integer base units as a decimal token amount, trimming trailing zeros.
///
/// `1500000` with 6 decimals yields `"1.5"`.
#[must_use]
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let decimals = usize::from(decimals);
    if decimals == 0 {
        return digits;
    }
    let padded = format!("{digits:0>width$}", width = decimals + 1);
    let (whole, frac) = padded.split_at(padded.len() - decimals);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        whole.to_owned()
    } else {
        format!("{whole}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units_scales() {
        assert_eq!(parse_units("1", 6).unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_units("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(parse_units("0.000001", 6).unwrap(), U256::from(1u64));
        assert_eq!(parse_units("12.3400", 2).unwrap(), U256::from(1234u64));
        assert_eq!(parse_units("0", 18).unwrap(), U256::ZERO);
        assert_eq!(
            parse_units("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_parse_units_rejects() {
        assert_eq!(parse_units("", 6), Err(AmountError::Empty));
        assert_eq!(parse_units("   ", 6), Err(AmountError::Empty));
        assert!(matches!(parse_units("abc", 6), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_units("1.2.3", 6), Err(AmountError::Malformed(_))));
        assert!(matches!(parse_units("-1", 6), Err(AmountError::Negative(_))));
        assert!(matches!(
            parse_units("0.0000001", 6),
            Err(AmountError::TooPrecise { decimals: 6, .. })
        ));
    }

    #[test]
    fn test_parse_units_overflow() {
        assert!(matches!(
            parse_units("79228162514264337593543950335", 255),
            Err(AmountError::Overflow(_))
        ));
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        let amount: MoneyAmount = "10.0123456789".parse().unwrap();
        assert_eq!(amount.round_to(6).to_string(), "10.012346");
        assert_eq!(
            amount.round_to(6).to_base_units(6).unwrap(),
            U256::from(10_012_346u64)
        );
        let half: MoneyAmount = "0.0000005".parse().unwrap();
        assert_eq!(half.round_to(6).to_base_units(6).unwrap(), U256::from(1u64));
        let exact: MoneyAmount = "1.5".parse().unwrap();
        assert_eq!(exact.round_to(6), exact);
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
        assert_eq!(format_units(U256::from(2_000_000u64), 6), "2");
        assert_eq!(format_units(U256::ZERO, 6), "0");
        assert_eq!(format_units(U256::from(42u64), 0), "42");
    }

    #[test]
    fn test_money_amount_display_normalizes() {
        let amount: MoneyAmount = "10.500".parse().unwrap();
        assert_eq!(amount.to_string(), "10.5");
        assert_eq!(amount.scale(), 1);
        assert!("0".parse::<MoneyAmount>().unwrap().is_zero());
        assert!("-0".parse::<MoneyAmount>().is_ok());
    }

    #[test]
    fn test_money_amount_serde() {
        let amount: MoneyAmount = serde_json::from_str("\"2.25\"").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"2.25\"");
        assert!(serde_json::from_str::<MoneyAmount>("\"-2\"").is_err());
    }
}
