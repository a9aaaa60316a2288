//! Base-unit to decimal conversion.

use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use log::debug;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::constants::MAX_DECIMALS;

/// A decimal quantity derived from an on-chain base-unit amount.
///
/// `Unknown` plays the role of NaN: it is distinct from zero and absorbs
/// every addition it takes part in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaledAmount {
    Known(BigDecimal),
    Unknown,
}

impl ScaledAmount {
    /// The additive identity.
    pub fn zero() -> Self {
        ScaledAmount::Known(BigDecimal::zero())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ScaledAmount::Unknown)
    }

    /// Returns the decimal value if it is known.
    pub fn known(&self) -> Option<&BigDecimal> {
        match self {
            ScaledAmount::Known(value) => Some(value),
            ScaledAmount::Unknown => None,
        }
    }

    pub fn into_known(self) -> Option<BigDecimal> {
        match self {
            ScaledAmount::Known(value) => Some(value),
            ScaledAmount::Unknown => None,
        }
    }
}

impl Default for ScaledAmount {
    fn default() -> Self {
        ScaledAmount::zero()
    }
}

impl From<BigDecimal> for ScaledAmount {
    fn from(value: BigDecimal) -> Self {
        ScaledAmount::Known(value)
    }
}

impl From<Option<BigDecimal>> for ScaledAmount {
    fn from(value: Option<BigDecimal>) -> Self {
        value.map_or(ScaledAmount::Unknown, ScaledAmount::Known)
    }
}

impl Add for ScaledAmount {
    type Output = ScaledAmount;

    fn add(self, rhs: ScaledAmount) -> ScaledAmount {
        match (self, rhs) {
            (ScaledAmount::Known(lhs), ScaledAmount::Known(rhs)) => ScaledAmount::Known(lhs + rhs),
            _ => ScaledAmount::Unknown,
        }
    }
}

impl<'a> Add<&'a ScaledAmount> for ScaledAmount {
    type Output = ScaledAmount;

    fn add(self, rhs: &'a ScaledAmount) -> ScaledAmount {
        match (self, rhs) {
            (ScaledAmount::Known(lhs), ScaledAmount::Known(rhs)) => ScaledAmount::Known(lhs + rhs),
            _ => ScaledAmount::Unknown,
        }
    }
}

impl Sum for ScaledAmount {
    fn sum<I: Iterator<Item = ScaledAmount>>(iter: I) -> Self {
        iter.fold(ScaledAmount::zero(), |acc, amount| acc + amount)
    }
}

/// Converts a base-unit integer into its decimal quantity: `raw * 10^-decimals`.
///
/// The result is exact. An absent amount, a negative amount or a decimal
/// count outside `0..=MAX_DECIMALS` yields [`ScaledAmount::Unknown`].
pub fn rescale(raw_amount: Option<&BigInt>, decimals: i64) -> ScaledAmount {
    let Some(raw) = raw_amount else {
        return ScaledAmount::Unknown;
    };

    if decimals < 0 {
        debug!("Negative decimal count {} treated as unknown amount", decimals);
        return ScaledAmount::Unknown;
    }

    if decimals > MAX_DECIMALS {
        debug!("Decimal count {} exceeds {}, treated as unknown amount", decimals, MAX_DECIMALS);
        return ScaledAmount::Unknown;
    }

    if raw.sign() == Sign::Minus {
        debug!("Negative base-unit amount {} treated as unknown amount", raw);
        return ScaledAmount::Unknown;
    }

    ScaledAmount::Known(BigDecimal::new(raw.clone(), decimals))
}

/// Parses a base-ten, non-negative base-unit integer.
///
/// Surrounding whitespace and a single leading `+` are accepted. Anything
/// else (fractions, exponents, hex, signs) is rejected.
pub fn parse_raw_amount(text: &str) -> Option<BigInt> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!("Malformed base-unit amount '{}'", text);
        return None;
    }

    BigInt::from_str(digits).ok()
}
