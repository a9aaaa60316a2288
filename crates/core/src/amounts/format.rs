//! Locale-independent display formatting for amounts and percentages.
//!
//! Output always uses `,` for thousands grouping and `.` as the decimal
//! separator, regardless of the host locale.

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use rust_decimal::Decimal;

use super::ScaledAmount;
use crate::constants::{
    DAYS_PER_YEAR, DISPLAY_DECIMAL_PRECISION, SMALL_VALUE_DECIMAL_PRECISION,
    SMALL_VALUE_UPPER_BOUND, UNKNOWN_AMOUNT_PLACEHOLDER,
};

/// Renders an amount, or the placeholder when it is unknown.
///
/// The prefix is ignored for unknown amounts and placed after the minus
/// sign for negative ones (`-$1.00`).
pub fn format_amount(amount: &ScaledAmount, currency_prefix: Option<&str>) -> String {
    match amount {
        ScaledAmount::Known(value) => format_decimal(value, currency_prefix),
        ScaledAmount::Unknown => UNKNOWN_AMOUNT_PLACEHOLDER.to_string(),
    }
}

/// Renders a known decimal with grouping and the magnitude precision rule.
pub fn format_decimal(value: &BigDecimal, currency_prefix: Option<&str>) -> String {
    let fixed = render_fixed(value, fraction_digits_for(value));
    let sign = if fixed.negative { "-" } else { "" };

    format!(
        "{}{}{}",
        sign,
        currency_prefix.unwrap_or_default(),
        fixed.digits
    )
}

/// Renders a percentage value (`5` means 5%). Absent values render as 0.
pub fn to_percentage(value: Option<Decimal>) -> String {
    let value = decimal_to_big(value.unwrap_or(Decimal::ZERO));
    format!("{}%", format_decimal(&value, None))
}

/// Daily rate for an annual percentage yield. Absent yields count as 0.
pub fn daily_rate(apy: Option<Decimal>) -> Decimal {
    apy.unwrap_or(Decimal::ZERO) / Decimal::from(DAYS_PER_YEAR)
}

/// Fraction digits for a value: 3 when strictly between 0 and 10, else 2.
pub fn fraction_digits_for(value: &BigDecimal) -> i64 {
    if *value > BigDecimal::zero() && *value < BigDecimal::from(SMALL_VALUE_UPPER_BOUND) {
        SMALL_VALUE_DECIMAL_PRECISION
    } else {
        DISPLAY_DECIMAL_PRECISION
    }
}

fn decimal_to_big(value: Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}

struct FixedDigits {
    negative: bool,
    digits: String,
}

/// Rounds half away from zero to `fraction_digits` and groups the integer
/// part in thousands. The sign is returned separately so callers can place
/// a prefix between sign and digits.
fn render_fixed(value: &BigDecimal, fraction_digits: i64) -> FixedDigits {
    let rounded = value.with_scale_round(fraction_digits, RoundingMode::HalfUp);
    let (mantissa, scale) = rounded.as_bigint_and_exponent();
    let negative = mantissa.sign() == Sign::Minus;

    let mut digits = mantissa.magnitude().to_string();
    // with_scale_round pins the scale, so it is never negative here.
    let scale = usize::try_from(scale).unwrap_or(0);
    if digits.len() <= scale {
        digits = format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits);
    }

    let (int_part, frac_part) = digits.split_at(digits.len() - scale);
    let grouped = group_thousands(int_part);

    let digits = if frac_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac_part)
    };

    FixedDigits { negative, digits }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
