//! Amount pipeline: base-unit rescaling, portfolio aggregation and display
//! formatting.
//!
//! Everything here is a pure function of its input. Unknown amounts are
//! values, not errors.

mod aggregate;
mod format;
mod scaled_amount;

pub use aggregate::{aggregate, aggregate_by, aggregate_usd};
pub use format::{daily_rate, format_amount, format_decimal, fraction_digits_for, to_percentage};
pub use scaled_amount::{parse_raw_amount, rescale, ScaledAmount};
