//! Portfolio aggregation across vault records.

use log::debug;

use super::ScaledAmount;
use crate::vaults::{AmountField, VaultRecord};

/// Sum of the rescaled wallet balances of all vaults.
///
/// Starts from zero and folds left to right. A vault whose balance is
/// absent, malformed or lacks a decimal count makes the whole aggregate
/// unknown; it is never skipped as if it were zero.
pub fn aggregate(records: &[VaultRecord]) -> ScaledAmount {
    aggregate_by(records, AmountField::Balance)
}

/// Same fold as [`aggregate`] over the selected raw amount.
pub fn aggregate_by(records: &[VaultRecord], field: AmountField) -> ScaledAmount {
    fold_amounts(records, |record| record.scaled_amount(field), field)
}

/// Same fold over the already converted USD values.
pub fn aggregate_usd(records: &[VaultRecord], field: AmountField) -> ScaledAmount {
    fold_amounts(records, |record| record.usd_value(field), field)
}

fn fold_amounts<F>(records: &[VaultRecord], amount_of: F, field: AmountField) -> ScaledAmount
where
    F: Fn(&VaultRecord) -> ScaledAmount,
{
    records
        .iter()
        .fold(ScaledAmount::zero(), |acc, record| {
            let amount = amount_of(record);
            if amount.is_unknown() && !acc.is_unknown() {
                debug!(
                    "{:?} of vault '{}' is unknown; portfolio total is unknown",
                    field, record.token
                );
            }
            acc + amount
        })
}
