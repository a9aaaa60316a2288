//! Display-ready views of vault records.

use serde::Serialize;

use super::{AmountField, VaultRecord};
use crate::amounts::{aggregate_by, daily_rate, format_amount, to_percentage, ScaledAmount};
use crate::constants::USD_PREFIX;

/// Rendered cells of a single vault row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultRow {
    pub token: String,
    pub symbol: String,
    pub uses: String,
    pub color: String,
    pub balance_usd: String,
    pub balance: String,
    pub deposited_usd: String,
    pub deposited: String,
    pub apy: String,
    pub daily: String,
    pub tvl_usd: String,
}

impl VaultRow {
    pub fn from_record(record: &VaultRecord) -> Self {
        Self {
            token: record.token.clone(),
            symbol: record.display_symbol(),
            uses: record.uses.clone(),
            color: record.color.clone(),
            balance_usd: usd_cell(record, AmountField::Balance),
            balance: token_cell(record, AmountField::Balance),
            deposited_usd: usd_cell(record, AmountField::Deposited),
            deposited: token_cell(record, AmountField::Deposited),
            apy: to_percentage(record.apy),
            daily: to_percentage(Some(daily_rate(record.apy))),
            tvl_usd: usd_cell(record, AmountField::Tvl),
        }
    }
}

fn usd_cell(record: &VaultRecord, field: AmountField) -> String {
    format_amount(&record.usd_value(field), Some(USD_PREFIX))
}

fn token_cell(record: &VaultRecord, field: AmountField) -> String {
    format_amount(&record.scaled_amount(field), None)
}

/// The portfolio total line shown above the vault list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioTotal {
    pub field: AmountField,
    pub amount: ScaledAmount,
}

impl PortfolioTotal {
    /// Total value locked across all vaults.
    pub fn tvl(records: &[VaultRecord]) -> Self {
        Self::of(records, AmountField::Tvl)
    }

    pub fn of(records: &[VaultRecord], field: AmountField) -> Self {
        Self {
            field,
            amount: aggregate_by(records, field),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.amount.is_unknown()
    }

    /// `$`-prefixed total, or the placeholder when any vault is unknown.
    pub fn render(&self) -> String {
        format_amount(&self.amount, Some(USD_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_row_with_full_data() {
        let mut record = VaultRecord::new("dai", 18)
            .with_balance("1234500000000000000000")
            .with_deposited("5000000000000000000");
        record.balance_usd = Some(BigDecimal::from_str("1234.5").unwrap());
        record.deposited_usd = Some(BigDecimal::from_str("5.001").unwrap());
        record.tvl_usd = Some(BigDecimal::from_str("1000000").unwrap());
        record.apy = Some(dec!(36.5));

        let row = VaultRow::from_record(&record);
        assert_eq!(row.symbol, "DAI");
        assert_eq!(row.balance_usd, "$1,234.50");
        assert_eq!(row.balance, "1,234.50");
        assert_eq!(row.deposited_usd, "$5.001");
        assert_eq!(row.deposited, "5.000");
        assert_eq!(row.apy, "36.50%");
        assert_eq!(row.daily, "0.100%");
        assert_eq!(row.tvl_usd, "$1,000,000.00");
    }

    #[test]
    fn test_row_with_missing_data() {
        let row = VaultRow::from_record(&VaultRecord::new("usdc", 6));
        assert_eq!(row.balance_usd, "-");
        assert_eq!(row.balance, "-");
        assert_eq!(row.deposited_usd, "-");
        assert_eq!(row.deposited, "-");
        assert_eq!(row.apy, "0.00%");
        assert_eq!(row.daily, "0.00%");
        assert_eq!(row.tvl_usd, "-");
    }

    #[test]
    fn test_total_renders_placeholder_when_unknown() {
        let vaults = vec![
            VaultRecord::new("dai", 0).with_tvl(1500u64),
            VaultRecord::new("usdc", 0),
        ];
        let total = PortfolioTotal::tvl(&vaults);
        assert!(total.is_unknown());
        assert_eq!(total.render(), "-");
    }

    #[test]
    fn test_total_renders_prefixed_sum() {
        let vaults = vec![
            VaultRecord::new("dai", 2).with_tvl(150000u64),
            VaultRecord::new("usdc", 0).with_tvl(234u64),
        ];
        assert_eq!(PortfolioTotal::tvl(&vaults).render(), "$1,734.00");
        assert_eq!(PortfolioTotal::tvl(&[]).render(), "$0.00");
    }
}
