//! Property-based tests for the amount pipeline.
//!
//! These tests verify that aggregation and formatting invariants hold across
//! arbitrary vault lists, using `proptest` for case generation.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use proptest::prelude::*;
use vaultboard_core::amounts::{aggregate, format_amount, rescale, ScaledAmount};
use vaultboard_core::vaults::VaultRecord;

// =============================================================================
// Generators
// =============================================================================

/// A base-unit amount large enough to overflow f64 precision.
fn arb_raw_amount() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,35}|0"
}

/// A vault with a known balance.
fn arb_known_vault() -> impl Strategy<Value = VaultRecord> {
    ("[a-z]{3,6}", arb_raw_amount(), 0i64..=30).prop_map(|(token, raw, decimals)| {
        VaultRecord::new(token, decimals).with_balance(raw.as_str())
    })
}

// =============================================================================
// Aggregation
// =============================================================================

proptest! {
    #[test]
    fn prop_aggregate_is_order_insensitive(
        vaults in prop::collection::vec(arb_known_vault(), 0..12),
        rotation in 0usize..12,
    ) {
        let forward = aggregate(&vaults);

        let mut reversed = vaults.clone();
        reversed.reverse();

        let mut rotated = vaults.clone();
        if !rotated.is_empty() {
            let by = rotation % rotated.len();
            rotated.rotate_left(by);
        }

        prop_assert!(!forward.is_unknown());
        prop_assert_eq!(&forward, &aggregate(&reversed));
        prop_assert_eq!(&forward, &aggregate(&rotated));
    }

    #[test]
    fn prop_single_unknown_poisons_total(
        vaults in prop::collection::vec(arb_known_vault(), 0..12),
        position in 0usize..13,
    ) {
        let mut vaults = vaults;
        let index = position.min(vaults.len());
        vaults.insert(index, VaultRecord::new("unknown", 18));

        prop_assert!(aggregate(&vaults).is_unknown());
    }

    #[test]
    fn prop_aggregate_matches_exact_sum(
        vaults in prop::collection::vec(arb_known_vault(), 1..8),
    ) {
        let mut expected = BigDecimal::from(0);
        for vault in &vaults {
            let raw = vault.balance.as_ref().unwrap().value().unwrap();
            expected += BigDecimal::new(raw, vault.decimals.unwrap());
        }

        prop_assert_eq!(aggregate(&vaults), ScaledAmount::Known(expected));
    }

    #[test]
    fn prop_rescale_of_absent_is_unknown(decimals in 0i64..=77) {
        prop_assert!(rescale(None, decimals).is_unknown());
    }
}

// =============================================================================
// Formatting
// =============================================================================

proptest! {
    #[test]
    fn prop_format_groups_and_bounds_fraction(
        int_part in "[1-9][0-9]{0,20}|0",
        frac_part in "[0-9]{0,10}",
    ) {
        let text = if frac_part.is_empty() {
            int_part.clone()
        } else {
            format!("{}.{}", int_part, frac_part)
        };
        let value = BigDecimal::from_str(&text).unwrap();
        let rendered = format_amount(&ScaledAmount::Known(value.clone()), Some("$"));

        prop_assert!(rendered.starts_with('$'));
        let body = &rendered[1..];
        let (grouped, fraction) = body.split_once('.').unwrap();

        let small = value > BigDecimal::from(0) && value < BigDecimal::from(10);
        prop_assert_eq!(fraction.len(), if small { 3 } else { 2 });

        let groups: Vec<&str> = grouped.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }

        // Rounding never moves the value by more than half a unit in the last place.
        let plain = BigDecimal::from_str(&body.replace(',', "")).unwrap();
        let half_ulp = BigDecimal::new(5.into(), fraction.len() as i64 + 1);
        prop_assert!((plain - value).abs() <= half_ulp);
    }

    #[test]
    fn prop_unknown_always_renders_placeholder(prefix in "[$€£]?") {
        let prefix = if prefix.is_empty() { None } else { Some(prefix.as_str()) };
        prop_assert_eq!(format_amount(&ScaledAmount::Unknown, prefix), "-");
    }
}
