//! Property-based tests for snapshot validation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tallybook_shared::BatchPolicy;

use super::types::{RawAmount, RawTransaction};
use super::validation::{RejectionReason, validate_batch};

/// Strategy to generate a non-negative amount (0.00 to 1,000,000.00).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a strictly negative amount.
fn negative_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn type_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("revenue"),
        Just("expense"),
        Just("asset"),
        Just("liability"),
        Just("equity"),
    ]
}

/// A record that passes validation, identified by its position.
fn valid_record(index: usize, transaction_type: &str, amount: Decimal) -> RawTransaction {
    RawTransaction {
        id: format!("txn-{index}"),
        date: Some("2026-06-15".to_string()),
        transaction_type: Some(transaction_type.to_string()),
        category: Some("general".to_string()),
        amount: Some(RawAmount::Number(amount)),
        bucket: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every input record is accounted for exactly once: accepted,
    /// skipped, or rejected.
    #[test]
    fn prop_every_record_accounted_for(
        records in prop::collection::vec(
            (type_name(), non_negative_amount(), any::<bool>(), any::<bool>()),
            0..40,
        ),
    ) {
        let raw: Vec<RawTransaction> = records
            .iter()
            .enumerate()
            .map(|(i, (transaction_type, amount, break_date, as_transfer))| {
                let mut record = valid_record(i, transaction_type, *amount);
                if *break_date {
                    record.date = Some("someday".to_string());
                }
                if *as_transfer {
                    record.transaction_type = Some("transfer".to_string());
                }
                record
            })
            .collect();

        let batch = validate_batch(&raw, BatchPolicy::Skip).unwrap();
        prop_assert_eq!(
            batch.transactions.len() + batch.skipped + batch.rejected.len(),
            raw.len()
        );
    }

    /// Valid records survive no matter how many invalid ones surround them.
    #[test]
    fn prop_invalid_records_do_not_drop_valid_ones(
        valid in prop::collection::vec((type_name(), non_negative_amount()), 0..20),
        invalid in prop::collection::vec(negative_amount(), 0..20),
    ) {
        let mut raw: Vec<RawTransaction> = valid
            .iter()
            .enumerate()
            .map(|(i, (transaction_type, amount))| valid_record(i, transaction_type, *amount))
            .collect();
        raw.extend(
            invalid
                .iter()
                .enumerate()
                .map(|(i, amount)| valid_record(1_000 + i, "expense", *amount)),
        );

        let batch = validate_batch(&raw, BatchPolicy::Skip).unwrap();
        prop_assert_eq!(batch.transactions.len(), valid.len());
        prop_assert_eq!(batch.rejected.len(), invalid.len());
        for rejection in &batch.rejected {
            prop_assert!(
                matches!(rejection.reason, RejectionReason::NegativeAmount { .. }),
                "unexpected reason: {:?}",
                rejection.reason
            );
        }
    }

    /// Accepted amounts are never negative.
    #[test]
    fn prop_accepted_amounts_are_magnitudes(
        amounts in prop::collection::vec(
            prop_oneof![non_negative_amount(), negative_amount()],
            1..30,
        ),
    ) {
        let raw: Vec<RawTransaction> = amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| valid_record(i, "revenue", *amount))
            .collect();

        let batch = validate_batch(&raw, BatchPolicy::Skip).unwrap();
        prop_assert!(batch.transactions.iter().all(|t| !t.amount.is_sign_negative()));
    }
}
