//! Classification rule tests.

use chrono::NaiveDate;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal_macros::dec;

use super::{BUCKET_RULES, Bucket, CASH_FLOW_RULES, CashFlowLine, Classifier};
use crate::transaction::{Transaction, TransactionType};

#[rstest]
#[case(TransactionType::Revenue, Some("rent income"), Bucket::Revenue)]
#[case(TransactionType::Revenue, None, Bucket::Revenue)]
#[case(TransactionType::Expense, Some("cost of inventory"), Bucket::CostOfGoodsSold)]
#[case(TransactionType::Expense, Some("finished goods"), Bucket::CostOfGoodsSold)]
#[case(TransactionType::Expense, Some("loan interest"), Bucket::InterestExpense)]
#[case(TransactionType::Expense, Some("income tax"), Bucket::IncomeTax)]
#[case(TransactionType::Expense, Some("rent"), Bucket::OperatingExpenses)]
#[case(TransactionType::Expense, None, Bucket::OperatingExpenses)]
#[case(TransactionType::Asset, Some("cash deposit"), Bucket::CurrentAssets)]
#[case(TransactionType::Asset, Some("bank account"), Bucket::CurrentAssets)]
#[case(TransactionType::Asset, Some("accounts receivable"), Bucket::CurrentAssets)]
#[case(TransactionType::Asset, Some("prepaid insurance"), Bucket::CurrentAssets)]
#[case(TransactionType::Asset, Some("equipment"), Bucket::FixedAssets)]
#[case(TransactionType::Asset, None, Bucket::FixedAssets)]
#[case(TransactionType::Liability, Some("accounts payable"), Bucket::CurrentLiabilities)]
#[case(TransactionType::Liability, Some("short-term note"), Bucket::CurrentLiabilities)]
#[case(TransactionType::Liability, Some("accrued wages"), Bucket::CurrentLiabilities)]
#[case(TransactionType::Liability, Some("bank loan"), Bucket::LongTermLiabilities)]
#[case(TransactionType::Equity, Some("owner capital"), Bucket::OwnerEquity)]
#[case(TransactionType::Equity, Some("prior year profit"), Bucket::RetainedEarnings)]
fn test_bucket_table(
    #[case] transaction_type: TransactionType,
    #[case] category: Option<&str>,
    #[case] expected: Bucket,
) {
    assert_eq!(Classifier::classify(transaction_type, category), expected);
}

#[test]
fn test_first_matching_rule_wins() {
    // Both "tax" and "inventory" match; the cost rule is listed first.
    assert_eq!(
        Classifier::classify(TransactionType::Expense, Some("tax on inventory")),
        Bucket::CostOfGoodsSold
    );
    // Both "interest" and "tax" match; interest is listed first.
    assert_eq!(
        Classifier::classify(TransactionType::Expense, Some("interest on tax arrears")),
        Bucket::InterestExpense
    );
}

#[test]
fn test_classify_is_case_insensitive() {
    assert_eq!(
        Classifier::classify(TransactionType::Asset, Some("Cash Deposit")),
        Bucket::CurrentAssets
    );
}

#[rstest]
#[case(TransactionType::Expense, "depreciation", Some(CashFlowLine::Depreciation))]
#[case(TransactionType::Expense, "rent", None)]
#[case(TransactionType::Asset, "accounts receivable", Some(CashFlowLine::AccountsReceivable))]
#[case(TransactionType::Asset, "inventory purchase", Some(CashFlowLine::Inventory))]
#[case(TransactionType::Asset, "equipment", Some(CashFlowLine::EquipmentPurchase))]
#[case(TransactionType::Asset, "equipment sale", Some(CashFlowLine::AssetSale))]
#[case(TransactionType::Asset, "cash deposit", None)]
#[case(TransactionType::Liability, "accounts payable", Some(CashFlowLine::AccountsPayable))]
#[case(TransactionType::Liability, "bank loan", Some(CashFlowLine::LoanProceeds))]
#[case(TransactionType::Liability, "loan repayment", Some(CashFlowLine::LoanPayment))]
#[case(TransactionType::Equity, "owner withdrawal", Some(CashFlowLine::OwnerWithdrawal))]
#[case(TransactionType::Equity, "owner capital", None)]
#[case(TransactionType::Revenue, "depreciation", None)]
fn test_cash_flow_table(
    #[case] transaction_type: TransactionType,
    #[case] category: &str,
    #[case] expected: Option<CashFlowLine>,
) {
    assert_eq!(
        Classifier::cash_flow_line(transaction_type, Some(category)),
        expected
    );
}

#[test]
fn test_explicit_bucket_overrides_keywords() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let txn = Transaction::new("t1", date, TransactionType::Expense, Some("rent"), dec!(5))
        .with_bucket(Bucket::IncomeTax);
    assert_eq!(txn.classification().bucket, Bucket::IncomeTax);
}

#[test]
fn test_incompatible_explicit_bucket_is_ignored() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let txn = Transaction::new("t1", date, TransactionType::Expense, Some("rent"), dec!(5))
        .with_bucket(Bucket::FixedAssets);
    assert_eq!(txn.classification().bucket, Bucket::OperatingExpenses);
}

#[test]
fn test_every_type_has_a_fallback_rule() {
    for transaction_type in [
        TransactionType::Revenue,
        TransactionType::Expense,
        TransactionType::Asset,
        TransactionType::Liability,
        TransactionType::Equity,
    ] {
        let fallbacks: Vec<_> = BUCKET_RULES
            .iter()
            .filter(|rule| rule.transaction_type == transaction_type && rule.keywords.is_empty())
            .collect();
        assert_eq!(fallbacks.len(), 1, "{transaction_type} needs one fallback");

        // The fallback must be the last rule for its type, or it would
        // shadow the keyword rules after it.
        let last = BUCKET_RULES
            .iter()
            .rfind(|rule| rule.transaction_type == transaction_type)
            .unwrap();
        assert!(last.keywords.is_empty());
    }
}

#[test]
fn test_rule_outcomes_match_rule_types() {
    for rule in BUCKET_RULES {
        assert!(rule.outcome.accepts(rule.transaction_type));
    }
    assert!(CASH_FLOW_RULES.iter().all(|rule| !rule.keywords.is_empty()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Classification never fails and always lands in a bucket of the
    /// transaction's own type.
    #[test]
    fn prop_bucket_matches_type(
        type_index in 0usize..5,
        category in proptest::option::of("[a-z ]{0,24}"),
    ) {
        let transaction_type = [
            TransactionType::Revenue,
            TransactionType::Expense,
            TransactionType::Asset,
            TransactionType::Liability,
            TransactionType::Equity,
        ][type_index];
        let bucket = Classifier::classify(transaction_type, category.as_deref());
        prop_assert!(bucket.accepts(transaction_type));
    }
}
