//! Current-month summary
//!
//! Folds the transaction log into income/expense/balance totals for the
//! calendar month containing a reference date.

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Transaction};

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    /// Total income recorded in the month
    pub income: Money,
    /// Total expense recorded in the month
    pub expense: Money,
    /// income minus expense
    pub balance: Money,
    /// balance / income * 100, or 0 when there is no income.
    /// Negative when the month ran a deficit; not clamped.
    pub savings_percent: f64,
}

/// Select the transactions whose date falls in the same calendar month and
/// year as `reference`.
pub fn transactions_in_month(
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<&Transaction> {
    let (year, month) = (reference.year(), reference.month());
    transactions
        .iter()
        .filter(|t| t.in_month(year, month))
        .collect()
}

/// Compute the month summary for the calendar month containing `reference`
pub fn month_summary(transactions: &[Transaction], reference: NaiveDate) -> MonthSummary {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for txn in transactions_in_month(transactions, reference) {
        if txn.kind.is_income() {
            income += txn.amount;
        } else {
            expense += txn.amount;
        }
    }

    let balance = income - expense;
    let savings_percent = if income.is_positive() {
        balance.cents() as f64 / income.cents() as f64 * 100.0
    } else {
        0.0
    };

    MonthSummary {
        income,
        expense,
        balance,
        savings_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionDraft, TransactionKind};

    fn txn(kind: TransactionKind, cents: i64, category: &str, date: &str) -> Transaction {
        TransactionDraft::new(
            kind,
            Money::from_cents(cents),
            category,
            date.parse().unwrap(),
        )
        .into_transaction()
    }

    fn may_reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    // The worked example: income 1000, expense 400, balance 600
    fn sample_may() -> Vec<Transaction> {
        vec![
            txn(TransactionKind::Income, 100_000, "Salary", "2024-05-01"),
            txn(TransactionKind::Expense, 20_000, "Food", "2024-05-03"),
            txn(TransactionKind::Expense, 15_000, "Food", "2024-05-10"),
            txn(TransactionKind::Expense, 5_000, "Transport", "2024-05-12"),
        ]
    }

    #[test]
    fn test_month_summary_example_scenario() {
        let summary = month_summary(&sample_may(), may_reference());
        assert_eq!(summary.income, Money::from_units(1000));
        assert_eq!(summary.expense, Money::from_units(400));
        assert_eq!(summary.balance, Money::from_units(600));
        assert!((summary.savings_percent - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_other_months_are_excluded() {
        let mut txns = sample_may();
        txns.push(txn(TransactionKind::Expense, 99_999, "Food", "2024-04-30"));
        txns.push(txn(TransactionKind::Income, 99_999, "Gift", "2023-05-15"));

        let summary = month_summary(&txns, may_reference());
        assert_eq!(summary.expense, Money::from_units(400));
        assert_eq!(summary.income, Money::from_units(1000));
    }

    #[test]
    fn test_no_income_means_zero_savings_percent() {
        let txns = vec![txn(TransactionKind::Expense, 5_000, "Food", "2024-05-03")];
        let summary = month_summary(&txns, may_reference());
        assert_eq!(summary.savings_percent, 0.0);
        assert_eq!(summary.balance, Money::from_cents(-5_000));
    }

    #[test]
    fn test_deficit_month_has_negative_savings_percent() {
        let txns = vec![
            txn(TransactionKind::Income, 10_000, "Salary", "2024-05-01"),
            txn(TransactionKind::Expense, 15_000, "Rent", "2024-05-02"),
        ];
        let summary = month_summary(&txns, may_reference());
        assert!((summary.savings_percent - (-50.0)).abs() < 1e-9);
    }

    #[test]
    fn test_balance_identity_is_order_independent() {
        let mut txns = sample_may();
        txns.reverse();
        let summary = month_summary(&txns, may_reference());
        assert_eq!(summary.balance, summary.income - summary.expense);
        assert_eq!(summary.balance, Money::from_units(600));
    }

    #[test]
    fn test_empty_log() {
        let summary = month_summary(&[], may_reference());
        assert!(summary.income.is_zero());
        assert!(summary.expense.is_zero());
        assert!(summary.balance.is_zero());
        assert_eq!(summary.savings_percent, 0.0);
    }
}
