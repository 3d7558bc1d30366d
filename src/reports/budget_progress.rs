//! Budget progress
//!
//! For each budget entry, how much of the monthly ceiling the current month's
//! expenses have consumed, with a severity band for display.

use chrono::NaiveDate;

use crate::models::{Budget, Money, Transaction};

use super::summary::transactions_in_month;

/// How urgent a budget's consumption level is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// progress <= 70
    Normal,
    /// 70 < progress <= 90
    Warning,
    /// progress > 90
    Critical,
}

impl Severity {
    /// Band for a progress percentage
    pub fn for_percent(percent: f64) -> Self {
        if percent > 90.0 {
            Self::Critical
        } else if percent > 70.0 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Consumption of one budget for the current month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: Money,
    /// Current-month expense total for this category
    pub spent: Money,
    /// spent / limit * 100, capped at 100 even when overspent
    pub percent: f64,
    pub severity: Severity,
}

/// Compute progress for every budget against the month containing `reference`.
///
/// Validation upstream guarantees positive limits; a non-positive limit still
/// saturates to 100 rather than dividing by zero.
pub fn budget_progress(
    budgets: &[Budget],
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<BudgetProgress> {
    let month = transactions_in_month(transactions, reference);

    budgets
        .iter()
        .map(|budget| {
            let spent: Money = month
                .iter()
                .filter(|t| t.kind.is_expense() && t.category == budget.category)
                .map(|t| t.amount)
                .sum();

            let percent = if budget.limit.is_positive() {
                (spent.cents() as f64 / budget.limit.cents() as f64 * 100.0).min(100.0)
            } else {
                100.0
            };

            BudgetProgress {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                percent,
                severity: Severity::for_percent(percent),
            }
        })
        .collect()
}
