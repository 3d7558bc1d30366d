//! Dashboard rendering
//!
//! The terminal counterpart of the dashboard view: month summary, category
//! breakdown, budget progress bars, and the five most recent transactions.

use chrono::NaiveDate;

use crate::models::AppState;
use crate::reports::{
    budget_progress, category_breakdown, month_summary, transactions_in_month, Severity,
};

use super::transaction::format_transaction_row;

/// Width of the progress bars
const BAR_WIDTH: usize = 24;

/// Render the dashboard for the month containing `reference`
pub fn format_dashboard(state: &AppState, reference: NaiveDate) -> String {
    let summary = month_summary(&state.transactions, reference);
    let month_txns = transactions_in_month(&state.transactions, reference);
    let breakdown = category_breakdown(&month_txns);
    let budgets = budget_progress(&state.budgets, &state.transactions, reference);

    let mut output = String::new();

    output.push_str(&format!("Dashboard: {}\n", reference.format("%B %Y")));
    output.push_str(&"=".repeat(64));
    output.push('\n');

    output.push_str(&format!("Income:   {:>12}\n", summary.income.to_string()));
    output.push_str(&format!("Expense:  {:>12}\n", summary.expense.to_string()));
    output.push_str(&format!("Balance:  {:>12}\n", summary.balance.to_string()));
    output.push_str(&format!("Savings:  {:>11.1}%\n", summary.savings_percent));

    output.push_str("\nCategory Breakdown\n");
    output.push_str(&"-".repeat(64));
    output.push('\n');
    if breakdown.is_empty() {
        output.push_str("No expense data this month.\n");
    } else {
        for entry in &breakdown {
            output.push_str(&format!(
                "  {:16} {:>12}\n",
                entry.category,
                entry.total.to_string()
            ));
        }
    }

    output.push_str("\nBudget Limits\n");
    output.push_str(&"-".repeat(64));
    output.push('\n');
    if budgets.is_empty() {
        output.push_str("No budgets configured.\n");
    } else {
        for progress in &budgets {
            let marker = match progress.severity {
                Severity::Normal => " ",
                Severity::Warning => "!",
                Severity::Critical => "!!",
            };
            output.push_str(&format!(
                "  {:16} {} / {}  [{}] {:>5.1}% {}\n",
                progress.category,
                progress.spent,
                progress.limit,
                progress_bar(progress.percent),
                progress.percent,
                marker
            ));
        }
    }

    output.push_str("\nRecent Transactions\n");
    output.push_str(&"-".repeat(64));
    output.push('\n');
    if state.transactions.is_empty() {
        output.push_str("No transactions recorded yet.\n");
    } else {
        for txn in state.transactions.iter().take(5) {
            output.push_str(&format_transaction_row(txn));
            output.push('\n');
        }
    }

    output
}

/// Render a fixed-width progress bar for a 0-100 percentage
pub(crate) fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft, TransactionKind};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_empty_state_renders_placeholders() {
        let output = format_dashboard(&AppState::default(), reference());
        assert!(output.contains("Dashboard: May 2024"));
        assert!(output.contains("No expense data this month."));
        assert!(output.contains("No transactions recorded yet."));
        // Default seed budgets still show
        assert!(output.contains("Food"));
    }

    #[test]
    fn test_dashboard_shows_summary_and_spending() {
        let mut state = AppState::default();
        state.transactions.push(
            TransactionDraft::new(
                TransactionKind::Income,
                Money::from_units(1000),
                "Salary",
                "2024-05-01".parse().unwrap(),
            )
            .into_transaction(),
        );
        state.transactions.push(
            TransactionDraft::new(
                TransactionKind::Expense,
                Money::from_units(200),
                "Food",
                "2024-05-03".parse().unwrap(),
            )
            .into_transaction(),
        );

        let output = format_dashboard(&state, reference());
        assert!(output.contains("$1000.00"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("$800.00"));
        assert!(output.contains("80.0%"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), ".".repeat(24));
        assert_eq!(progress_bar(100.0), "#".repeat(24));
        assert_eq!(progress_bar(50.0).matches('#').count(), 12);
    }
}
