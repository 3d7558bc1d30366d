//! Analytics rendering
//!
//! Six-month income/expense trend, ranked category spending, and the
//! insights card.

use chrono::NaiveDate;

use crate::models::{AppState, Transaction};
use crate::reports::{ranked_categories, six_month_trend, spending_insights};

/// Render the analytics view for the window ending at `reference`
pub fn format_analytics(state: &AppState, reference: NaiveDate) -> String {
    let trend = six_month_trend(&state.transactions, reference);
    let refs: Vec<&Transaction> = state.transactions.iter().collect();
    let ranked = ranked_categories(&refs);
    let insights = spending_insights(&state.transactions, reference);

    let mut output = String::new();

    output.push_str("Income vs Expense Trend (last 6 months)\n");
    output.push_str(&"=".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "{:6} {:>14} {:>14}\n",
        "Month", "Income", "Expense"
    ));
    for bucket in &trend {
        output.push_str(&format!(
            "{:6} {:>14} {:>14}\n",
            format!("{} {}", bucket.label, bucket.year),
            bucket.income.to_string(),
            bucket.expense.to_string()
        ));
    }

    output.push_str("\nSpending by Category\n");
    output.push_str(&"-".repeat(56));
    output.push('\n');
    if ranked.is_empty() {
        output.push_str("No expense data recorded.\n");
    } else {
        for entry in ranked.iter().take(5) {
            output.push_str(&format!(
                "  {:16} {:>12}\n",
                entry.category,
                entry.total.to_string()
            ));
        }
    }

    output.push_str("\nInsights\n");
    output.push_str(&"-".repeat(56));
    output.push('\n');
    output.push_str(&format!(
        "You've spent the most on {}.\n",
        insights.top_category_label()
    ));
    output.push_str(&format!(
        "Average monthly expense: {}\n",
        insights.average_expense
    ));

    output
}
