//! Spending insights
//!
//! The analytics summary card: which category has taken the most spending,
//! and the average monthly expense across the six-month trend window.

use chrono::NaiveDate;

use crate::models::{Money, Transaction};

use super::breakdown::ranked_categories;
use super::trend::{six_month_trend, TREND_MONTHS};

/// Label reported when no expense transactions exist
pub const NO_SPENDING_LABEL: &str = "nothing";

/// Headline numbers for the analytics view
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingInsights {
    /// Highest-total category over the full history, if any expense exists
    pub top_category: Option<String>,
    /// Sum of the six trend buckets' expense divided by six, however many
    /// buckets actually had data
    pub average_expense: Money,
}

impl SpendingInsights {
    /// The top category, or the defined fallback label
    pub fn top_category_label(&self) -> &str {
        self.top_category.as_deref().unwrap_or(NO_SPENDING_LABEL)
    }
}

/// Compute insights from the full history and the trend window ending at
/// `reference`.
pub fn spending_insights(transactions: &[Transaction], reference: NaiveDate) -> SpendingInsights {
    let refs: Vec<&Transaction> = transactions.iter().collect();
    let top_category = ranked_categories(&refs)
        .into_iter()
        .next()
        .map(|c| c.category);

    let trend_expense: Money = six_month_trend(transactions, reference)
        .iter()
        .map(|b| b.expense)
        .sum();
    let average_expense = Money::from_cents(trend_expense.cents() / TREND_MONTHS as i64);

    SpendingInsights {
        top_category,
        average_expense,
    }
}
