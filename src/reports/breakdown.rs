//! Category breakdown
//!
//! Groups expense transactions by category label. The plain breakdown keeps
//! first-occurrence order of the input slice (the dashboard pie legend); the
//! ranked variant sorts descending by total (the analytics bar chart).

use crate::models::{Money, Transaction};

/// Summed expense for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Group expense transactions by category, in first-occurrence order.
///
/// Income transactions are ignored. Callers choose the window by slicing or
/// pre-filtering the input (current month for the dashboard, full history
/// for analytics).
pub fn category_breakdown(transactions: &[&Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions {
        if !txn.kind.is_expense() {
            continue;
        }
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }

    totals
}

/// Breakdown sorted descending by total
pub fn ranked_categories(transactions: &[&Transaction]) -> Vec<CategoryTotal> {
    let mut totals = category_breakdown(transactions);
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}
