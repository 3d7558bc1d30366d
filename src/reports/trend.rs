//! Six-month trend
//!
//! Buckets the transaction log into exactly six consecutive calendar months
//! ending at (and including) the reference month, oldest-first. Transactions
//! outside the window are ignored.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Money, Transaction};

/// Number of months in the trend window
pub const TREND_MONTHS: u32 = 6;

/// One calendar month with separate income/expense accumulators
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBucket {
    /// Short month name ("Jan", "Feb", ...)
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expense: Money,
}

/// Build the six-month trend ending at the month containing `reference`.
///
/// Always yields exactly [`TREND_MONTHS`] buckets, oldest-first, however many
/// transactions exist.
pub fn six_month_trend(transactions: &[Transaction], reference: NaiveDate) -> Vec<TrendBucket> {
    let mut buckets: Vec<TrendBucket> = (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            // Month arithmetic never fails going backwards from a valid date
            let d = reference
                .checked_sub_months(Months::new(back))
                .unwrap_or(reference);
            TrendBucket {
                label: d.format("%b").to_string(),
                year: d.year(),
                month: d.month(),
                income: Money::zero(),
                expense: Money::zero(),
            }
        })
        .collect();

    for txn in transactions {
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| txn.in_month(b.year, b.month))
        {
            if txn.kind.is_income() {
                bucket.income += txn.amount;
            } else {
                bucket.expense += txn.amount;
            }
        }
    }

    buckets
}
