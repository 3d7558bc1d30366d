//! Transaction filtering
//!
//! The transaction-list search: a free-text query matched case-insensitively
//! against note and category, combined with a kind filter. Recomputed from
//! the full collection on every call; no indexing.

use crate::models::{Transaction, TransactionKind};

/// Kind filter for the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    fn matches(&self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind.is_income(),
            Self::Expense => kind.is_expense(),
        }
    }
}

/// Select transactions matching the query and kind filter.
///
/// A transaction matches if the kind filter accepts it AND the query is
/// empty or appears, case-insensitively, in the note or the category.
/// Always a pure narrowing of the input, preserving its order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    query: &str,
    filter: KindFilter,
) -> Vec<&'a Transaction> {
    let query = query.to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            filter.matches(t.kind)
                && (query.is_empty()
                    || t.note.to_lowercase().contains(&query)
                    || t.category.to_lowercase().contains(&query))
        })
        .collect()
}
