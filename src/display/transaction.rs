//! Transaction display formatting
//!
//! Formats transactions for terminal display as a register-style listing.

use crate::models::{Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    let note_display = if txn.note.is_empty() {
        String::new()
    } else {
        format!("  ({})", truncate(&txn.note, 30))
    };

    format!(
        "{} {} {:16} {}{:>11}{}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 16),
        sign,
        txn.amount.to_string(),
        note_display
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "No matching transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:16} {:>12}\n",
        "Id", "Date", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string, appending an ellipsis when it was cut
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
