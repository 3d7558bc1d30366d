//! CSV report export
//!
//! Writes one row per transaction in collection order (newest-first). The
//! Note field is always double-quoted so embedded commas survive; embedded
//! quotes are doubled.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;

/// Default report filename for a given date, e.g. `report_2024-05-20.csv`
pub fn report_filename(date: NaiveDate) -> String {
    format!("report_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the transaction report as CSV
pub fn export_report_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FintrackResult<()> {
    writeln!(writer, "Date,Type,Category,Amount,Note")
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for txn in transactions {
        writeln!(
            writer,
            "{},{},{},{:.2},\"{}\"",
            txn.date.format("%Y-%m-%d"),
            txn.kind,
            escape_csv(&txn.category),
            txn.amount.to_units_f64(),
            txn.note.replace('"', "\"\"")
        )
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format (quote only when needed)
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft, TransactionKind};

    fn txn(kind: TransactionKind, cents: i64, category: &str, note: &str) -> Transaction {
        TransactionDraft::new(
            kind,
            Money::from_cents(cents),
            category,
            "2024-05-10".parse().unwrap(),
        )
        .with_note(note)
        .into_transaction()
    }

    #[test]
    fn test_header_and_row_format() {
        let txns = vec![txn(TransactionKind::Expense, 1250, "Food", "lunch")];

        let mut buf = Vec::new();
        export_report_csv(&txns, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Type,Category,Amount,Note"));
        assert_eq!(lines.next(), Some("2024-05-10,EXPENSE,Food,12.50,\"lunch\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_note_is_always_quoted() {
        let txns = vec![
            txn(TransactionKind::Income, 100, "Salary", ""),
            txn(TransactionKind::Expense, 200, "Food", "bread, milk"),
            txn(TransactionKind::Expense, 300, "Food", "the \"good\" cheese"),
        ];

        let mut buf = Vec::new();
        export_report_csv(&txns, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.contains("INCOME,Salary,1.00,\"\""));
        assert!(csv.contains("\"bread, milk\""));
        assert!(csv.contains("\"the \"\"good\"\" cheese\""));
    }

    #[test]
    fn test_rows_follow_collection_order() {
        let txns = vec![
            txn(TransactionKind::Expense, 100, "Food", "newest"),
            txn(TransactionKind::Expense, 200, "Food", "oldest"),
        ];

        let mut buf = Vec::new();
        export_report_csv(&txns, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let newest = csv.find("newest").unwrap();
        let oldest = csv.find("oldest").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(report_filename(date), "report_2024-05-20.csv");
    }
}
