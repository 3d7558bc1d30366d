//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are immutable
//! once recorded: the only mutation the ledger supports is deletion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// A recorded income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount, always strictly positive; the kind carries the sign
    pub amount: Money,

    /// Category label (free-form; standard labels in [`super::category`])
    pub category: String,

    /// Transaction date (only month/year granularity is ever aggregated)
    pub date: NaiveDate,

    /// Optional free-text annotation
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Signed contribution to the running balance: positive for income,
    /// negative for expense.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Check whether the transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.category,
            sign,
            self.amount
        )
    }
}

/// Input for recording a new transaction (everything but the id)
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

impl TransactionDraft {
    /// Create a draft with an empty note
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            date,
            note: String::new(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::BlankCategory);
        }
        Ok(())
    }

    /// Turn the draft into a transaction with a freshly assigned id
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            date: self.date,
            note: self.note,
        }
    }
}

/// Validation errors for transaction drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    BlankCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::BlankCategory => write!(f, "Category must not be blank"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_draft_into_transaction() {
        let draft = TransactionDraft::new(
            TransactionKind::Expense,
            Money::from_cents(1250),
            "Food",
            sample_date(),
        )
        .with_note("lunch");

        assert!(draft.validate().is_ok());
        let txn = draft.into_transaction();
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount.cents(), 1250);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.note, "lunch");
    }

    #[test]
    fn test_draft_rejects_non_positive_amount() {
        let zero = TransactionDraft::new(
            TransactionKind::Income,
            Money::zero(),
            "Salary",
            sample_date(),
        );
        assert_eq!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        let negative = TransactionDraft::new(
            TransactionKind::Income,
            Money::from_cents(-100),
            "Salary",
            sample_date(),
        );
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_draft_rejects_blank_category() {
        let draft = TransactionDraft::new(
            TransactionKind::Expense,
            Money::from_cents(100),
            "   ",
            sample_date(),
        );
        assert_eq!(
            draft.validate(),
            Err(TransactionValidationError::BlankCategory)
        );
    }

    #[test]
    fn test_signed_amount() {
        let income = TransactionDraft::new(
            TransactionKind::Income,
            Money::from_cents(1000),
            "Salary",
            sample_date(),
        )
        .into_transaction();
        assert_eq!(income.signed_amount().cents(), 1000);

        let expense = TransactionDraft::new(
            TransactionKind::Expense,
            Money::from_cents(400),
            "Food",
            sample_date(),
        )
        .into_transaction();
        assert_eq!(expense.signed_amount().cents(), -400);
    }

    #[test]
    fn test_in_month() {
        let txn = TransactionDraft::new(
            TransactionKind::Expense,
            Money::from_cents(100),
            "Food",
            sample_date(),
        )
        .into_transaction();

        assert!(txn.in_month(2024, 5));
        assert!(!txn.in_month(2024, 6));
        assert!(!txn.in_month(2023, 5));
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"INCOME\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"EXPENSE\""
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let txn = TransactionDraft::new(
            TransactionKind::Expense,
            Money::from_cents(5000),
            "Rent",
            sample_date(),
        )
        .with_note("May rent")
        .into_transaction();

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"EXPENSE\""));
        assert!(json.contains("\"date\":\"2024-05-15\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }

    #[test]
    fn test_note_defaults_to_empty() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "INCOME",
            "amount": 100000,
            "category": "Salary",
            "date": "2024-05-01"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.note, "");
    }
}
